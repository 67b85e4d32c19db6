use std::io::Write;

use crate::error::{ParseError, ReplaceError};
use crate::map::StreamMap;
use crate::{Delimiter, Template, ValueMap};

/// A reusable handle that parses templates with a configured delimiter.
///
/// The handle keeps the last parsed template, so you can parse once and replace many times.
/// Parsing again throws the previous template away.
///
/// Changing the delimiter only affects templates parsed afterwards.
///
/// # Example
/// ```
/// # fn main() -> Result<(), replacer::ParseError> {
/// # use std::collections::HashMap;
/// let mut replacer = replacer::Replacer::new();
/// replacer.parse(b"@@name@@ @@animal@@")?;
///
/// let mut values = HashMap::new();
/// values.insert("name", "Donald");
/// values.insert("animal", "Duck");
/// assert_eq!(replacer.replace(&values), "Donald Duck");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Replacer {
	delimiter: Delimiter,
	template: Template,
}

impl Replacer {
	/// Create a new replacer with the default `@@` delimiter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a new replacer with the given delimiter.
	pub fn with_delimiter(delimiter: impl Into<Delimiter>) -> Self {
		Self {
			delimiter: delimiter.into(),
			template: Template::default(),
		}
	}

	/// Get the delimiter used for parsing.
	#[inline]
	pub fn delimiter(&self) -> &Delimiter {
		&self.delimiter
	}

	/// Set the delimiter used for parsing.
	///
	/// The currently parsed template is not affected.
	pub fn set_delimiter(&mut self, delimiter: impl Into<Delimiter>) {
		self.delimiter = delimiter.into();
	}

	/// Parse a new template, replacing the previous one.
	///
	/// If parsing fails, the previous template is discarded anyway and the replacer is left empty.
	pub fn parse(&mut self, source: &[u8]) -> Result<&Template, ParseError> {
		self.template = Template::default();
		self.template = Template::parse(source, &self.delimiter)?;
		Ok(&self.template)
	}

	/// Get the last parsed template.
	#[inline]
	pub fn template(&self) -> &Template {
		&self.template
	}

	/// Take the last parsed template out of the replacer, leaving it empty.
	pub fn take_template(&mut self) -> Template {
		std::mem::take(&mut self.template)
	}

	/// Replace all placeholders in the parsed template with string values.
	///
	/// See [`Template::replace()`].
	pub fn replace<'a, M>(&self, values: &'a M) -> String
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		self.template.replace(values)
	}

	/// Replace all placeholders in the parsed template with byte values.
	///
	/// See [`Template::replace_bytes()`].
	pub fn replace_bytes<'a, M>(&self, values: &'a M) -> Vec<u8>
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<[u8]>,
	{
		self.template.replace_bytes(values)
	}

	/// Replace all placeholders in the parsed template and write the result to `output`.
	///
	/// See [`Template::replace_to()`].
	pub fn replace_to<'a, W, M>(&self, output: &mut W, values: &'a M) -> std::io::Result<()>
	where
		W: Write + ?Sized,
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<[u8]>,
	{
		self.template.replace_to(output, values)
	}

	/// Replace all placeholders in the parsed template with the contents of streams.
	///
	/// See [`Template::replace_streams()`].
	pub fn replace_streams<W, S>(&self, output: &mut W, streams: &mut S) -> Result<(), ReplaceError>
	where
		W: Write + ?Sized,
		S: StreamMap + ?Sized,
	{
		self.template.replace_streams(output, streams)
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use crate::DelimiterKind;
	use assert2::{assert, check, let_assert};
	use std::collections::HashMap;
	use std::io::Cursor;

	#[test]
	fn test_parse_and_replace() {
		let mut replacer = Replacer::new();
		check!(replacer.delimiter() == &Delimiter::default());
		let_assert!(Ok(template) = replacer.parse(b"@@name@@ @@animal@@"));
		check!(template.places().len() == 2);
		check!(replacer.replace(&[("name", "Donald"), ("animal", "Duck")]) == "Donald Duck");
		check!(replacer.replace_bytes(&[("name", "Daisy")]) == b"Daisy ");
	}

	#[test]
	fn test_reparse_replaces_template() {
		let mut replacer = Replacer::new();
		let_assert!(Ok(_) = replacer.parse(b"first @@a@@"));
		let_assert!(Ok(_) = replacer.parse(b"second @@b@@"));
		check!(replacer.replace(&[("a", "A"), ("b", "B")]) == "second B");

		let_assert!(Err(_) = replacer.parse(b"before @@one@@@@two@@ after"));
		check!(replacer.template() == &Template::default());
		check!(replacer.replace(&[("one", "1")]) == "");
	}

	#[test]
	fn test_set_delimiter() {
		let mut replacer = Replacer::new();
		let_assert!(Ok(_) = replacer.parse(b"@@a@@ %%a%%"));
		replacer.set_delimiter(DelimiterKind::Percent);
		// The parsed template still uses the old delimiter.
		check!(replacer.replace(&[("a", "x")]) == "x %%a%%");

		let_assert!(Ok(_) = replacer.parse(b"@@a@@ %%a%%"));
		check!(replacer.replace(&[("a", "x")]) == "@@a@@ x");
	}

	#[test]
	fn test_with_asymmetric_delimiter() {
		let_assert!(Ok(delimiter) = Delimiter::asymmetric("<@", "@>"));
		let mut replacer = Replacer::with_delimiter(delimiter);
		let_assert!(Ok(_) = replacer.parse(b"the quick <@colorOfFox@> fox"));
		check!(replacer.replace(&[("colorOfFox", "brown")]) == "the quick brown fox");
	}

	#[test]
	fn test_replace_streams() {
		let mut replacer = Replacer::new();
		let_assert!(Ok(_) = replacer.parse(b"@@x@@-@@x@@"));
		let mut streams = HashMap::from([(String::from("x"), Cursor::new("Y"))]);
		let mut output = Vec::new();
		let_assert!(Ok(()) = replacer.replace_streams(&mut output, &mut streams));
		assert!(output == b"Y-Y");
	}

	#[test]
	fn test_take_template() {
		let mut replacer = Replacer::new();
		let_assert!(Ok(_) = replacer.parse(b"Hello @@name@@!"));
		let template = replacer.take_template();
		check!(template.replace(&[("name", "world")]) == "Hello world!");
		check!(replacer.template().places().is_empty());

		let mut output = Vec::new();
		let_assert!(Ok(()) = replacer.replace_to(&mut output, &[("name", "world")]));
		assert!(output.is_empty());
	}
}
