use std::io::Write;

use super::{Place, Template};
use crate::error::{ReplaceError, WriteError};
use crate::map::{Rewind, StreamMap};
use crate::ValueMap;

impl Template {
	/// Walk the template, interleaving literal text with placeholder values.
	///
	/// Places are zero-width points in the literal text, so the cursor never skips any literal bytes.
	/// Replay stops at the first error.
	fn replay<W, E, L, V>(&self, output: &mut W, mut write_literal: L, mut write_value: V) -> Result<(), E>
	where
		W: ?Sized,
		L: FnMut(&mut W, &[u8]) -> Result<(), E>,
		V: FnMut(&mut W, &Place) -> Result<(), E>,
	{
		let mut last = 0;
		for place in &self.places {
			write_literal(&mut *output, &self.literal[last..place.position])?;
			write_value(&mut *output, place)?;
			last = place.position;
		}
		write_literal(output, &self.literal[last..])
	}

	/// Replay the template into an output vector.
	fn expand_into<'a, M, F>(&self, output: &mut Vec<u8>, values: &'a M, to_bytes: &F)
	where
		M: ValueMap<'a> + ?Sized,
		F: Fn(&M::Value) -> &[u8],
	{
		let result: Result<(), std::convert::Infallible> = self.replay(
			output,
			|output, data| {
				output.extend_from_slice(data);
				Ok(())
			},
			|output, place| {
				if let Some(value) = values.get(&place.name) {
					output.extend_from_slice(to_bytes(&value));
				}
				Ok(())
			},
		);
		match result {
			Ok(()) => (),
			Err(never) => match never {},
		}
	}

	fn output_capacity(&self) -> usize {
		self.literal.len() + self.literal.len() / 8
	}

	/// Replace all placeholders with byte values from the given map.
	///
	/// You can pass either a [`HashMap`][std::collections::HashMap], [`BTreeMap`][std::collections::BTreeMap]
	/// or any other [`ValueMap`] as the `values` parameter.
	/// The values must be [`AsRef<[u8]>`].
	///
	/// Placeholders that are not in the map are replaced with nothing.
	pub fn replace_bytes<'a, M>(&self, values: &'a M) -> Vec<u8>
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<[u8]>,
	{
		let mut output = Vec::with_capacity(self.output_capacity());
		self.expand_into(&mut output, values, &as_bytes::<M::Value>);
		output
	}

	/// Replace all placeholders with string values from the given map.
	///
	/// The values must be [`AsRef<str>`].
	/// Placeholders that are not in the map are replaced with nothing.
	///
	/// If the template was parsed from non UTF-8 data, invalid sequences are replaced with `U+FFFD`.
	pub fn replace<'a, M>(&self, values: &'a M) -> String
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		let mut output = Vec::with_capacity(self.output_capacity());
		self.expand_into(&mut output, values, &str_as_bytes::<M::Value>);
		match String::from_utf8(output) {
			Ok(output) => output,
			Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
		}
	}

	/// Replace all placeholders with the strings produced by a [`Mapper`][crate::Mapper].
	///
	/// An empty string from the mapper leaves the placeholder empty.
	pub fn replace_mapped<P: crate::Mapper>(&self, mapper: P) -> String {
		self.replace(&crate::from_mapper(mapper))
	}

	/// Replace all placeholders with byte values from the given map and write the result to `output`.
	///
	/// Errors from the output are returned as soon as they occur.
	pub fn replace_to<'a, W, M>(&self, output: &mut W, values: &'a M) -> std::io::Result<()>
	where
		W: Write + ?Sized,
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<[u8]>,
	{
		self.replay(
			output,
			|output, data| output.write_all(data),
			|output, place| match values.get(&place.name) {
				Some(value) => output.write_all(value.as_ref()),
				None => Ok(()),
			},
		)
	}

	/// Replace all placeholders with the contents of streams and write the result to `output`.
	///
	/// Each stream is rewound before it is copied,
	/// so a name that appears multiple times gets the full stream contents every time.
	///
	/// Replay stops at the first stream that can not be rewound or copied.
	/// The returned [`WriteError`] maps the name of that placeholder to its error.
	/// Everything up to the failing placeholder has already been written to `output`.
	pub fn replace_streams<W, S>(&self, output: &mut W, streams: &mut S) -> Result<(), ReplaceError>
	where
		W: Write + ?Sized,
		S: StreamMap + ?Sized,
	{
		self.replay(
			output,
			|output, data| output.write_all(data).map_err(ReplaceError::Output),
			|output, place| {
				let stream = match streams.get_stream(&place.name) {
					Some(stream) => stream,
					None => return Ok(()),
				};
				copy_stream(stream, output).map_err(|error| {
					tracing::debug!(name = %place.name, position = place.position, %error, "failed to write stream value");
					ReplaceError::Value(WriteError::new(place.position, &place.name, error))
				})
			},
		)
	}
}

fn as_bytes<T: AsRef<[u8]>>(value: &T) -> &[u8] {
	value.as_ref()
}

fn str_as_bytes<T: AsRef<str>>(value: &T) -> &[u8] {
	value.as_ref().as_bytes()
}

fn copy_stream<R, W>(stream: &mut R, output: &mut W) -> std::io::Result<()>
where
	R: Rewind + ?Sized,
	W: Write + ?Sized,
{
	stream.rewind_to_start()?;
	std::io::copy(stream, output)?;
	Ok(())
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use crate::{Delimiter, NoValues};
	use assert2::{assert, check, let_assert};
	use std::collections::{BTreeMap, HashMap};
	use std::io::{Cursor, Read, Seek, SeekFrom};

	fn parse(source: &str) -> Template {
		let_assert!(Ok(template) = Template::parse_str(source, &Delimiter::default()));
		template
	}

	#[test]
	fn test_donald_duck() {
		let template = parse("@@name@@ @@animal@@");
		let values = BTreeMap::from([("name", "Donald"), ("animal", "Duck")]);
		check!(template.replace(&values) == "Donald Duck");
		check!(template.replace_bytes(&values) == b"Donald Duck");
	}

	#[test]
	fn test_no_placeholders_is_identity() {
		let source = "nothing to see here, not even @@this";
		let template = parse(source);
		check!(template.replace(&NoValues) == source);
		check!(template.replace(&[("this", "that")]) == source);
	}

	#[test]
	fn test_unknown_placeholder_is_removed() {
		let template = parse("a @@x@@ b");
		check!(template.replace(&NoValues) == "a  b");
		check!(template.replace(&HashMap::<String, String>::new()) == "a  b");
	}

	#[test]
	fn test_same_name_multiple_times() {
		let template = parse("@@x@@-@@x@@");
		check!(template.replace(&[("x", "Y")]) == "Y-Y");
	}

	#[test]
	fn test_reuse_template() {
		let template = parse("a string with @@replacement0@@ and @@replacement1@@");
		let first = [("replacement0", "repl0"), ("replacement1", "repl1")];
		let second = [("replacement0", "other")];

		check!(template.replace(&first) == "a string with repl0 and repl1");
		check!(template.replace(&second) == "a string with other and ");
		check!(template.replace(&first) == "a string with repl0 and repl1");
		check!(template.replace(&second) == parse("a string with @@replacement0@@ and @@replacement1@@").replace(&second));
	}

	#[test]
	fn test_many_placeholders() {
		let mut source = String::new();
		let mut expected = String::new();
		let mut values = HashMap::new();
		for i in 0..5 {
			source.push_str(&format!("a string with @@replacement{i}@@"));
			expected.push_str(&format!("a string with repl{i}"));
			values.insert(format!("replacement{i}"), format!("repl{i}"));
		}
		check!(parse(&source).replace(&values) == expected);
	}

	#[test]
	fn test_asymmetric_back_to_back() {
		let_assert!(Ok(delimiter) = Delimiter::asymmetric("<@", "@>"));
		let_assert!(Ok(template) = Template::parse_str("<@a@><@b@>", &delimiter));
		check!(template.replace(&[("a", "1"), ("b", "2")]) == "12");
	}

	#[test]
	fn test_byte_values() {
		let template = parse("\u{2764} @@a@@!");
		let values: BTreeMap<String, Vec<u8>> = BTreeMap::from([("a".into(), b"\x87".to_vec())]);
		check!(template.replace_bytes(&values) == b"\xE2\x9D\xA4 \x87!");
	}

	#[test]
	fn test_replace_mapped() {
		let template = parse("@@name@@ @@animal@@");
		let mapper = |name: &str| match name {
			"name" => "Donald".to_owned(),
			_ => String::new(),
		};
		check!(template.replace_mapped(&mapper) == "Donald ");
		check!(template.replace_mapped(|name: &str| name.to_uppercase()) == "NAME ANIMAL");
	}

	#[test]
	fn test_replace_to() {
		let template = parse("@@name@@ @@animal@@");
		let mut output = Vec::new();
		let_assert!(Ok(()) = template.replace_to(&mut output, &[("name", "Donald"), ("animal", "Duck")]));
		assert!(output == b"Donald Duck");
	}

	#[test]
	fn test_replace_streams_rewinds() {
		let template = parse("@@x@@-@@x@@");
		let mut streams = HashMap::from([("x", Cursor::new(b"Y".to_vec()))]);
		let mut output = Vec::new();
		let_assert!(Ok(()) = template.replace_streams(&mut output, &mut streams));
		assert!(output == b"Y-Y");

		// Streams are rewound before use, so the map can be used again.
		let mut output = Vec::new();
		let_assert!(Ok(()) = template.replace_streams(&mut output, &mut streams));
		assert!(output == b"Y-Y");
	}

	struct CountingStream {
		inner: Cursor<&'static [u8]>,
		seeks: usize,
	}

	impl Read for CountingStream {
		fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
			self.inner.read(buf)
		}
	}

	impl Seek for CountingStream {
		fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
			self.seeks += 1;
			self.inner.seek(pos)
		}
	}

	#[test]
	fn test_replace_streams_rewinds_each_occurrence() {
		let template = parse("@@x@@ @@y@@ @@x@@");
		let mut streams = vec![
			("x", CountingStream { inner: Cursor::new(&b"1"[..]), seeks: 0 }),
			("z", CountingStream { inner: Cursor::new(&b"3"[..]), seeks: 0 }),
		];
		let mut output = Vec::new();
		let_assert!(Ok(()) = template.replace_streams(&mut output, &mut streams));
		assert!(output == b"1  1");
		check!(streams[0].1.seeks == 2);
		check!(streams[1].1.seeks == 0);
	}

	trait ReadSeek: Read + Seek {}

	impl<T: Read + Seek> ReadSeek for T {}

	struct BrokenStream;

	impl Read for BrokenStream {
		fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
			Err(std::io::Error::other("broken stream"))
		}
	}

	impl Seek for BrokenStream {
		fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
			Ok(0)
		}
	}

	#[test]
	fn test_replace_streams_fails_fast() {
		let template = parse("@@a@@-@@bad@@-@@c@@");
		let mut streams: BTreeMap<&str, Box<dyn ReadSeek>> = BTreeMap::new();
		streams.insert("a", Box::new(Cursor::new("A")));
		streams.insert("bad", Box::new(BrokenStream));
		streams.insert("c", Box::new(Cursor::new("C")));

		let mut output = Vec::new();
		let_assert!(Err(ReplaceError::Value(e)) = template.replace_streams(&mut output, &mut streams));
		check!(e.position == 1);
		check!(e.name() == Some("bad"));
		check!(e.errors.len() == 1);
		assert!(output == b"A-");
	}

	struct BrokenOutput;

	impl Write for BrokenOutput {
		fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
			Err(std::io::Error::other("broken output"))
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_replace_streams_output_error() {
		let template = parse("x@@a@@");
		let mut streams = BTreeMap::<&str, Cursor<Vec<u8>>>::new();
		let_assert!(Err(ReplaceError::Output(_)) = template.replace_streams(&mut BrokenOutput, &mut streams));
		let_assert!(Err(_) = template.replace_to(&mut BrokenOutput, &NoValues));
	}

	struct Unseekable;

	impl Read for Unseekable {
		fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
			Ok(0)
		}
	}

	impl Seek for Unseekable {
		fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
			Err(std::io::Error::other("no seek"))
		}
	}

	#[test]
	fn test_replace_streams_rewind_error() {
		let template = parse("a@@x@@b@@y@@");
		let mut streams: Vec<(&str, Box<dyn ReadSeek>)> = vec![
			("x", Box::new(Unseekable)),
			("y", Box::new(Cursor::new("Y"))),
		];

		let mut output = Vec::new();
		let_assert!(Err(ReplaceError::Value(e)) = template.replace_streams(&mut output, &mut streams));
		check!(e.position == 1);
		check!(e.name() == Some("x"));
		check!(e.to_string() == "Failed to write value for placeholder \"x\": no seek");
		assert!(output == b"a");
	}

	/// Accepts a limited number of bytes, then fails every write.
	struct FailAfter {
		written: Vec<u8>,
		remaining: usize,
	}

	impl Write for FailAfter {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			if self.remaining == 0 {
				return Err(std::io::Error::other("output full"));
			}
			let len = buf.len().min(self.remaining);
			self.written.extend_from_slice(&buf[..len]);
			self.remaining -= len;
			Ok(len)
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_replace_streams_output_error_during_copy() {
		let template = parse("a@@x@@b");
		let mut streams = vec![("x", Cursor::new("XXXX"))];
		let mut output = FailAfter { written: Vec::new(), remaining: 3 };

		let_assert!(Err(ReplaceError::Value(e)) = template.replace_streams(&mut output, &mut streams));
		check!(e.name() == Some("x"));
		assert!(output.written == b"aXX");
	}
}
