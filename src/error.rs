//! Module containing error details.

use std::collections::BTreeMap;

/// An error that can occur while parsing a template.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum ParseError {
	/// The template contains two placeholders without any text between them.
	AdjacentPlaceholders(AdjacentPlaceholders),
}

impl From<AdjacentPlaceholders> for ParseError {
	#[inline]
	fn from(other: AdjacentPlaceholders) -> Self {
		Self::AdjacentPlaceholders(other)
	}
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::AdjacentPlaceholders(e) => e.fmt(f),
		}
	}
}

/// The template contains two placeholders without any text between them.
///
/// With a symmetric delimiter, `@@a@@@@b@@` can not be told apart from a run of delimiter bytes,
/// so the parser rejects it.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct AdjacentPlaceholders {
	/// The byte offset within the input where the error occurs.
	///
	/// This points to the opening delimiter of the second placeholder.
	pub position: usize,

	/// The length of the opening delimiter in bytes.
	pub len: usize,

	/// The input up to and including the offending opening delimiter.
	pub prefix: Vec<u8>,
}

impl std::error::Error for AdjacentPlaceholders {}

impl std::fmt::Display for AdjacentPlaceholders {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(
			f,
			"Syntax error: can not have two placeholders side by side: {}",
			String::from_utf8_lossy(&self.prefix)
		)
	}
}

impl ParseError {
	/// Get the range in the source text that contains the error.
	pub fn source_range(&self) -> std::ops::Range<usize> {
		let (start, len) = match &self {
			Self::AdjacentPlaceholders(e) => (e.position, e.len),
		};
		std::ops::Range {
			start,
			end: start + len,
		}
	}

	/// Get the line of source that contains the error.
	///
	/// # Panics
	/// May panic if the source text is not the text that was parsed.
	pub fn source_line<'a>(&self, source: &'a [u8]) -> &'a [u8] {
		let position = self.source_range().start;
		let start = line_start(source, position);
		let end = line_end(source, position);
		&source[start..end]
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if the source line exceeds 60 characters in width.
	/// For more control over this behaviour, consider using [`Self::source_range()`] and [`Self::source_line()`] instead.
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &[u8]) -> std::fmt::Result {
		use unicode_width::UnicodeWidthStr;

		let range = self.source_range();
		let line_offset = line_start(source, range.start);
		let line = self.source_line(source);
		let line = match std::str::from_utf8(line) {
			Ok(line) => line,
			Err(_) => return Err(std::fmt::Error),
		};
		if line.width() > 60 {
			return Ok(());
		}
		let range = range.start - line_offset..(range.end - line_offset).min(line.len());
		write!(f, "  {}\n  ", line)?;
		write_underline(f, line, range)?;
		writeln!(f)
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline.
	/// If the source line is not valid UTF-8, an empty string is returned.
	pub fn source_highlighting(&self, source: &[u8]) -> String {
		let mut output = String::new();
		if self.write_source_highlighting(&mut output, source).is_err() {
			output.clear();
		}
		output
	}
}

fn line_start(source: &[u8], position: usize) -> usize {
	memchr::memrchr2(b'\n', b'\r', &source[..position]).map_or(0, |newline| newline + 1)
}

fn line_end(source: &[u8], position: usize) -> usize {
	memchr::memchr2(b'\n', b'\r', &source[position..]).map_or(source.len(), |newline| position + newline)
}

fn write_underline(f: &mut impl std::fmt::Write, line: &str, range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;
	let spaces = line.get(..range.start).map_or(0, |x| x.width());
	let carets = line.get(range).map_or(1, |x| x.width().max(1));
	write!(f, "{}", " ".repeat(spaces))?;
	write!(f, "{}", "^".repeat(carets))?;
	Ok(())
}

/// A replacement value could not be written to the output.
///
/// Replay stops at the first failing value,
/// so `errors` holds the failures collected up to that point.
#[derive(Debug)]
pub struct WriteError {
	/// The position in the literal text of the placeholder that failed.
	pub position: usize,

	/// The errors collected during replay, keyed by placeholder name.
	pub errors: BTreeMap<String, std::io::Error>,
}

impl WriteError {
	pub(crate) fn new(position: usize, name: &str, error: std::io::Error) -> Self {
		let mut errors = BTreeMap::new();
		errors.insert(name.to_owned(), error);
		Self { position, errors }
	}

	/// Get the name of the first placeholder that failed.
	pub fn name(&self) -> Option<&str> {
		self.errors.keys().next().map(String::as_str)
	}
}

impl std::error::Error for WriteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		let error = self.errors.values().next()?;
		Some(error)
	}
}

impl std::fmt::Display for WriteError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.errors.iter().next() {
			Some((name, error)) => write!(f, "Failed to write value for placeholder {:?}: {}", name, error),
			None => write!(f, "Failed to write placeholder value"),
		}
	}
}

/// An error that can occur while replaying a template into a fallible output.
#[derive(Debug)]
pub enum ReplaceError {
	/// Writing literal text to the output failed.
	Output(std::io::Error),

	/// Writing a replacement value to the output failed.
	Value(WriteError),
}

impl From<WriteError> for ReplaceError {
	#[inline]
	fn from(other: WriteError) -> Self {
		Self::Value(other)
	}
}

impl std::error::Error for ReplaceError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Output(e) => Some(e),
			Self::Value(e) => Some(e),
		}
	}
}

impl std::fmt::Display for ReplaceError {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Output(e) => write!(f, "Failed to write output: {}", e),
			Self::Value(e) => e.fmt(f),
		}
	}
}

/// An error from one of the one-shot functions that parse and replace in a single call.
#[derive(Debug)]
pub enum Error {
	/// The template could not be parsed.
	Parse(ParseError),

	/// The parsed template could not be written to the output.
	Replace(ReplaceError),
}

impl From<ParseError> for Error {
	#[inline]
	fn from(other: ParseError) -> Self {
		Self::Parse(other)
	}
}

impl From<ReplaceError> for Error {
	#[inline]
	fn from(other: ReplaceError) -> Self {
		Self::Replace(other)
	}
}

impl From<std::io::Error> for Error {
	#[inline]
	fn from(other: std::io::Error) -> Self {
		Self::Replace(ReplaceError::Output(other))
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Parse(e) => Some(e),
			Self::Replace(e) => Some(e),
		}
	}
}

impl std::fmt::Display for Error {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Parse(e) => e.fmt(f),
			Self::Replace(e) => e.fmt(f),
		}
	}
}

/// A delimiter marker was rejected.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum InvalidDelimiter {
	/// The opening marker is empty.
	EmptyOpen,

	/// The closing marker is empty.
	EmptyClose,
}

impl std::error::Error for InvalidDelimiter {}

impl std::fmt::Display for InvalidDelimiter {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::EmptyOpen => write!(f, "Invalid delimiter: opening marker is empty"),
			Self::EmptyClose => write!(f, "Invalid delimiter: closing marker is empty"),
		}
	}
}
