//! Fast placeholder replacement for strings and byte strings.
//!
//! # Features
//!
//! * Replace placeholders in `&str` or in `&[u8]`.
//! * Parse a template once and replay it many times with different values.
//! * Default format: `"Hello @@name@@!"`
//! * Other delimiters: `##name##`, `$$name$$`, `%%name%%` or any custom marker.
//! * Asymmetric delimiters: `"Hello <@name@>!"`
//! * Values from maps, closures or rewindable streams.
//! * Replace placeholders in all string values of JSON, TOML or YAML data (optional, requires the `json`, `toml` or `yaml` feature).
//!
//! There is no escaping, no nesting and no logic.
//! A placeholder name is everything between the opening and closing marker.
//! Placeholders that have no value are replaced with nothing.
//!
//! # Examples
//!
//! The [`replace()`][replace] function can be used to perform replacement on a `&str`.
//! The values can be a [`HashMap`][std::collections::HashMap], a [`BTreeMap`][std::collections::BTreeMap]
//! or any other [`ValueMap`].
//!
//! ```
//! # fn main() -> Result<(), replacer::ParseError> {
//! # use std::collections::HashMap;
//! use replacer::Delimiter;
//!
//! let mut values = HashMap::new();
//! values.insert("name", "Donald");
//! values.insert("animal", "Duck");
//! assert_eq!(replacer::replace("@@name@@ @@animal@@", &Delimiter::default(), &values)?, "Donald Duck");
//! # Ok(())
//! # }
//! ```
//!
//! If the same source is used many times, parse it into a [`Template`] once.
//!
//! ```
//! # fn main() -> Result<(), replacer::ParseError> {
//! use replacer::{Delimiter, Template};
//!
//! let delimiter = Delimiter::asymmetric("<@", "@>").unwrap();
//! let template = Template::parse(b"the quick <@color@> fox", &delimiter)?;
//! assert_eq!(template.replace(&[("color", "brown")]), "the quick brown fox");
//! assert_eq!(template.replace(&[("color", "red")]), "the quick red fox");
//! # Ok(())
//! # }
//! ```
//!
//! Values can also be streamed from anything that implements [`Read`][std::io::Read] and [`Seek`][std::io::Seek].
//!
//! ```
//! # fn main() -> Result<(), replacer::Error> {
//! # use std::collections::HashMap;
//! # use std::io::Cursor;
//! let mut streams = HashMap::new();
//! streams.insert("x", Cursor::new(b"Y".to_vec()));
//!
//! let mut output = Vec::new();
//! replacer::replace_streams(b"@@x@@-@@x@@", &Default::default(), &mut output, &mut streams)?;
//! assert_eq!(output, b"Y-Y");
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod error;
pub use error::{Error, ParseError, ReplaceError, WriteError};

mod delimiter;
pub use delimiter::*;

pub mod map;
pub use map::*;

mod handle;
pub use handle::*;

mod template;
pub use template::*;

mod features;
#[allow(unused_imports)]
pub use features::*;

/// Replace placeholders in a string.
///
/// This parses the source and replays it once.
/// Use a [`Template`] if you want to replace placeholders in the same source multiple times.
///
/// Placeholders that are not in the map are replaced with nothing.
/// The maps must have [`&str`] or [`String`] keys, and the values must be [`AsRef<str>`].
pub fn replace<'a, M>(source: &str, delimiter: &Delimiter, values: &'a M) -> Result<String, ParseError>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	Ok(Template::parse_str(source, delimiter)?.replace(values))
}

/// Replace placeholders in a byte string.
///
/// Placeholders that are not in the map are replaced with nothing.
/// The maps must have [`&str`] or [`String`] keys, and the values must be [`AsRef<[u8]>`].
pub fn replace_bytes<'a, M>(source: &[u8], delimiter: &Delimiter, values: &'a M) -> Result<Vec<u8>, ParseError>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<[u8]>,
{
	Ok(Template::parse(source, delimiter)?.replace_bytes(values))
}

/// Replace placeholders in a byte string and write the result to `output`.
pub fn replace_to<'a, W, M>(source: &[u8], delimiter: &Delimiter, output: &mut W, values: &'a M) -> Result<(), Error>
where
	W: std::io::Write + ?Sized,
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<[u8]>,
{
	Template::parse(source, delimiter)?.replace_to(output, values)?;
	Ok(())
}

/// Replace placeholders in a byte string with the contents of streams and write the result to `output`.
///
/// See [`Template::replace_streams()`] for details.
pub fn replace_streams<W, S>(source: &[u8], delimiter: &Delimiter, output: &mut W, streams: &mut S) -> Result<(), Error>
where
	W: std::io::Write + ?Sized,
	S: StreamMap + ?Sized,
{
	Template::parse(source, delimiter)?.replace_streams(output, streams)?;
	Ok(())
}
