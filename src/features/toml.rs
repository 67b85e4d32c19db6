//! Replace placeholders in the string values of TOML data.

use serde::de::DeserializeOwned;

use crate::{Delimiter, ParseError, ValueMap};

/// Parse a struct from TOML data, after replacing placeholders in all string values.
///
/// The data must be valid UTF-8.
/// See [`from_str()`] for details.
pub fn from_slice<'a, T: DeserializeOwned, M>(data: &[u8], delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	from_str(std::str::from_utf8(data)?, delimiter, values)
}

/// Parse a struct from TOML text, after replacing placeholders in all string values.
///
/// The text is first parsed into a [`toml::Value`].
/// Then placeholders are replaced in every string value, but not in table keys.
/// Finally, the value is deserialized into `T`.
pub fn from_str<'a, T: DeserializeOwned, M>(data: &str, delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut value: toml::Value = toml::from_str(data)?;
	replace_string_values(&mut value, delimiter, values)?;
	Ok(T::deserialize(value)?)
}

/// Replace placeholders in all string values of a TOML value.
pub fn replace_string_values<'a, M>(value: &mut toml::Value, delimiter: &Delimiter, values: &'a M) -> Result<(), ParseError>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut pending = vec![value];
	while let Some(value) = pending.pop() {
		match value {
			toml::Value::String(text) => *text = crate::replace(text, delimiter, values)?,
			toml::Value::Array(items) => pending.extend(items.iter_mut()),
			toml::Value::Table(table) => pending.extend(table.iter_mut().map(|(_key, value)| value)),
			toml::Value::Integer(_) | toml::Value::Float(_) | toml::Value::Boolean(_) | toml::Value::Datetime(_) => (),
		}
	}
	Ok(())
}

/// Error for parsing TOML with placeholder replacement.
#[derive(Debug)]
pub enum Error {
	/// The input is not valid UTF-8.
	InvalidUtf8(std::str::Utf8Error),

	/// The data is not valid TOML.
	Toml(toml::de::Error),

	/// A string value contains an invalid placeholder.
	Parse(ParseError),
}

impl From<std::str::Utf8Error> for Error {
	#[inline]
	fn from(other: std::str::Utf8Error) -> Self {
		Self::InvalidUtf8(other)
	}
}

impl From<toml::de::Error> for Error {
	#[inline]
	fn from(other: toml::de::Error) -> Self {
		Self::Toml(other)
	}
}

impl From<ParseError> for Error {
	#[inline]
	fn from(other: ParseError) -> Self {
		Self::Parse(other)
	}
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidUtf8(e) => std::fmt::Display::fmt(e, f),
			Self::Toml(e) => std::fmt::Display::fmt(e, f),
			Self::Parse(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
