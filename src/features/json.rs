//! Replace placeholders in the string values of JSON data.

use serde::de::DeserializeOwned;

use crate::{Delimiter, ParseError, ValueMap};

/// Parse a struct from JSON data, after replacing placeholders in all string values.
///
/// The data is first parsed into a [`serde_json::Value`].
/// Then placeholders are replaced in every string value, but not in object keys.
/// Finally, the value is deserialized into `T`.
pub fn from_slice<'a, T: DeserializeOwned, M>(data: &[u8], delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut value: serde_json::Value = serde_json::from_slice(data)?;
	replace_string_values(&mut value, delimiter, values)?;
	Ok(T::deserialize(value)?)
}

/// Parse a struct from JSON text, after replacing placeholders in all string values.
///
/// See [`from_slice()`] for details.
pub fn from_str<'a, T: DeserializeOwned, M>(data: &str, delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	from_slice(data.as_bytes(), delimiter, values)
}

/// Replace placeholders in all string values of a JSON value.
///
/// Values are inserted as plain strings: they are never parsed as JSON themselves.
pub fn replace_string_values<'a, M>(value: &mut serde_json::Value, delimiter: &Delimiter, values: &'a M) -> Result<(), ParseError>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut pending = vec![value];
	while let Some(value) = pending.pop() {
		match value {
			serde_json::Value::String(text) => *text = crate::replace(text, delimiter, values)?,
			serde_json::Value::Array(items) => pending.extend(items.iter_mut()),
			serde_json::Value::Object(fields) => pending.extend(fields.values_mut()),
			serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::Number(_) => (),
		}
	}
	Ok(())
}

/// Error for parsing JSON with placeholder replacement.
#[derive(Debug)]
pub enum Error {
	/// The data is not valid JSON, or does not match the requested type.
	Json(serde_json::Error),

	/// A string value contains an invalid placeholder.
	Parse(ParseError),
}

impl From<serde_json::Error> for Error {
	#[inline]
	fn from(other: serde_json::Error) -> Self {
		Self::Json(other)
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
			Self::Json(e) => std::fmt::Display::fmt(e, f),
			Self::Parse(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
