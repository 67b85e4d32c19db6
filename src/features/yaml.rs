//! Replace placeholders in the string values of YAML data.

use serde::de::DeserializeOwned;

use crate::{Delimiter, ParseError, ValueMap};

/// Parse a struct from YAML data, after replacing placeholders in all string values.
///
/// The data is first parsed into a [`serde_yaml::Value`].
/// Then placeholders are replaced in every string value, including tagged values, but not in mapping keys.
/// Finally, the value is deserialized into `T`.
pub fn from_slice<'a, T: DeserializeOwned, M>(data: &[u8], delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut value: serde_yaml::Value = serde_yaml::from_slice(data)?;
	replace_string_values(&mut value, delimiter, values)?;
	Ok(serde_yaml::from_value(value)?)
}

/// Parse a struct from YAML text, after replacing placeholders in all string values.
///
/// See [`from_slice()`] for details.
pub fn from_str<'a, T: DeserializeOwned, M>(data: &str, delimiter: &Delimiter, values: &'a M) -> Result<T, Error>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	from_slice(data.as_bytes(), delimiter, values)
}

/// Replace placeholders in all string values of a YAML value.
pub fn replace_string_values<'a, M>(value: &mut serde_yaml::Value, delimiter: &Delimiter, values: &'a M) -> Result<(), ParseError>
where
	M: ValueMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	let mut pending = vec![value];
	while let Some(value) = pending.pop() {
		match value {
			serde_yaml::Value::String(text) => *text = crate::replace(text, delimiter, values)?,
			serde_yaml::Value::Sequence(items) => pending.extend(items.iter_mut()),
			serde_yaml::Value::Mapping(mapping) => pending.extend(mapping.values_mut()),
			serde_yaml::Value::Tagged(tagged) => pending.push(&mut tagged.value),
			serde_yaml::Value::Null | serde_yaml::Value::Bool(_) | serde_yaml::Value::Number(_) => (),
		}
	}
	Ok(())
}

/// Error for parsing YAML with placeholder replacement.
#[derive(Debug)]
pub enum Error {
	/// The data is not valid YAML, or does not match the requested type.
	Yaml(serde_yaml::Error),

	/// A string value contains an invalid placeholder.
	Parse(ParseError),
}

impl From<serde_yaml::Error> for Error {
	#[inline]
	fn from(other: serde_yaml::Error) -> Self {
		Self::Yaml(other)
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
			Self::Yaml(e) => std::fmt::Display::fmt(e, f),
			Self::Parse(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
