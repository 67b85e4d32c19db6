use serde::{
	de::{Error, SeqAccess, Visitor},
	ser::SerializeTuple,
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};

use crate::{Delimiter, DelimiterKind};

struct DelimiterKindVisitor;

impl<'de> Visitor<'de> for DelimiterKindVisitor {
	type Value = DelimiterKind;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("one of \"default\", \"hash\", \"dollar\" or \"percent\"")
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		DelimiterKind::from_name(v).ok_or_else(|| E::unknown_variant(v, &["default", "hash", "dollar", "percent"]))
	}
}

struct DelimiterVisitor;

impl<'de> Visitor<'de> for DelimiterVisitor {
	type Value = Delimiter;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a marker string or a pair of opening and closing markers")
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Delimiter::symmetric(v).map_err(E::custom)
	}

	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Delimiter::symmetric(v).map_err(E::custom)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let open: String = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(0, &self))?;
		let close: String = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(1, &self))?;
		Delimiter::asymmetric(open, close).map_err(A::Error::custom)
	}
}

impl Serialize for DelimiterKind {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.name())
	}
}

impl<'de> Deserialize<'de> for DelimiterKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DelimiterKindVisitor)
	}
}

impl Serialize for Delimiter {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		use serde::ser::Error;

		let open = std::str::from_utf8(self.open()).map_err(S::Error::custom)?;
		if self.is_symmetric() {
			return serializer.serialize_str(open);
		}
		let close = std::str::from_utf8(self.close()).map_err(S::Error::custom)?;
		let mut tuple = serializer.serialize_tuple(2)?;
		tuple.serialize_element(open)?;
		tuple.serialize_element(close)?;
		tuple.end()
	}
}

impl<'de> Deserialize<'de> for Delimiter {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(DelimiterVisitor)
	}
}
