use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::map::Rewind;
use crate::{StreamMap, ValueMap};

impl<'a, K, V, S> ValueMap<'a> for IndexMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: 'a,
	S: BuildHasher,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		IndexMap::get(self, key)
	}
}

impl<K, R, S> StreamMap for IndexMap<K, R, S>
where
	K: Borrow<str> + Hash + Eq,
	R: Rewind,
	S: BuildHasher,
{
	type Stream = R;

	#[inline]
	fn get_stream(&mut self, key: &str) -> Option<&mut R> {
		self.get_mut(key)
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use std::collections::hash_map::DefaultHasher;
	use std::hash::BuildHasherDefault;
	use std::io::Cursor;

	use indexmap::IndexMap;
	use assert2::{assert, check, let_assert};

	use crate::{replace, replace_bytes, replace_streams, Delimiter, ValueMap};

	#[test]
	fn test_key_types() {
		let map: IndexMap<String, String> = IndexMap::from([("name".into(), "world".into())]);
		check!(let Ok("Hello world!") = replace("Hello @@name@@!", &Delimiter::default(), &map).as_deref());
		check!(let Ok("Hello !") = replace("Hello @@other@@!", &Delimiter::default(), &map).as_deref());

		let map: IndexMap<Box<str>, &str> = IndexMap::from([("name".into(), "world")]);
		check!(let Ok("Hello world!") = replace("Hello @@name@@!", &Delimiter::default(), &map).as_deref());
	}

	#[test]
	fn test_custom_hasher() {
		let mut map: IndexMap<&str, &[u8], BuildHasherDefault<DefaultHasher>> = IndexMap::default();
		map.insert("name", b"\xE2\x9D\xA4");
		check!(ValueMap::get(&map, "name") == Some(&&b"\xE2\x9D\xA4"[..]));
		check!(let Ok(b"I \xE2\x9D\xA4 you") = replace_bytes(b"I @@name@@ you", &Delimiter::default(), &map).as_deref());
	}

	#[test]
	fn test_replace_streams() {
		let mut streams: IndexMap<&str, Cursor<&str>> = IndexMap::new();
		streams.insert("name", Cursor::new("world"));
		let mut output = Vec::new();
		let_assert!(Ok(()) = replace_streams(b"@@name@@, hello @@name@@!", &Delimiter::default(), &mut output, &mut streams));
		assert!(output == b"world, hello world!");
	}
}
