use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::io::{Read, Seek};

/// A readable stream that can be moved back to its start.
///
/// Replaying a template rewinds a stream before every use,
/// so a placeholder that appears more than once gets the full content each time.
///
/// Every [`Read`] + [`Seek`] type implements this trait.
pub trait Rewind: Read {
	/// Move the read position back to the start of the stream.
	fn rewind_to_start(&mut self) -> std::io::Result<()>;
}

impl<T: Read + Seek + ?Sized> Rewind for T {
	#[inline]
	fn rewind_to_start(&mut self) -> std::io::Result<()> {
		self.rewind()
	}
}

/// Trait for types that map placeholder names to rewindable streams.
///
/// Rewinding and reading mutate the stream,
/// so a stream map is borrowed mutably for the duration of a replay.
pub trait StreamMap {
	/// The type of the streams in the map.
	type Stream: Rewind + ?Sized;

	/// Get a stream from the map.
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream>;
}

impl<T> StreamMap for &'_ mut T
where
	T: ?Sized + StreamMap,
{
	type Stream = T::Stream;

	#[inline(always)]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		T::get_stream(self, key)
	}
}

impl<K, R> StreamMap for [(K, R)]
where
	K: Borrow<str>,
	R: Rewind,
{
	type Stream = R;

	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.iter_mut().find_map(|(k, r)| (Borrow::<str>::borrow(&*k) == key).then_some(r))
	}
}

impl<K, R> StreamMap for Vec<(K, R)>
where
	K: Borrow<str>,
	R: Rewind,
{
	type Stream = R;

	#[inline(always)]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.as_mut_slice().get_stream(key)
	}
}

impl<R: Rewind> StreamMap for BTreeMap<&str, R> {
	type Stream = R;

	#[inline]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.get_mut(key)
	}
}

impl<R: Rewind> StreamMap for BTreeMap<String, R> {
	type Stream = R;

	#[inline]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.get_mut(key)
	}
}

impl<R: Rewind, S: BuildHasher> StreamMap for HashMap<&str, R, S> {
	type Stream = R;

	#[inline]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.get_mut(key)
	}
}

impl<R: Rewind, S: BuildHasher> StreamMap for HashMap<String, R, S> {
	type Stream = R;

	#[inline]
	fn get_stream(&mut self, key: &str) -> Option<&mut Self::Stream> {
		self.get_mut(key)
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::{assert, let_assert};
	use std::io::Cursor;

	#[test]
	fn test_rewind_to_start() {
		let mut stream = Cursor::new(b"Duck".to_vec());
		let mut first = String::new();
		let_assert!(Ok(4) = stream.read_to_string(&mut first));
		let_assert!(Ok(()) = stream.rewind_to_start());
		let mut second = String::new();
		let_assert!(Ok(4) = stream.read_to_string(&mut second));
		assert!(first == second);
	}

	#[test]
	fn test_slice_stream_map() {
		let mut streams = vec![("name", Cursor::new("Donald")), ("animal", Cursor::new("Duck"))];
		let_assert!(Some(stream) = streams.get_stream("animal"));
		assert!(stream.get_ref() == &"Duck");
		assert!(streams.get_stream("color").is_none());
	}
}
