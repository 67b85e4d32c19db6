//! Value sources and related utilities for placeholder replacement.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

mod adapters;
pub use adapters::*;

mod mapper;
pub use mapper::*;

mod stream;
pub use stream::*;

/// Trait for types that can be used as a value map.
///
/// Placeholders whose name is not in the map are replaced with nothing.
pub trait ValueMap<'a> {
	/// The type returned by the [`get()`][Self::get] function.
	type Value;

	/// Get a value from the map.
	fn get(&'a self, key: &str) -> Option<Self::Value>;
}

/// Allow using key-value [`slice`]s as [`ValueMap`]s.
///
/// # Performance
///
/// For a few key-value pairs, where the keys and values are small,
/// this is should be reasonably performant.
///
/// However, for many numbers of key-value pairs, or when the keys or values are large,
/// you may get better performance from a [`HashMap`] or [`BTreeMap`].
///
/// # Example
/// ```rust
/// # use replacer::ValueMap;
///
/// let animals = &[("name", "Donald"), ("animal", "Duck")];
///
/// assert_eq!(animals.get("name"), Some(&"Donald"));
/// assert_eq!(animals.get("animal"), Some(&"Duck"));
/// assert_eq!(animals.get("color"), None);
/// ```
impl<'a, K, V> ValueMap<'a> for [(K, V)]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.iter().find_map(|(k, v)| (k.borrow() == key).then_some(v))
	}
}

/// Allow using key-value [`arrays`](`array`) as [`ValueMap`]s.
///
/// # Example
/// ```rust
/// # use replacer::ValueMap;
///
/// let animals = [("name", "Donald"), ("animal", "Duck")];
///
/// assert_eq!(animals.get("name"), Some(&"Donald"));
/// assert_eq!(animals.get("color"), None);
/// ```
impl<'a, K, V, const N: usize> ValueMap<'a> for [(K, V); N]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		ValueMap::get(self.as_slice(), key)
	}
}

/// Allow using key-value [`Vec`] as [`ValueMap`]s.
impl<'a, K, V> ValueMap<'a> for Vec<(K, V)>
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		ValueMap::get(self.as_slice(), key)
	}
}

macro_rules! forward_value_map {
	($($pointer:ty),* $(,)?) => {
		$(
			impl<'a, T> ValueMap<'a> for $pointer
			where
				T: ?Sized + ValueMap<'a>,
			{
				type Value = T::Value;

				#[inline(always)]
				fn get(&'a self, key: &str) -> Option<Self::Value> {
					T::get(self, key)
				}
			}
		)*
	};
}

forward_value_map!(&'_ T, &'_ mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>);

/// A "map" that never returns any values.
///
/// Replaying a template with this map removes all placeholders.
#[derive(Debug)]
pub struct NoValues;

impl<'a> ValueMap<'a> for NoValues {
	type Value = NeverValue;

	#[inline]
	fn get(&'a self, _key: &str) -> Option<Self::Value> {
		None
	}
}

/// Value returned by the [`NoValues`] map.
#[derive(Debug)]
pub enum NeverValue {}

impl<T: ?Sized> AsRef<T> for NeverValue {
	#[inline]
	fn as_ref(&self) -> &T {
		match *self {}
	}
}

macro_rules! std_value_map {
	($([$($params:tt)*] $map:ty;)*) => {
		$(
			impl<'a, V: 'a, $($params)*> ValueMap<'a> for $map {
				type Value = &'a V;

				#[inline]
				fn get(&'a self, key: &str) -> Option<Self::Value> {
					self.get(key)
				}
			}
		)*
	};
}

std_value_map! {
	[] BTreeMap<&str, V>;
	[] BTreeMap<String, V>;
	[S: BuildHasher] HashMap<&str, V, S>;
	[S: BuildHasher] HashMap<String, V, S>;
}
