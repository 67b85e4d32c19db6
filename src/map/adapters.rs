use super::ValueMap;

/// [`ValueMap`] that looks up names with a function, created by [`from_fn()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FnValues<F> {
	lookup: F,
}

/// Use a function or closure as a [`ValueMap`].
///
/// The function receives the placeholder name and returns `None` if it has no value.
///
/// # Example
/// ```rust
/// # use replacer::map::{from_fn, ValueMap};
///
/// let values = from_fn(|name| (name == "animal").then_some("Duck"));
///
/// assert_eq!(values.get("animal"), Some("Duck"));
/// assert_eq!(values.get("name"), None);
/// ```
pub const fn from_fn<F, V>(lookup: F) -> FnValues<F>
where
	F: Fn(&str) -> Option<V>,
{
	FnValues { lookup }
}

impl<'a, F, V> ValueMap<'a> for FnValues<F>
where
	F: 'a + Fn(&str) -> Option<V>,
{
	type Value = V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<V> {
		(self.lookup)(key)
	}
}

/// [`ValueMap`] that consults a second map for names missing from the first, created by [`fallback()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fallback<First, Second> {
	first: First,
	second: Second,
}

/// Look up names in `first`, and in `second` if `first` has no value.
///
/// Both maps must produce the same value type.
/// This is useful to layer per-request values over a set of defaults.
///
/// # Example
/// ```rust
/// # use replacer::{fallback, ValueMap};
///
/// let request = [("name", "Donald")];
/// let defaults = [("name", "Daisy"), ("animal", "Duck")];
/// let values = fallback(request, defaults);
///
/// assert_eq!(values.get("name"), Some(&"Donald"));
/// assert_eq!(values.get("animal"), Some(&"Duck"));
/// assert_eq!(values.get("color"), None);
/// ```
pub const fn fallback<First, Second>(first: First, second: Second) -> Fallback<First, Second> {
	Fallback { first, second }
}

impl<'a, V, First, Second> ValueMap<'a> for Fallback<First, Second>
where
	First: ValueMap<'a, Value = V>,
	Second: ValueMap<'a, Value = V>,
{
	type Value = V;

	fn get(&'a self, key: &str) -> Option<V> {
		match self.first.get(key) {
			Some(value) => Some(value),
			None => self.second.get(key),
		}
	}
}

/// [`ValueMap`] that transforms the values of another map, created by [`map_value()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mapped<M, F> {
	inner: M,
	transform: F,
}

/// Apply `transform` to every value found in `inner`.
///
/// Names that are missing from `inner` stay missing.
///
/// # Example
/// ```rust
/// # use replacer::map::{map_value, ValueMap};
///
/// let values = [("name", "Donald")];
/// let quoted = map_value(values, |value| format!("'{value}'"));
///
/// assert_eq!(quoted.get("name"), Some("'Donald'".to_owned()));
/// assert_eq!(quoted.get("animal"), None);
/// ```
pub const fn map_value<'a, M, F, V>(inner: M, transform: F) -> Mapped<M, F>
where
	M: ValueMap<'a>,
	F: Fn(M::Value) -> V,
{
	Mapped { inner, transform }
}

impl<'a, M, F, V> ValueMap<'a> for Mapped<M, F>
where
	M: ValueMap<'a>,
	F: Fn(M::Value) -> V,
{
	type Value = V;

	fn get(&'a self, key: &str) -> Option<V> {
		self.inner.get(key).map(&self.transform)
	}
}
