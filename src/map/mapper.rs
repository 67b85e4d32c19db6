use super::ValueMap;

/// A single-method source of replacement strings.
///
/// An empty string means that there is no replacement for the placeholder.
/// Since missing values are replaced with nothing, the result is the same either way.
///
/// Closures of the form `Fn(&str) -> String` implement this trait.
pub trait Mapper {
	/// Get the replacement for a placeholder name.
	fn map(&self, name: &str) -> String;
}

impl<F> Mapper for F
where
	F: Fn(&str) -> String,
{
	#[inline]
	fn map(&self, name: &str) -> String {
		self(name)
	}
}

/// [`ValueMap`] produced by [`from_mapper()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MapperValues<M> {
	mapper: M,
}

impl<'a, M> ValueMap<'a> for MapperValues<M>
where
	M: 'a + Mapper,
{
	type Value = String;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		let value = self.mapper.map(key);
		(!value.is_empty()).then_some(value)
	}
}

/// Creates a [`ValueMap`] that asks a [`Mapper`] for every placeholder.
///
/// # Example
/// ```rust
/// # use replacer::map::{from_mapper, ValueMap};
///
/// let values = from_mapper(|name: &str| if name == "name" { "Donald".to_owned() } else { String::new() });
///
/// assert_eq!(values.get("name"), Some("Donald".to_owned()));
/// assert_eq!(values.get("animal"), None);
/// ```
pub const fn from_mapper<M: Mapper>(mapper: M) -> MapperValues<M> {
	MapperValues { mapper }
}
