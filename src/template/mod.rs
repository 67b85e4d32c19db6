mod replay;
mod scan;

/// A parsed template.
///
/// Parsing cuts every placeholder out of the source and remembers where it was,
/// so the template can be replayed many times with different values without scanning the source again.
/// This is generally more efficient than calling [`replace()`][crate::replace] multiple times on the same source.
///
/// A template is immutable once parsed.
/// It can be shared between threads and replayed concurrently,
/// as long as every replay uses its own output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Template {
	/// The source with all placeholders removed.
	literal: Vec<u8>,

	/// The placeholders, ordered by position.
	places: Vec<Place>,
}

/// A placeholder found in the source of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
	/// The position in the literal text where the value is inserted.
	position: usize,

	/// The name of the placeholder, exactly as written between the delimiters.
	name: String,
}

impl Place {
	/// The position in the literal text of the template where the value is inserted.
	#[inline]
	pub fn position(&self) -> usize {
		self.position
	}

	/// The name of the placeholder.
	///
	/// Name bytes that are not valid UTF-8 are replaced with `U+FFFD`,
	/// so distinct non UTF-8 names like `n\x87` and `n\x88` end up with the same name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl Template {
	/// The literal text of the template: the source without any placeholders.
	#[inline]
	pub fn literal(&self) -> &[u8] {
		&self.literal
	}

	/// The placeholders in the template, ordered by position.
	#[inline]
	pub fn places(&self) -> &[Place] {
		&self.places
	}

	/// Get an iterator over the names of all placeholders, in order of appearance.
	///
	/// Names that appear multiple times are repeated.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.places.iter().map(Place::name)
	}
}

impl std::fmt::Debug for Template {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Template")
			.field("literal", &DebugByteString(&self.literal))
			.field("places", &self.places)
			.finish()
	}
}

struct DebugByteString<'a>(&'a [u8]);

impl std::fmt::Debug for DebugByteString<'_> {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if let Ok(data) = std::str::from_utf8(self.0) {
			write!(f, "b{:?}", data)
		} else {
			std::fmt::Debug::fmt(self.0, f)
		}
	}
}
