//! Delimiters that mark the start and end of a placeholder.

use crate::error::InvalidDelimiter;

/// One of the predefined symmetric delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelimiterKind {
	/// `@@name@@`
	#[default]
	Default,

	/// `##name##`
	Hash,

	/// `$$name$$`
	Dollar,

	/// `%%name%%`
	Percent,
}

impl DelimiterKind {
	/// All predefined delimiters.
	pub const ALL: [Self; 4] = [Self::Default, Self::Hash, Self::Dollar, Self::Percent];

	/// Get the marker bytes used for both opening and closing a placeholder.
	pub const fn marker(self) -> &'static [u8] {
		match self {
			Self::Default => b"@@",
			Self::Hash => b"##",
			Self::Dollar => b"$$",
			Self::Percent => b"%%",
		}
	}

	/// Get the lowercase name of the delimiter kind.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Hash => "hash",
			Self::Dollar => "dollar",
			Self::Percent => "percent",
		}
	}

	/// Look up a delimiter kind by its lowercase name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}
}

/// The markers that open and close a placeholder.
///
/// A delimiter is symmetric if both markers are the same, like `@@name@@`,
/// or asymmetric if they differ, like `<@name@>`.
///
/// Changing the delimiter of a [`Replacer`][crate::Replacer] only affects templates parsed afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Delimiter {
	open: Vec<u8>,
	close: Vec<u8>,
}

impl Delimiter {
	/// Create a delimiter that uses the same marker to open and close a placeholder.
	pub fn symmetric(marker: impl Into<Vec<u8>>) -> Result<Self, InvalidDelimiter> {
		let marker = marker.into();
		if marker.is_empty() {
			return Err(InvalidDelimiter::EmptyOpen);
		}
		Ok(Self {
			close: marker.clone(),
			open: marker,
		})
	}

	/// Create a delimiter with distinct opening and closing markers.
	///
	/// If both markers are equal, this is the same as [`Self::symmetric()`].
	pub fn asymmetric(open: impl Into<Vec<u8>>, close: impl Into<Vec<u8>>) -> Result<Self, InvalidDelimiter> {
		let open = open.into();
		let close = close.into();
		if open.is_empty() {
			return Err(InvalidDelimiter::EmptyOpen);
		}
		if close.is_empty() {
			return Err(InvalidDelimiter::EmptyClose);
		}
		Ok(Self { open, close })
	}

	/// The marker that opens a placeholder.
	#[inline]
	pub fn open(&self) -> &[u8] {
		&self.open
	}

	/// The marker that closes a placeholder.
	#[inline]
	pub fn close(&self) -> &[u8] {
		&self.close
	}

	/// Check if the opening and closing markers are the same.
	#[inline]
	pub fn is_symmetric(&self) -> bool {
		self.open == self.close
	}
}

impl Default for Delimiter {
	fn default() -> Self {
		DelimiterKind::Default.into()
	}
}

impl From<DelimiterKind> for Delimiter {
	fn from(kind: DelimiterKind) -> Self {
		Self {
			open: kind.marker().to_vec(),
			close: kind.marker().to_vec(),
		}
	}
}

impl From<&Delimiter> for Delimiter {
	#[inline]
	fn from(other: &Delimiter) -> Self {
		other.clone()
	}
}

impl std::fmt::Debug for Delimiter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Delimiter")
			.field("open", &String::from_utf8_lossy(&self.open))
			.field("close", &String::from_utf8_lossy(&self.close))
			.finish()
	}
}
