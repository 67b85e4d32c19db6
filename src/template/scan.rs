use memchr::memmem::Finder;

use super::{Place, Template};
use crate::error::{AdjacentPlaceholders, ParseError};
use crate::Delimiter;

impl Template {
	/// Parse a template from a byte slice.
	///
	/// Every span of the form `<open>name<close>` is cut out of the source and remembered as a [`Place`].
	/// The remaining bytes form the literal text of the template.
	///
	/// An opening marker without a matching closing marker is kept as literal text,
	/// and so is a placeholder with an empty name.
	///
	/// With a symmetric delimiter, two placeholders that touch each other (`@@a@@@@b@@`) are rejected,
	/// unless the second one is the very first token of the source.
	/// The check looks only at the opening marker, so it also rejects a placeholder
	/// followed directly by an unterminated opener (`@@a@@@@`),
	/// and an empty name followed directly by a placeholder (`@@@@@@b@@`).
	/// Asymmetric delimiters do not have this restriction.
	pub fn parse(source: &[u8], delimiter: &Delimiter) -> Result<Self, ParseError> {
		let open = delimiter.open();
		let close = delimiter.close();
		let find_open = Finder::new(open);
		let find_close = Finder::new(close);
		let reject_adjacent = delimiter.is_symmetric();

		let mut literal = Vec::with_capacity(source.len());
		let mut places = Vec::new();
		let mut finger = 0;
		while finger < source.len() {
			let start = match find_open.find(&source[finger..]) {
				Some(x) => finger + x,
				None => break,
			};

			if reject_adjacent && start == finger && finger != 0 {
				tracing::debug!(position = start, "rejecting adjacent placeholders");
				return Err(AdjacentPlaceholders {
					position: start,
					len: open.len(),
					prefix: source[..start + open.len()].to_vec(),
				}
				.into());
			}

			literal.extend_from_slice(&source[finger..start]);
			finger = start;

			// Without a closing marker, the rest of the source is literal text.
			let name_start = start + open.len();
			let name_end = match find_close.find(&source[name_start..]) {
				Some(x) => name_start + x,
				None => break,
			};
			finger = name_end + close.len();

			if name_start == name_end {
				literal.extend_from_slice(&source[start..finger]);
			} else {
				places.push(Place {
					position: literal.len(),
					name: String::from_utf8_lossy(&source[name_start..name_end]).into_owned(),
				});
			}
		}
		literal.extend_from_slice(&source[finger..]);

		// Places are found in order, but replay relies on it.
		places.sort_by_key(|place| place.position);

		tracing::trace!(places = places.len(), literal_len = literal.len(), "parsed template");
		Ok(Self { literal, places })
	}

	/// Parse a template from a string slice.
	///
	/// See [`Self::parse()`] for details.
	#[inline]
	pub fn parse_str(source: &str, delimiter: &Delimiter) -> Result<Self, ParseError> {
		Self::parse(source.as_bytes(), delimiter)
	}
}
