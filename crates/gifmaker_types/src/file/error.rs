//! Error types for script parsing and animation encoding.

use std::fmt;

use thiserror::Error;

/// Script section an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	/// Global settings (`scale`, `delay`)
	Meta,
	/// Named color definitions
	Palette,
	/// Frame grids
	Frames,
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Meta => write!(f, "metadata"),
			Self::Palette => write!(f, "palette"),
			Self::Frames => write!(f, "frames"),
		}
	}
}

/// Errors raised while reading the text format.
///
/// Every variant that refers to a single input line quotes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	/// The document did not split into meta, palette and frames sections
	#[error(
		"expecting meta, palette, and image sections separated by `---` lines, found {found} section(s)"
	)]
	SectionCount {
		/// Number of sections actually found
		found: usize,
	},

	/// A meta line used a key other than `scale` or `delay`
	#[error("invalid option: `{line}`")]
	UnknownMetaKey {
		/// Offending line
		line: String,
	},

	/// A meta line had a recognized key but no `:` separated value
	#[error("missing value for `{key}` in `{line}`")]
	MissingValue {
		/// Recognized key
		key: String,
		/// Offending line
		line: String,
	},

	/// An integer option could not be parsed
	#[error("invalid {key} value `{value}` in `{line}`")]
	InvalidInteger {
		/// Option key
		key: String,
		/// Raw value text
		value: String,
		/// Offending line or option
		line: String,
	},

	/// A palette line did not match `name:RR,GG,BB,AA`
	#[error("failed to parse colour: `{line}`")]
	InvalidPaletteLine {
		/// Offending line
		line: String,
	},

	/// The palette defines more colors than an 8-bit index can address
	#[error("palette has {count} colours, at most {max} are supported")]
	TooManyColors {
		/// Number of palette entries
		count: usize,
		/// Maximum supported
		max: usize,
	},

	/// A frame block had no grid rows
	#[error("image data is empty")]
	EmptyFrame,

	/// A grid row had a different token count than the first row
	#[error("image data have rows of different length: row {row} has {found} cells, expected {expected}")]
	RaggedRows {
		/// Zero-based row index within the grid
		row: usize,
		/// Width established by the first row
		expected: usize,
		/// Token count of the offending row
		found: usize,
	},

	/// A grid cell names a color that is not in the palette
	#[error("unknown colour `{name}` at ({x}, {y})")]
	UnknownColor {
		/// Token as written in the grid
		name: String,
		/// Column of the cell
		x: usize,
		/// Row of the cell
		y: usize,
	},

	/// The upscaled frame would not fit the container's 16-bit sides
	#[error("scaled image of {width}x{height} pixels exceeds the {max}x{max} limit")]
	ImageTooLarge {
		/// Scaled width, saturated on overflow
		width: usize,
		/// Scaled height, saturated on overflow
		height: usize,
		/// Largest allowed side
		max: usize,
	},
}

/// Errors raised by the container encoder.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// No frames to encode
	#[error("animation has no frames")]
	NoFrames,

	/// Frame and delay lists differ in length
	#[error("got {images} image(s) but {delays} delay(s)")]
	DelayCountMismatch {
		/// Number of images
		images: usize,
		/// Number of delays
		delays: usize,
	},

	/// The palette has no colors
	#[error("cannot encode image block with empty palette")]
	EmptyPalette,

	/// The palette does not fit an 8-bit index
	#[error("palette has {count} colours, at most {max} are supported")]
	TooManyColors {
		/// Number of palette entries
		count: usize,
		/// Maximum supported
		max: usize,
	},

	/// Scaled frame dimensions exceed the container limit
	#[error("image of {width}x{height} pixels exceeds the {max}x{max} limit")]
	DimensionsTooLarge {
		/// Scaled width
		width: usize,
		/// Scaled height
		height: usize,
		/// Largest allowed side
		max: usize,
	},

	/// A frame delay exceeds the container limit
	#[error("delay {delay} exceeds the maximum of {max}")]
	DelayTooLarge {
		/// Requested delay
		delay: u32,
		/// Largest allowed delay
		max: u32,
	},

	/// GIF encoder error
	#[error(transparent)]
	Gif(#[from] gif::EncodingError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Unified error for the whole text-to-GIF conversion.
#[derive(Debug, Error)]
pub enum GifMakerError {
	/// The document shape itself is wrong
	#[error("invalid input file: {0}")]
	Document(FormatError),

	/// A section failed to parse
	#[error("invalid {section}: {source}")]
	Section {
		/// Section that failed
		section: Section,
		/// Underlying format error
		source: FormatError,
	},

	/// Rasterization failed
	#[error("invalid imgs: {0}")]
	Raster(FormatError),

	/// Encoding failed
	#[error(transparent)]
	Encode(#[from] EncodeError),
}

impl GifMakerError {
	/// Returns the underlying format error, if any.
	pub fn format_error(&self) -> Option<&FormatError> {
		match self {
			Self::Document(e) | Self::Raster(e) => Some(e),
			Self::Section {
				source,
				..
			} => Some(source),
			Self::Encode(_) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_quote_line() {
		let err = FormatError::UnknownMetaKey {
			line: "foo:123".to_string(),
		};
		assert_eq!(err.to_string(), "invalid option: `foo:123`");

		let err = FormatError::InvalidPaletteLine {
			line: "g:00".to_string(),
		};
		assert!(err.to_string().contains("`g:00`"));
	}

	#[test]
	fn test_section_context() {
		let err = GifMakerError::Section {
			section: Section::Meta,
			source: FormatError::UnknownMetaKey {
				line: "foo:1".to_string(),
			},
		};
		assert_eq!(err.to_string(), "invalid metadata: invalid option: `foo:1`");
		assert!(matches!(err.format_error(), Some(FormatError::UnknownMetaKey { .. })));
	}

	#[test]
	fn test_encode_error_has_no_format_error() {
		let err = GifMakerError::from(EncodeError::NoFrames);
		assert!(err.format_error().is_none());
	}
}
