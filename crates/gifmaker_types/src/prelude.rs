//! Prelude module for `gifmaker_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use gifmaker_types::prelude::*;
//!
//! let palette = Palette::parse("b:00,00,00,FF").unwrap();
//! let frame = Frame::parse("b,b").unwrap();
//! let image = IndexedImage::rasterize(&frame, 3, &palette).unwrap();
//! assert_eq!((image.width(), image.height()), (6, 3));
//! ```

#[doc(inline)]
pub use crate::file::{
	// Pipeline
	Animation,
	// Script types
	Color,
	EncodeError,
	EncodeOptions,
	// Errors
	FormatError,
	Frame,
	GifMakerError,
	IndexedImage,
	Palette,
	PaletteEntry,
	Repeat,
	Script,
	Section,
	Settings,

	create,
	create_with,
	encode_animation,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
