//! Text animation script support for `gifmaker-rs` project.

mod error;

pub mod anim;
pub mod raster;
pub mod script;

// Re-export unified error types
pub use error::{EncodeError, FormatError, GifMakerError, Section};

// Re-export main types
pub use anim::{Animation, EncodeOptions, Repeat, encode_animation};
pub use raster::IndexedImage;
pub use script::{
	Color, Frame, Palette, PaletteEntry, Script, Sections, Settings, parse_frames, split_sections,
};

/// Converts a script document into GIF bytes with default encoder options.
///
/// This is the whole text-to-animation pipeline: split, parse, rasterize,
/// resolve delays, encode.
pub fn create(input: &str) -> Result<Vec<u8>, GifMakerError> {
	create_with(input, EncodeOptions::default())
}

/// Converts a script document into GIF bytes.
pub fn create_with(input: &str, options: EncodeOptions) -> Result<Vec<u8>, GifMakerError> {
	let script = Script::parse(input)?;
	log::debug!("parsed script: {script}");
	let animation = script.render()?;
	Ok(animation.encode(options)?)
}
