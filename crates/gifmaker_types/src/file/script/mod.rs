//! Text animation script support.
//!
//! A script is a UTF-8 document made of three sections separated by `---`
//! lines: global settings, a named palette, and one or more frame grids.
//!
//! # Format
//!
//! ```text
//! scale:4
//! delay:20
//! ---
//! b:00,00,00,FF
//! w:FF,FF,FF,FF
//! ---
//! b,w
//! w,b
//! -
//! d:50
//! w,b
//! b,w
//! ```
//!
//! - **Meta**: `scale:<int>` and `delay:<int>` lines, both optional.
//! - **Palette**: `name:RR,GG,BB,AA` lines. Line order gives the color index.
//! - **Frames**: blocks separated by a lone `-` line. A block may start with
//!   an options line such as `d:50`; the remaining lines are comma separated
//!   color names.
//!
//! # Usage
//!
//! ```
//! use gifmaker_types::file::script::Script;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let script = Script::parse("scale:2\n---\nb:00,00,00,FF\n---\nb,b")?;
//! assert_eq!(script.settings().scale(), 2);
//! assert_eq!(script.frames().len(), 1);
//!
//! let animation = script.render()?;
//! assert_eq!(animation.images()[0].width(), 4);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Serialize;

use crate::file::{Animation, FormatError, GifMakerError, IndexedImage, Section};

pub mod frame;
pub mod meta;
pub mod palette;

pub use frame::{Frame, parse_frames};
pub use meta::Settings;
pub use palette::{Color, Palette, PaletteEntry};

/// Section separator line content.
pub const SECTION_SEPARATOR: &str = "---";

/// Number of sections a script must contain.
pub const SECTION_COUNT: usize = 3;

/// Raw text of the three script sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
	/// Meta section text
	pub meta: &'a str,
	/// Palette section text
	pub palette: &'a str,
	/// Frames section text
	pub frames: &'a str,
}

/// Splits a document on `---` lines into exactly three sections.
pub fn split_sections(input: &str) -> Result<Sections<'_>, FormatError> {
	let mut parts = Vec::with_capacity(SECTION_COUNT);
	let mut start = 0;
	let mut offset = 0;

	for line in input.split_inclusive('\n') {
		if line.trim() == SECTION_SEPARATOR {
			parts.push(&input[start..offset]);
			start = offset + line.len();
		}
		offset += line.len();
	}
	parts.push(&input[start..]);

	match *parts.as_slice() {
		[meta, palette, frames] => Ok(Sections {
			meta,
			palette,
			frames,
		}),
		_ => Err(FormatError::SectionCount {
			found: parts.len(),
		}),
	}
}

/// Parsed animation script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
	settings: Settings,
	palette: Palette,
	frames: Vec<Frame>,
}

impl Script {
	/// Creates a script from already parsed parts.
	pub fn new(settings: Settings, palette: Palette, frames: Vec<Frame>) -> Self {
		Self {
			settings,
			palette,
			frames,
		}
	}

	/// Parses a complete script document.
	///
	/// # Errors
	///
	/// Fails on the first structural problem: wrong section count, a bad
	/// meta line, a malformed palette line, or a malformed frame block.
	pub fn parse(input: &str) -> Result<Self, GifMakerError> {
		let sections = split_sections(input).map_err(GifMakerError::Document)?;
		log::trace!(
			"sections: meta {} bytes, palette {} bytes, frames {} bytes",
			sections.meta.len(),
			sections.palette.len(),
			sections.frames.len()
		);

		let settings = Settings::parse(sections.meta).map_err(in_section(Section::Meta))?;
		let palette = Palette::parse(sections.palette).map_err(in_section(Section::Palette))?;
		let frames = parse_frames(sections.frames).map_err(in_section(Section::Frames))?;

		Ok(Self::new(settings, palette, frames))
	}

	/// Returns the global settings.
	#[inline]
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Returns the palette.
	#[inline]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns the frames in document order.
	#[inline]
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Rasterizes a single frame with the script's scale and palette.
	pub fn render_frame(&self, index: usize) -> Option<Result<IndexedImage, FormatError>> {
		let frame = self.frames.get(index)?;
		Some(IndexedImage::rasterize(frame, self.settings.scale(), &self.palette))
	}

	/// Rasterizes every frame and resolves its delay.
	pub fn render(&self) -> Result<Animation, GifMakerError> {
		Animation::assemble(self)
	}
}

impl fmt::Display for Script {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {} colour(s), {} frame(s)", self.settings, self.palette.len(), self.frames.len())
	}
}

fn in_section(section: Section) -> impl FnOnce(FormatError) -> GifMakerError {
	move |source| GifMakerError::Section {
		section,
		source,
	}
}
