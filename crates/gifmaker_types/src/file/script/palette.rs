//! Palette section parsing.
//!
//! Each palette line binds a name to an RGBA color, `name:RR,GG,BB,AA`, with
//! two hex digits per channel. Line order is significant: the entry on the
//! n-th line becomes palette index n in the encoded image.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::file::FormatError;

/// Matches a full palette line and captures the name and four channels.
static COLOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([0-9A-Za-z_]+):([0-9a-fA-F]{2}),([0-9a-fA-F]{2}),([0-9a-fA-F]{2}),([0-9a-fA-F]{2})$")
		.expect("palette line pattern is valid")
});

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Returns true when the alpha channel is zero.
	#[inline]
	pub const fn is_transparent(&self) -> bool {
		self.a == 0
	}

	/// Returns the channels as `[r, g, b, a]`.
	#[inline]
	pub const fn to_array(&self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02X},{:02X},{:02X},{:02X}", self.r, self.g, self.b, self.a)
	}
}

/// A named palette color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaletteEntry {
	/// Name used by frame grids
	pub name: String,
	/// Color value
	pub color: Color,
}

impl PaletteEntry {
	/// Creates a palette entry.
	pub fn new(name: impl Into<String>, color: Color) -> Self {
		Self {
			name: name.into(),
			color,
		}
	}

	/// Parses a single trimmed palette line.
	pub fn parse(line: &str) -> Result<Self, FormatError> {
		let invalid = || FormatError::InvalidPaletteLine {
			line: line.to_string(),
		};
		let caps = COLOR_LINE.captures(line).ok_or_else(invalid)?;

		let mut channels = [0u8; 4];
		for (channel, group) in channels.iter_mut().zip(2..=5) {
			let digits = caps.get(group).ok_or_else(invalid)?.as_str();
			hex::decode_to_slice(digits, std::slice::from_mut(channel)).map_err(|_| invalid())?;
		}
		let [r, g, b, a] = channels;

		Ok(Self::new(&caps[1], Color::new(r, g, b, a)))
	}
}

impl fmt::Display for PaletteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.name, self.color)
	}
}

/// Ordered list of named colors.
///
/// The position of an entry is its color index. Names are expected to be
/// unique; when a name repeats, [`Palette::index_of`] resolves to its last
/// occurrence while every entry stays in the color table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Palette {
	entries: Vec<PaletteEntry>,
}

impl Palette {
	/// Largest palette an 8-bit indexed image can address.
	pub const MAX_COLORS: usize = 256;

	/// Creates an empty palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses the palette section text, skipping blank lines.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		let mut palette = Self::new();
		for raw in text.lines() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}
			palette.push(PaletteEntry::parse(line)?);
		}
		palette.check_size()?;

		log::debug!("palette: {} colour(s)", palette.len());
		Ok(palette)
	}

	/// Fails if the palette cannot be addressed by 8-bit indices.
	pub fn check_size(&self) -> Result<(), FormatError> {
		if self.entries.len() > Self::MAX_COLORS {
			return Err(FormatError::TooManyColors {
				count: self.entries.len(),
				max: Self::MAX_COLORS,
			});
		}
		Ok(())
	}

	/// Appends an entry.
	pub fn push(&mut self, entry: PaletteEntry) {
		self.entries.push(entry);
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the palette has no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entries in index order.
	pub fn entries(&self) -> &[PaletteEntry] {
		&self.entries
	}

	/// Returns an iterator over palette colors in index order.
	pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
		self.entries.iter().map(|entry| entry.color)
	}

	/// Returns the index a grid token resolves to.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.entries.iter().rposition(|entry| entry.name == name)
	}

	/// Builds a name to index lookup table.
	///
	/// Later entries overwrite earlier ones with the same name.
	pub fn lookup(&self) -> HashMap<&str, usize> {
		self.entries.iter().enumerate().map(|(index, entry)| (entry.name.as_str(), index)).collect()
	}

	/// Returns the index of the first fully transparent color.
	pub fn transparent_index(&self) -> Option<usize> {
		self.entries.iter().position(|entry| entry.color.is_transparent())
	}

	/// Returns the colors as packed RGB triples.
	pub fn to_rgb_bytes(&self) -> Vec<u8> {
		self.colors().flat_map(|c| [c.r, c.g, c.b]).collect()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors defined", self.entries.len())
	}
}

impl FromIterator<PaletteEntry> for Palette {
	fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl std::ops::Index<usize> for Palette {
	type Output = PaletteEntry;

	fn index(&self, index: usize) -> &Self::Output {
		&self.entries[index]
	}
}
