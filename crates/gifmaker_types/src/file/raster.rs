//! Indexed image rasterization.
//!
//! Turns a [`Frame`] grid of color names into palette indices, replicating
//! each cell into a `scale × scale` block of pixels.

use std::fmt;

use image::{Rgba, RgbaImage};

use crate::file::FormatError;
use crate::file::anim::MAX_DIMENSION;
use crate::file::script::{Frame, Palette};

/// Palette indexed pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
	/// Image width in pixels
	width: usize,
	/// Image height in pixels
	height: usize,
	/// Row-major palette indices
	pixels: Vec<u8>,
	/// Color table the indices point into
	palette: Palette,
}

impl IndexedImage {
	/// Creates an image from raw indices.
	///
	/// # Panics
	///
	/// Panics if `pixels.len()` is not `width * height`.
	pub fn new(width: usize, height: usize, pixels: Vec<u8>, palette: Palette) -> Self {
		assert_eq!(pixels.len(), width * height, "Indexed pixel data size mismatch");
		Self {
			width,
			height,
			pixels,
			palette,
		}
	}

	/// Rasterizes `frame` through `palette`, upscaled by `scale`.
	///
	/// Each grid token resolves to the position of its palette entry; a
	/// repeated name resolves to its last occurrence. A `scale` of 0 is
	/// treated as 1.
	///
	/// # Errors
	///
	/// Returns [`FormatError::UnknownColor`] for a token missing from the
	/// palette, [`FormatError::TooManyColors`] for a palette that does not
	/// fit 8-bit indices, or [`FormatError::ImageTooLarge`] when a scaled side
	/// exceeds [`MAX_DIMENSION`]. The size is checked before allocating.
	pub fn rasterize(frame: &Frame, scale: u32, palette: &Palette) -> Result<Self, FormatError> {
		palette.check_size()?;
		let scale = scale.max(1) as usize;
		let (width, height) = scaled_size(frame, scale)?;
		let lookup = palette.lookup();
		let mut pixels = vec![0u8; width * height];

		for (y, row) in frame.rows().enumerate() {
			for (x, name) in row.iter().enumerate() {
				let index = lookup
					.get(name.as_str())
					.and_then(|&index| u8::try_from(index).ok())
					.ok_or_else(|| FormatError::UnknownColor {
						name: name.clone(),
						x,
						y,
					})?;

				for sy in 0..scale {
					let start = (y * scale + sy) * width + x * scale;
					pixels[start..start + scale].fill(index);
				}
			}
		}

		log::trace!("rasterized {frame} at scale {scale} into {width}x{height}");
		Ok(Self::new(width, height, pixels, palette.clone()))
	}

	/// Returns the width in pixels.
	#[inline]
	pub fn width(&self) -> usize {
		self.width
	}

	/// Returns the height in pixels.
	#[inline]
	pub fn height(&self) -> usize {
		self.height
	}

	/// Returns the row-major palette indices.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Returns the color table.
	#[inline]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns the palette index at `(x, y)`.
	pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		Some(self.pixels[x + y * self.width])
	}

	/// Expands the indices into an RGBA image.
	///
	/// Indices outside the palette map to transparent black.
	pub fn to_rgba_image(&self) -> RgbaImage {
		let colors: Vec<[u8; 4]> = self.palette.colors().map(|c| c.to_array()).collect();
		RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
			let index = self.pixels[x as usize + y as usize * self.width] as usize;
			Rgba(colors.get(index).copied().unwrap_or_default())
		})
	}
}

/// Returns the pixel size of `frame` at `scale`, bounded by [`MAX_DIMENSION`].
fn scaled_size(frame: &Frame, scale: usize) -> Result<(usize, usize), FormatError> {
	let side = |cells: usize| cells.checked_mul(scale).filter(|&n| n <= MAX_DIMENSION);
	let (Some(width), Some(height)) = (side(frame.width()), side(frame.height())) else {
		return Err(FormatError::ImageTooLarge {
			width: frame.width().saturating_mul(scale),
			height: frame.height().saturating_mul(scale),
			max: MAX_DIMENSION,
		});
	};
	Ok((width, height))
}

impl fmt::Display for IndexedImage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} ({} colours)", self.width, self.height, self.palette.len())
	}
}
