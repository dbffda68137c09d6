//! Animation assembly and GIF encoding.
//!
//! [`Animation`] pairs every rasterized frame with its effective delay;
//! [`encode_animation`] hands the result to the `gif` encoder.
//!
//! # Container Mapping
//!
//! - Every frame is written with a local color table holding the palette in
//!   index order, so pixel indices are preserved verbatim.
//! - The first palette color with alpha 0 becomes the frame's transparent
//!   index. Other alpha values are not representable and are dropped.
//! - The logical screen is as large as the largest frame.
//! - Multi-frame animations carry a loop extension (see [`Repeat`]).

use std::borrow::Cow;

use crate::file::script::Script;
use crate::file::{EncodeError, GifMakerError, IndexedImage, Palette};

/// Largest width or height a GIF image may have.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Largest delay a GIF frame may carry, in hundredths of a second.
pub const MAX_DELAY: u32 = u16::MAX as u32;

/// Animation looping behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repeat {
	/// Loop forever
	#[default]
	Infinite,
	/// Play `n` additional times after the first pass
	Finite(u16),
}

impl From<Repeat> for gif::Repeat {
	fn from(value: Repeat) -> Self {
		match value {
			Repeat::Infinite => gif::Repeat::Infinite,
			Repeat::Finite(n) => gif::Repeat::Finite(n),
		}
	}
}

/// Options for [`encode_animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodeOptions {
	/// Looping behaviour, written only when there is more than one frame
	pub repeat: Repeat,
}

impl EncodeOptions {
	/// Creates options with the given looping behaviour.
	pub fn new(repeat: Repeat) -> Self {
		Self {
			repeat,
		}
	}
}

/// Rasterized frames with their resolved delays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Animation {
	images: Vec<IndexedImage>,
	delays: Vec<u32>,
}

impl Animation {
	/// Rasterizes every frame of `script` in document order.
	///
	/// A frame's delay is its own when positive, otherwise the script's
	/// default delay.
	pub fn assemble(script: &Script) -> Result<Self, GifMakerError> {
		let settings = script.settings();
		let mut animation = Self::default();

		for (index, frame) in script.frames().iter().enumerate() {
			let delay = frame.effective_delay(settings.delay());
			let image = IndexedImage::rasterize(frame, settings.scale(), script.palette())
				.map_err(GifMakerError::Raster)?;
			log::debug!("frame #{index}: {image}, delay {delay}");
			animation.push(image, delay);
		}

		Ok(animation)
	}

	/// Appends a frame.
	pub fn push(&mut self, image: IndexedImage, delay: u32) {
		self.images.push(image);
		self.delays.push(delay);
	}

	/// Returns the number of frames.
	#[inline]
	pub fn len(&self) -> usize {
		self.images.len()
	}

	/// Returns true if there are no frames.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}

	/// Returns the rasterized frames.
	#[inline]
	pub fn images(&self) -> &[IndexedImage] {
		&self.images
	}

	/// Returns the per-frame delays, parallel to [`Animation::images`].
	#[inline]
	pub fn delays(&self) -> &[u32] {
		&self.delays
	}

	/// Encodes the animation as GIF bytes.
	pub fn encode(&self, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
		encode_animation(&self.images, &self.delays, options)
	}
}

/// Encodes indexed frames and their delays into a GIF file.
///
/// # Errors
///
/// Fails when there are no frames, the delay list does not match the image
/// list, a palette is empty or larger than 256 colors, a frame does not fit
/// the 16-bit size limit, or a delay exceeds [`MAX_DELAY`].
pub fn encode_animation(
	images: &[IndexedImage],
	delays: &[u32],
	options: EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
	if images.is_empty() {
		return Err(EncodeError::NoFrames);
	}
	if images.len() != delays.len() {
		return Err(EncodeError::DelayCountMismatch {
			images: images.len(),
			delays: delays.len(),
		});
	}

	let mut frames = Vec::with_capacity(images.len());
	for (image, &delay) in images.iter().zip(delays) {
		frames.push(to_gif_frame(image, delay)?);
	}

	let screen_width = frames.iter().map(|f| f.width).max().unwrap_or(0);
	let screen_height = frames.iter().map(|f| f.height).max().unwrap_or(0);

	let mut out = Vec::new();
	{
		let mut encoder = gif::Encoder::new(&mut out, screen_width, screen_height, &[])?;
		if frames.len() > 1 {
			encoder.set_repeat(options.repeat.into())?;
		}
		for frame in &frames {
			encoder.write_frame(frame)?;
		}
	}

	log::debug!(
		"encoded {} frame(s), {}x{} screen, {} bytes",
		frames.len(),
		screen_width,
		screen_height,
		out.len()
	);
	Ok(out)
}

fn to_gif_frame(image: &IndexedImage, delay: u32) -> Result<gif::Frame<'_>, EncodeError> {
	let palette = image.palette();
	check_palette(palette)?;

	let (Ok(width), Ok(height)) = (u16::try_from(image.width()), u16::try_from(image.height())) else {
		return Err(EncodeError::DimensionsTooLarge {
			width: image.width(),
			height: image.height(),
			max: MAX_DIMENSION,
		});
	};
	let delay = u16::try_from(delay).map_err(|_| EncodeError::DelayTooLarge {
		delay,
		max: MAX_DELAY,
	})?;

	Ok(gif::Frame {
		width,
		height,
		delay,
		buffer: Cow::Borrowed(image.pixels()),
		palette: Some(palette.to_rgb_bytes()),
		transparent: palette.transparent_index().map(|index| index as u8),
		..gif::Frame::default()
	})
}

fn check_palette(palette: &Palette) -> Result<(), EncodeError> {
	if palette.is_empty() {
		return Err(EncodeError::EmptyPalette);
	}
	if palette.len() > Palette::MAX_COLORS {
		return Err(EncodeError::TooManyColors {
			count: palette.len(),
			max: Palette::MAX_COLORS,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::script::{Color, PaletteEntry};

	fn palette() -> Palette {
		[
			PaletteEntry::new("b", Color::rgb(0, 0, 0)),
			PaletteEntry::new("w", Color::rgb(0xff, 0xff, 0xff)),
			PaletteEntry::new("t", Color::new(0, 0, 0, 0)),
		]
		.into_iter()
		.collect()
	}

	fn decode(bytes: &[u8]) -> (gif::Decoder<&[u8]>, Vec<gif::Frame<'static>>) {
		let mut options = gif::DecodeOptions::new();
		options.set_color_output(gif::ColorOutput::Indexed);
		let mut decoder = options.read_info(bytes).unwrap();
		let mut frames = Vec::new();
		while let Some(frame) = decoder.read_next_frame().unwrap() {
			frames.push(frame.clone());
		}
		(decoder, frames)
	}

	#[test_log::test]
	fn test_assemble_resolves_delays() {
		let script = Script::parse("delay:7\n---\nb:00,00,00,ff\n---\nb\n-\nd:3\nb\n-\nd:0\nb").unwrap();
		let animation = Animation::assemble(&script).unwrap();
		assert_eq!(animation.len(), 3);
		assert_eq!(animation.delays(), &[7, 3, 7]);
	}

	#[test]
	fn test_assemble_unknown_color() {
		let script = Script::parse("---\nb:00,00,00,ff\n---\nb,q").unwrap();
		let err = Animation::assemble(&script).unwrap_err();
		assert!(matches!(err, GifMakerError::Raster(crate::file::FormatError::UnknownColor { .. })));
	}

	#[test]
	fn test_encode_preserves_indices() {
		let image = IndexedImage::new(2, 2, vec![0, 1, 1, 2], palette());
		let bytes = encode_animation(&[image], &[5], EncodeOptions::default()).unwrap();
		assert_eq!(&bytes[..6], b"GIF89a");

		let (decoder, frames) = decode(&bytes);
		assert_eq!((decoder.width(), decoder.height()), (2, 2));
		assert_eq!(frames.len(), 1);

		let frame = &frames[0];
		assert_eq!(&frame.buffer[..], &[0, 1, 1, 2]);
		assert_eq!(frame.delay, 5);
		assert_eq!(frame.transparent, Some(2));
		let local = frame.palette.as_ref().unwrap();
		assert_eq!(&local[..9], &[0, 0, 0, 0xff, 0xff, 0xff, 0, 0, 0]);
	}

	#[test]
	fn test_encode_loops_multi_frame() {
		let images = vec![
			IndexedImage::new(1, 1, vec![0], palette()),
			IndexedImage::new(3, 2, vec![1; 6], palette()),
		];
		let bytes = encode_animation(&images, &[1, 2], EncodeOptions::new(Repeat::Finite(3))).unwrap();
		let (decoder, frames) = decode(&bytes);
		assert_eq!((decoder.width(), decoder.height()), (3, 2));
		assert_eq!(decoder.repeat(), gif::Repeat::Finite(3));
		assert_eq!(frames.iter().map(|f| f.delay).collect::<Vec<_>>(), vec![1, 2]);
	}

	#[test]
	fn test_encode_errors() {
		let image = IndexedImage::new(1, 1, vec![0], palette());

		assert!(matches!(encode_animation(&[], &[], EncodeOptions::default()), Err(EncodeError::NoFrames)));
		assert!(matches!(
			encode_animation(std::slice::from_ref(&image), &[], EncodeOptions::default()),
			Err(EncodeError::DelayCountMismatch { .. })
		));
		assert!(matches!(
			encode_animation(std::slice::from_ref(&image), &[MAX_DELAY + 1], EncodeOptions::default()),
			Err(EncodeError::DelayTooLarge { .. })
		));

		let empty = IndexedImage::new(1, 1, vec![0], Palette::new());
		assert!(matches!(encode_animation(&[empty], &[1], EncodeOptions::default()), Err(EncodeError::EmptyPalette)));

		let wide = IndexedImage::new(MAX_DIMENSION + 1, 1, vec![0; MAX_DIMENSION + 1], palette());
		assert!(matches!(
			encode_animation(&[wide], &[1], EncodeOptions::default()),
			Err(EncodeError::DimensionsTooLarge { .. })
		));
	}
}
