//! Frame section parsing.
//!
//! The frames section is a list of blocks separated by lines holding a single
//! `-`. A block may start with an options line (`d:10;foo:bar`), followed by
//! the grid rows: comma separated color names, one row per line.

use std::fmt;

use serde::Serialize;

use super::meta::parse_int;
use crate::file::FormatError;

/// Frame block separator line content.
pub const FRAME_SEPARATOR: &str = "-";

/// A single animation frame: a rectangular grid of color names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
	/// Row-major color names
	cells: Vec<String>,
	/// Columns per row
	width: usize,
	/// Number of rows
	height: usize,
	/// Frame delay, 0 means the global default
	delay: u32,
}

impl Frame {
	/// Creates a frame from row-major cells.
	///
	/// # Panics
	///
	/// Panics if `cells.len()` is not `width * height`.
	pub fn new(cells: Vec<String>, width: usize, height: usize, delay: u32) -> Self {
		assert_eq!(cells.len(), width * height, "Frame cell count mismatch");
		Self {
			cells,
			width,
			height,
			delay,
		}
	}

	/// Parses one frame block.
	pub fn parse(block: &str) -> Result<Self, FormatError> {
		let block = block.trim();
		if block.is_empty() {
			return Err(FormatError::EmptyFrame);
		}

		let mut rows = block.lines().peekable();
		let mut delay = 0;
		if let Some(first) = rows.next_if(|line| line.contains(':')) {
			delay = parse_options(first)?;
		}

		let mut cells = Vec::new();
		let mut width = 0;
		let mut height = 0;
		for (index, row) in rows.enumerate() {
			let before = cells.len();
			cells.extend(row.split(',').map(|token| token.trim().to_string()));
			let found = cells.len() - before;

			if index == 0 {
				width = found;
			} else if found != width {
				return Err(FormatError::RaggedRows {
					row: index,
					expected: width,
					found,
				});
			}
			height += 1;
		}

		if height == 0 {
			return Err(FormatError::EmptyFrame);
		}

		Ok(Self::new(cells, width, height, delay))
	}

	/// Returns the grid width in cells.
	#[inline]
	pub fn width(&self) -> usize {
		self.width
	}

	/// Returns the grid height in cells.
	#[inline]
	pub fn height(&self) -> usize {
		self.height
	}

	/// Returns the frame's own delay, 0 when unset.
	#[inline]
	pub fn delay(&self) -> u32 {
		self.delay
	}

	/// Returns the delay to encode, falling back to `default` when unset.
	#[inline]
	pub fn effective_delay(&self, default: u32) -> u32 {
		if self.delay > 0 { self.delay } else { default }
	}

	/// Returns the color name at `(x, y)`.
	pub fn cell(&self, x: usize, y: usize) -> Option<&str> {
		if x >= self.width || y >= self.height {
			return None;
		}
		self.cells.get(x + y * self.width).map(String::as_str)
	}

	/// Returns the row-major cells.
	pub fn cells(&self) -> &[String] {
		&self.cells
	}

	/// Returns an iterator over grid rows.
	pub fn rows(&self) -> impl Iterator<Item = &[String]> {
		self.cells.chunks(self.width.max(1))
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.width, self.height)?;
		if self.delay > 0 {
			write!(f, " (delay: {})", self.delay)?;
		}
		Ok(())
	}
}

/// Parses a `;` separated options line and returns the frame delay.
///
/// Unknown keys are ignored. Non-positive delays are kept as 0.
fn parse_options(line: &str) -> Result<u32, FormatError> {
	let mut delay = 0;
	for opt in line.split(';') {
		let Some((key, value)) = opt.split_once(':') else {
			continue;
		};
		match key.trim() {
			"d" | "delay" => {
				let parsed = parse_int("delay", value, opt)?;
				delay = u32::try_from(parsed.max(0)).unwrap_or(u32::MAX);
			}
			other => log::trace!("ignoring frame option `{other}`"),
		}
	}
	Ok(delay)
}

/// Splits the frames section into blocks and parses each one.
///
/// Blocks that are blank after trimming are dropped.
pub fn parse_frames(text: &str) -> Result<Vec<Frame>, FormatError> {
	let mut frames = Vec::new();
	let mut block = String::new();

	for line in text.lines().chain(std::iter::once(FRAME_SEPARATOR)) {
		if line.trim() != FRAME_SEPARATOR {
			block.push_str(line);
			block.push('\n');
			continue;
		}

		if !block.trim().is_empty() {
			let frame = Frame::parse(&block)?;
			log::debug!("frame #{}: {}", frames.len(), frame);
			frames.push(frame);
		}
		block.clear();
	}

	Ok(frames)
}
