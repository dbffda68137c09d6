//! Meta section parsing.
//!
//! The meta section holds `key:value` lines with the global settings of an
//! animation. Only `scale` and `delay` are recognized.

use std::fmt;

use serde::Serialize;

use crate::file::FormatError;

/// Global animation settings.
///
/// Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Settings {
	/// Integer upscale factor applied to every frame
	scale: u32,
	/// Default frame delay in hundredths of a second
	delay: u32,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			scale: 1,
			delay: 1,
		}
	}
}

impl Settings {
	/// Creates settings, raising any value below 1 to 1.
	pub fn new(scale: i64, delay: i64) -> Self {
		Self {
			scale: clamp_positive(scale),
			delay: clamp_positive(delay),
		}
	}

	/// Returns the upscale factor.
	#[inline]
	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Returns the default frame delay.
	#[inline]
	pub fn delay(&self) -> u32 {
		self.delay
	}

	/// Parses the meta section text.
	///
	/// Blank lines are skipped. An unknown key fails with
	/// [`FormatError::UnknownMetaKey`] quoting the raw line.
	pub fn parse(text: &str) -> Result<Self, FormatError> {
		let mut scale = 1i64;
		let mut delay = 1i64;

		for raw in text.lines() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}

			let (key, value) = match line.split_once(':') {
				Some((key, value)) => (key.trim(), Some(value)),
				None => (line, None),
			};

			let slot = match key {
				"scale" => &mut scale,
				"delay" => &mut delay,
				_ => {
					return Err(FormatError::UnknownMetaKey {
						line: raw.to_string(),
					});
				}
			};

			let Some(value) = value else {
				return Err(FormatError::MissingValue {
					key: key.to_string(),
					line: raw.to_string(),
				});
			};
			*slot = parse_int(key, value, raw)?;
		}

		let settings = Self::new(scale, delay);
		log::debug!("meta: {settings}");
		Ok(settings)
	}
}

impl fmt::Display for Settings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "scale {}, delay {}", self.scale, self.delay)
	}
}

fn clamp_positive(value: i64) -> u32 {
	value.clamp(1, i64::from(u32::MAX)) as u32
}

/// Parses a whitespace-trimmed integer option value.
pub(crate) fn parse_int(key: &str, value: &str, line: &str) -> Result<i64, FormatError> {
	value.trim().parse::<i64>().map_err(|_| FormatError::InvalidInteger {
		key: key.to_string(),
		value: value.to_string(),
		line: line.to_string(),
	})
}
