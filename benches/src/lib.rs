//! Benchmark helper utilities for gifmaker-rs
//!
//! This module generates synthetic animation scripts for the benchmark suite.

/// Generates a script with `frames` frames of `width`×`height` cells.
///
/// The palette holds `colors` entries named `c0`, `c1`, ... and the grids
/// cycle through them so every color is used.
pub fn generate_script(width: usize, height: usize, frames: usize, colors: usize, scale: u32) -> String {
	let colors = colors.clamp(1, 256);
	let mut script = format!("scale:{scale}\ndelay:5\n---\n");

	for i in 0..colors {
		let v = (i * 255 / colors) as u8;
		script.push_str(&format!("c{i}:{v:02X},{:02X},{:02X},FF\n", v.wrapping_mul(3), 255 - v));
	}
	script.push_str("---\n");

	for f in 0..frames {
		if f > 0 {
			script.push_str("-\n");
			if f % 2 == 0 {
				script.push_str(&format!("d:{}\n", f + 1));
			}
		}
		for y in 0..height {
			let row: Vec<String> = (0..width).map(|x| format!("c{}", (x + y + f) % colors)).collect();
			script.push_str(&row.join(","));
			script.push('\n');
		}
	}

	script
}

/// Common benchmark sizes as (width, height, frames)
pub mod sizes {
	/// Icon sized: 16x16 cells, 4 frames
	pub const ICON: (usize, usize, usize) = (16, 16, 4);
	/// Sprite sized: 64x64 cells, 8 frames
	pub const SPRITE: (usize, usize, usize) = (64, 64, 8);
	/// Scene sized: 160x120 cells, 16 frames
	pub const SCENE: (usize, usize, usize) = (160, 120, 16);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_script_shape() {
		let script = generate_script(3, 2, 2, 4, 1);
		assert!(script.starts_with("scale:1\ndelay:5\n---\nc0:"));
		assert_eq!(script.matches("\n---\n").count(), 2);
		assert!(script.ends_with("c1,c2,c3\nc2,c3,c0\n"));
	}

	#[test]
	fn test_generate_script_parses() {
		let script = generate_script(8, 4, 3, 16, 2);
		let parsed = gifmaker_types::file::Script::parse(&script).unwrap();
		assert_eq!(parsed.frames().len(), 3);
		assert_eq!(parsed.palette().len(), 16);
		assert_eq!(parsed.frames()[2].delay(), 3);
	}
}
