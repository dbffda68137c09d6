//! This crate provides the text format, rasterizer and encoder for the `gifmaker-rs` project.
//!
//! # Pipeline
//!
//! - **Split**: the document is cut into meta, palette and frames sections on `---` lines
//! - **Parse**: [`Settings`](file::Settings), [`Palette`](file::Palette) and [`Frame`](file::Frame)s are read from each section
//! - **Rasterize**: each frame grid becomes an [`IndexedImage`](file::IndexedImage), upscaled by the global scale
//! - **Encode**: the images and their delays are written as an animated GIF
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use gifmaker_types::prelude::*;
//!
//! # fn main() -> Result<(), GifMakerError> {
//! let script = Script::parse("scale:2\n---\nb:00,00,00,FF\nw:FF,FF,FF,FF\n---\nb,w\nw,b")?;
//! let animation = script.render()?;
//! assert_eq!(animation.images()[0].width(), 4);
//!
//! let bytes = animation.encode(EncodeOptions::default())?;
//! assert!(bytes.starts_with(b"GIF89a"));
//! # Ok(())
//! # }
//! ```
//!
//! Or convert in one call:
//!
//! ```
//! let bytes = gifmaker_types::file::create("---\nb:00,00,00,FF\n---\nb").unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod file;

/// `use gifmaker_types::prelude::*;` to import commonly used items.
pub mod prelude;
