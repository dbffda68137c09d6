#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gifmaker-rs` turns plain-text pixel animations into animated GIF files.
//!
//! A script has three sections separated by `---` lines: global settings, a
//! named palette, and frames made of comma separated color names.
//!
//! ```
//! use gifmaker_rs::prelude::*;
//!
//! let bytes = create("scale:4\n---\nb:00,00,00,FF\nw:FF,FF,FF,FF\n---\nb,w\nw,b").unwrap();
//! assert!(bytes.starts_with(b"GIF89a"));
//! ```
pub use gifmaker_types::*;
