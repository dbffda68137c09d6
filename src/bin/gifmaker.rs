//! gifmaker CLI
//!
//! Turns a plain-text animation script into an animated GIF.
//!
//! # Commands
//!
//! - **build**: Convert a script into a GIF file
//! - **info**: Show the settings, palette and frames of a script
//! - **preview**: Render a single frame of a script to PNG
//!
//! # Usage
//!
//! ```bash
//! # Build a GIF
//! gifmaker build walk.txt walk.gif
//!
//! # Play three times instead of looping forever
//! gifmaker build walk.txt walk.gif --loop-count 2
//!
//! # Inspect a script as JSON
//! gifmaker info walk.txt --json
//!
//! # Render frame 0 to PNG
//! gifmaker preview walk.txt 0 frame0.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use gifmaker_rs::prelude::*;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "gifmaker")]
#[command(version)]
#[command(about = "Convert plain-text pixel animations into animated GIF files", long_about = None)]
struct Cli {
	/// Show verbose output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert a script into a GIF file
	Build {
		/// Input script path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output GIF path
		#[arg(value_name = "OUTPUT_GIF")]
		output: PathBuf,

		/// Extra plays after the first one; loops forever when omitted
		#[arg(short, long, value_name = "COUNT", env = "GIFMAKER_LOOP_COUNT")]
		loop_count: Option<u16>,
	},

	/// Show information about a script
	Info {
		/// Input script path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Print the parsed script as JSON
		#[arg(short, long)]
		json: bool,
	},

	/// Render one frame of a script to a PNG file
	Preview {
		/// Input script path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Frame index to render (0-based)
		#[arg(value_name = "FRAME_INDEX")]
		index: usize,

		/// Output PNG path
		#[arg(value_name = "OUTPUT_PNG")]
		output: PathBuf,
	},
}

/// Reads and parses a script file.
fn load_script(input: &Path) -> Result<Script> {
	let text = fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
	let script = Script::parse(&text)?;
	debug!("{}: {}", input.display(), script);
	Ok(script)
}

/// Handle build command
fn handle_build(input: PathBuf, output: PathBuf, loop_count: Option<u16>) -> Result<()> {
	let repeat = loop_count.map_or(Repeat::Infinite, Repeat::Finite);

	let script = load_script(&input)?;
	let animation = script.render()?;
	let bytes = animation.encode(EncodeOptions::new(repeat))?;

	fs::write(&output, &bytes).with_context(|| format!("failed to write {}", output.display()))?;
	info!("✓ {} frame(s), {} bytes -> {}", animation.len(), bytes.len(), output.display());
	Ok(())
}

/// Handle info command
fn handle_info(input: PathBuf, json: bool) -> Result<()> {
	let script = load_script(&input)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&script)?);
		return Ok(());
	}

	let settings = script.settings();
	println!("Script: {}", input.display());
	println!("  Scale: {}", settings.scale());
	println!("  Default delay: {}", settings.delay());
	println!("  Palette: {} colour(s)", script.palette().len());
	for (index, entry) in script.palette().entries().iter().enumerate() {
		println!("    #{index:3} {entry}");
	}
	println!("  Frames: {}", script.frames().len());
	for (index, frame) in script.frames().iter().enumerate() {
		println!("    #{index:3} {frame}, effective delay {}", frame.effective_delay(settings.delay()));
	}
	Ok(())
}

/// Handle preview command
fn handle_preview(input: PathBuf, index: usize, output: PathBuf) -> Result<()> {
	let script = load_script(&input)?;
	let image = script
		.render_frame(index)
		.ok_or_else(|| anyhow!("frame {index} out of range (total frames: {})", script.frames().len()))??;

	image
		.to_rgba_image()
		.save(&output)
		.with_context(|| format!("failed to write {}", output.display()))?;
	info!("✓ frame {index} ({image}) -> {}", output.display());
	Ok(())
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { "debug" } else { "info" };
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));
	info!("gifmaker {}", env!("CARGO_PKG_VERSION"));

	match cli.command {
		Commands::Build {
			input,
			output,
			loop_count,
		} => handle_build(input, output, loop_count),

		Commands::Info {
			input,
			json,
		} => handle_info(input, json),

		Commands::Preview {
			input,
			index,
			output,
		} => handle_preview(input, index, output),
	}
}
