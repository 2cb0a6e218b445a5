use std::{num::NonZeroU32, path::PathBuf};

use clap::Parser;

/// The smallest edge length a cell can be given on the command line, in pixels.
const MIN_CELL_SIZE: f32 = 1.0;
/// The largest edge length a cell can be given on the command line, in pixels.
const MAX_CELL_SIZE: f32 = 1000.0;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The path to the directory which will contain the user configuration data.
    #[arg(short, long, value_name = "DIR")]
    pub(crate) config_path: Option<PathBuf>,

    /// The edge length of each cell in pixels. Overrides the stored setting.
    #[arg(short = 's', long, value_name = "PX", value_parser = parse_cell_size)]
    pub(crate) cell_size: Option<f32>,

    /// The amount of generations per second whilst playing. Overrides the stored setting.
    #[arg(short, long, value_name = "N")]
    pub(crate) ticks_per_second: Option<NonZeroU32>,

    /// A plain text pattern to seed the centre of the board with.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) pattern: Option<PathBuf>,

    /// Runs the simulation in the terminal instead of opening a window.
    #[arg(long)]
    pub(crate) headless: bool,

    /// The amount of generations to run for in headless mode.
    #[arg(short, long, default_value_t = 10)]
    pub(crate) generations: u64,

    /// The width of the surface in headless mode.
    #[arg(long, value_name = "PX", default_value_t = 500.0, value_parser = parse_surface_length)]
    pub(crate) width: f32,

    /// The height of the surface in headless mode.
    #[arg(long, value_name = "PX", default_value_t = 500.0, value_parser = parse_surface_length)]
    pub(crate) height: f32,
}

/// Parses a cell size, which must lie within [`MIN_CELL_SIZE`] & [`MAX_CELL_SIZE`].
fn parse_cell_size(text: &str) -> Result<f32, String> {
    let size: f32 = text.parse().map_err(|err| format!("{err}"))?;

    if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size) {
        return Err(format!("must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}"));
    }
    Ok(size)
}

/// Parses a surface edge length, which must be finite & not negative.
fn parse_surface_length(text: &str) -> Result<f32, String> {
    let length: f32 = text.parse().map_err(|err| format!("{err}"))?;

    if !(length.is_finite() && length >= 0.0) {
        return Err("must be a finite length of at least 0".to_owned());
    }
    Ok(length)
}
