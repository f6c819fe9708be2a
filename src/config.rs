use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::clock::DEFAULT_FPS;
use crate::grid::{Grid, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT_PX, DEFAULT_WIDTH_PX};
use crate::score::DEFAULT_RECORD_FILE;

/// Snake on a wrap-around board. Arrow keys steer, Esc or Ctrl+C quits.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// File holding the longest snake reached so far.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RECORD_FILE)]
    pub record_file: PathBuf,
    /// Game updates per second.
    #[arg(
        long,
        value_name = "RATE",
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    pub fps: u32,
    /// Size of one board cell, in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: i32,
    /// Board width in pixels; must be a multiple of the cell size.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WIDTH_PX)]
    pub width: i32,
    /// Board height in pixels; must be a multiple of the cell size.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_HEIGHT_PX)]
    pub height: i32,
    #[arg(long, value_name = "PATH", default_value = "snake.log")]
    pub log_file: PathBuf,
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
    /// Seed for food placement and reset directions, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.cell_size, self.width, self.height)
    }
}
