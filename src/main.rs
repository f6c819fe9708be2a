mod clock;
mod config;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod score;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{Config, WriteLogger};

use crate::clock::Clock;
use crate::config::Args;
use crate::game::{GameContext, SnakeGame};
use crate::score::ScoreStore;
use crate::term::TermScreen;

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("Error creating log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file).context("Error initializing logger")?;

    let grid = args.grid()?;
    let clock = Clock::new(args.fps);
    info!("Starting on a {}x{} board, {:?} per tick", grid.cells_wide(), grid.cells_high(), clock.period());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let ctx = GameContext {
        grid,
        surface: TermScreen::open(grid)?,
        clock,
        rng,
    };

    // Dropping the game restores the terminal, on errors as well as on quit
    let mut game = SnakeGame::new(ctx, ScoreStore::new(&args.record_file))?;
    game.run()
}
