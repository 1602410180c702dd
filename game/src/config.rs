//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use g2048_core::{BoardError, GameSession};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use simplelog::LevelFilter;

/// The 2048 sliding-tile puzzle in your terminal.
///
/// Arrows, wasd or hjkl slide the tiles. Enter restarts, Esc quits.
#[derive(Debug, Parser)]
#[command(name = "term2048", version)]
pub struct Args {
    /// Side length of the board.
    #[arg(
        long,
        env = "TERM2048_SIZE",
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(2..=8)
    )]
    pub size: u8,

    /// Seed for tile spawns; random when omitted.
    #[arg(long, env = "TERM2048_SEED")]
    pub seed: Option<u64>,

    /// Write a log to this file. Nothing is logged without it.
    #[arg(long, env = "TERM2048_LOG")]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: usize::from(self.size),
            seed: self.seed,
        }
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: g2048_core::Board::DEFAULT_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn session(&self) -> Result<GameSession, BoardError> {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        GameSession::new(self.size, rng)
    }
}
