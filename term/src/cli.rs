//! Command-line arguments for the terminal game.

use clap::Parser;
use minesweeper_core::{Coord, DEFAULT_MINE_PROBABILITY};

/// Text based Minesweeper played in the terminal
#[derive(Parser, Debug)]
#[command(name = "minesweeper", version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Board dimension, the grid is NxN (asked interactively when omitted)
    #[arg(short, long)]
    pub size: Option<Coord>,

    /// Chance of each square holding a mine
    #[arg(short, long, default_value_t = DEFAULT_MINE_PROBABILITY)]
    pub mine_probability: f64,

    /// Force a seed instead of random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the font check and instructions
    #[arg(long)]
    pub skip_intro: bool,
}
