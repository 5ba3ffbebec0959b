//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates a puzzle with a unique solution and prints the seed, problem,
//! and solution. Passing the printed seed back reproduces the same puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Control how many hints are kept at minimum (default: 30):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --min-hints 45
//! ```

use clap::Parser;
use gridoku_generator::{PuzzleFactory, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex characters; a random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Minimum number of hints to keep in the puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    min_hints: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let factory = PuzzleFactory::new();
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let puzzle = factory.generate_with_seed(args.min_hints, seed);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("{}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("{}", puzzle.solution);
}
