/*
cli_options.rs

Copyright 2025 The Ravenix developers

This file is part of Ravenix.

Ravenix is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Ravenix is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Ravenix. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command line generates puzzles and prints them, so that developers can review the rules
//! and the distractors without a graphical front end.
//!
//! # Examples
//!
//! Generate a 12-question session at the hard difficulty level, with rotated pieces:
//!
//! ```text
//! $ ravenix -c 12 -f hard -t rotate-across-row
//! ```
//!
//! Print a reproducible puzzle in JSON format, for a renderer test fixture:
//!
//! ```text
//! $ ravenix --seed 42 --json
//! ```

use clap::Parser;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

use ravenix::{Difficulty, GeneratorOptions, Puzzle, PuzzleGenerator, TransformPattern};

/// Generate Ravenix matrix puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Difficulty level, which controls the position of the missing cell
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Rotation or flip pattern applied over the grid
    #[arg(value_enum, short, long, default_value_t = TransformPattern::None)]
    transform: TransformPattern,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random generator, to reproduce a sequence of puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options, generate the puzzles, and return the exit status.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let generator: PuzzleGenerator = PuzzleGenerator::new(GeneratorOptions {
        difficulty: args.difficulty,
        transform_pattern: args.transform,
    });
    // Without a seed, use the thread random generator
    let mut seeded: Option<StdRng> = args.seed.map(StdRng::seed_from_u64);

    // Puzzles are independent from each other: they only share the random generator
    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Puzzle {i}");
        let ret = match seeded.as_mut() {
            Some(rng) => generator.generate(rng),
            None => generator.generate_with_thread_rng(),
        };
        match ret {
            Ok(puzzle) => puzzles.push(puzzle),
            Err(e) => {
                error!("Cannot generate puzzle {}: {e}", i + 1);
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&puzzles) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: cannot serialize the puzzles: {e}");
                return 1;
            }
        }
        return 0;
    }

    for (i, puzzle) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "Puzzle {}/{} ({}, hole at row {} column {})",
            i + 1,
            puzzles.len(),
            args.difficulty,
            puzzle.hole().0,
            puzzle.hole().1
        );
        println!("{puzzle}");
    }
    0
}
