/*
lib.rs

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

//! Ravenix matrix reasoning puzzles.
//!
//! Generates 3x3 visual puzzles where one cell is missing and the player picks the missing piece
//! among four options. See [`generator`] for the generation steps.

pub mod attributes;
pub mod error;
pub mod generator;
pub mod projection;

pub use error::PuzzleError;
pub use generator::puzzles::{
    Difficulty, GeneratorOptions, Puzzle, PuzzleGenerator, TransformPattern, generate,
};
