/*
generator.rs

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

//! Generate random matrix puzzles.
//!
//! A puzzle is a 3x3 grid of pieces where one cell is missing, and four answer options.
//! Generating a puzzle goes through the following steps:
//!
//! * A [`rules::RuleSet`] object gives, for each grid position, the shape, the color, and the
//!   size of the piece.
//!   Each [`rules::AttributeRule`] makes one attribute change along the rows, the columns, or
//!   the diagonals of the grid.
//!
//! * [`grid::SymbolicGrid::populate`] builds the complete grid from the rules, and then rotates
//!   or flips the pieces according to a [`puzzles::TransformPattern`].
//!
//! * The [`puzzles::Difficulty`] level selects the cell to remove.
//!   [`grid::SymbolicGrid::punch_hole`] removes it, and the removed piece is the answer.
//!
//! * [`distractors::build_options`] creates three wrong answers by changing the shape or the
//!   color of the correct answer, and then shuffles the four options.
//!
//! [`puzzles::PuzzleGenerator`] runs all these steps and returns a [`puzzles::Puzzle`] object.
//! The random generator is passed to every step, so a seeded generator always gives the same
//! puzzle.

pub mod distractors;
pub mod grid;
pub mod object;
pub mod puzzles;
pub mod rules;
