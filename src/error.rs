/*
error.rs

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

//! Errors raised while building puzzles.

use thiserror::Error;

/// Type of errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// An argument is outside of its accepted range, such as a negative repeat count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The grid position is outside of the 3x3 grid, or is already the hole.
    #[error("invalid grid position ({row}, {col})")]
    InvalidPosition { row: usize, col: usize },

    /// The grid or the answer options are inconsistent.
    /// This is a bug in the generator and the puzzle must be discarded.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
