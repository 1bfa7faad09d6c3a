/*
grid.rs

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

//! 3x3 symbolic grid.

use log::debug;
use serde::{Deserialize, Serialize};

use super::object::SymbolicObject;
use super::puzzles::TransformPattern;
use super::rules::RuleSet;
use crate::error::PuzzleError;

/// Number of rows and columns in the grid.
pub const GRID_DIM: usize = 3;

/// Objects at one grid position.
///
/// The rules only put one object per cell, but a cell can hold several layers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SymbolicCell {
    pub objects: Vec<SymbolicObject>,
}

impl SymbolicCell {
    /// Create a cell with a single object.
    pub fn single(object: SymbolicObject) -> Self {
        Self {
            objects: vec![object],
        }
    }
}

/// Grid position content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GridCell {
    Filled(SymbolicCell),

    /// Missing cell that the player must complete.
    Hole,
}

/// Symbolic grid object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SymbolicGrid {
    cells: [[GridCell; GRID_DIM]; GRID_DIM],
}

impl SymbolicGrid {
    /// Build a complete grid (no hole) from the rules and the transform pattern.
    ///
    /// For each position, the rules give the shape, color, and size of the object, and then the
    /// transform pattern rotates or flips it.
    pub fn populate(rules: &RuleSet, pattern: TransformPattern) -> Result<Self, PuzzleError> {
        let mut cells: [[GridCell; GRID_DIM]; GRID_DIM] =
            std::array::from_fn(|_| std::array::from_fn(|_| GridCell::Hole));

        for (row, grid_row) in cells.iter_mut().enumerate() {
            for (col, cell) in grid_row.iter_mut().enumerate() {
                let object: SymbolicObject = rules.object_at(row, col)?;
                let object: SymbolicObject = pattern.overlay(&object, row, col)?;
                debug!("Cell ({row}, {col}) = {object}");
                *cell = GridCell::Filled(SymbolicCell::single(object));
            }
        }
        Ok(Self { cells })
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [[GridCell; GRID_DIM]; GRID_DIM]) -> Self {
        Self { cells }
    }

    /// Return the cell at the given position, or `None` when the position is outside of the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[[GridCell; GRID_DIM]; GRID_DIM] {
        &self.cells
    }

    /// Return the positions of the holes.
    pub fn holes(&self) -> Vec<(usize, usize)> {
        let mut holes: Vec<(usize, usize)> = Vec::with_capacity(1);
        for (row, grid_row) in self.cells.iter().enumerate() {
            for (col, cell) in grid_row.iter().enumerate() {
                if *cell == GridCell::Hole {
                    holes.push((row, col));
                }
            }
        }
        holes
    }

    /// Return a copy of the grid with a hole at the given position, and the removed cell.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidPosition`] if the position is outside of the grid or is
    /// already a hole.
    pub fn punch_hole(&self, row: usize, col: usize) -> Result<(Self, SymbolicCell), PuzzleError> {
        match self.get(row, col) {
            Some(GridCell::Filled(cell)) => {
                let removed: SymbolicCell = cell.clone();
                let mut grid: SymbolicGrid = self.clone();
                grid.cells[row][col] = GridCell::Hole;
                debug!("Hole punched at ({row}, {col})");
                Ok((grid, removed))
            }
            Some(GridCell::Hole) | None => Err(PuzzleError::InvalidPosition { row, col }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Color, Flip, Rotation, Shape, SizeStep};

    fn canonical_grid() -> SymbolicGrid {
        SymbolicGrid::populate(&RuleSet::canonical(), TransformPattern::None).unwrap()
    }

    fn object(grid: &SymbolicGrid, row: usize, col: usize) -> SymbolicObject {
        match grid.get(row, col) {
            Some(GridCell::Filled(cell)) => cell.objects[0],
            other => panic!("Expected a filled cell at ({row}, {col}), got {other:?}"),
        }
    }

    #[test]
    fn test_populate_fills_every_cell() {
        let grid = canonical_grid();
        assert!(grid.holes().is_empty());
        for grid_row in grid.rows() {
            for cell in grid_row {
                match cell {
                    GridCell::Filled(c) => assert_eq!(c.objects.len(), 1),
                    GridCell::Hole => panic!("populate must not leave holes"),
                }
            }
        }
    }

    #[test]
    fn test_populate_canonical_values() {
        let grid = canonical_grid();
        assert_eq!(
            object(&grid, 0, 0),
            SymbolicObject::with_size(Shape::Circle, Color::Red, SizeStep::Small)
        );
        assert_eq!(
            object(&grid, 1, 2),
            SymbolicObject::with_size(Shape::Triangle, Color::Blue, SizeStep::Small)
        );
        assert_eq!(
            object(&grid, 2, 0),
            SymbolicObject::with_size(Shape::Circle, Color::Green, SizeStep::Large)
        );
    }

    #[test]
    fn test_rotate_across_row_overlay() {
        let grid =
            SymbolicGrid::populate(&RuleSet::canonical(), TransformPattern::RotateAcrossRow)
                .unwrap();
        for row in 0..GRID_DIM {
            assert_eq!(object(&grid, row, 0).rotation, Rotation::Degrees0);
            assert_eq!(object(&grid, row, 1).rotation, Rotation::Degrees90);
            assert_eq!(object(&grid, row, 2).rotation, Rotation::Degrees180);
        }
    }

    #[test]
    fn test_rotate_across_column_overlay() {
        let grid =
            SymbolicGrid::populate(&RuleSet::canonical(), TransformPattern::RotateAcrossColumn)
                .unwrap();
        for col in 0..GRID_DIM {
            assert_eq!(object(&grid, 0, col).rotation, Rotation::Degrees0);
            assert_eq!(object(&grid, 1, col).rotation, Rotation::Degrees90);
            assert_eq!(object(&grid, 2, col).rotation, Rotation::Degrees180);
        }
    }

    #[test]
    fn test_flip_across_row_overlay() {
        let grid = SymbolicGrid::populate(&RuleSet::canonical(), TransformPattern::FlipAcrossRow)
            .unwrap();
        for row in 0..GRID_DIM {
            assert_eq!(object(&grid, row, 0).flip, Flip::None);
            assert_eq!(object(&grid, row, 1).flip, Flip::Horizontal);
            assert_eq!(object(&grid, row, 2).flip, Flip::Vertical);
            assert_eq!(object(&grid, row, 2).rotation, Rotation::Degrees0);
        }
    }

    #[test]
    fn test_punch_hole() {
        let grid = canonical_grid();
        let (punched, removed) = grid.punch_hole(0, 2).unwrap();
        assert_eq!(punched.holes(), vec![(0, 2)]);
        assert_eq!(removed.objects[0], object(&grid, 0, 2));
        // The source grid is left untouched
        assert!(grid.holes().is_empty());
    }

    #[test]
    fn test_punch_hole_out_of_bounds() {
        let grid = canonical_grid();
        assert_eq!(
            grid.punch_hole(3, 0),
            Err(PuzzleError::InvalidPosition { row: 3, col: 0 })
        );
        assert_eq!(
            grid.punch_hole(1, 5),
            Err(PuzzleError::InvalidPosition { row: 1, col: 5 })
        );
    }

    #[test]
    fn test_punch_hole_twice() {
        let (punched, _) = canonical_grid().punch_hole(1, 1).unwrap();
        assert_eq!(
            punched.punch_hole(1, 1),
            Err(PuzzleError::InvalidPosition { row: 1, col: 1 })
        );
    }
}
