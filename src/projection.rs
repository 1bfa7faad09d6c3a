/*
projection.rs

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

//! Renderer-ready representation of the puzzle pieces.
//!
//! The generator works on [`SymbolicObject`] values.
//! Before handing a puzzle to the presentation layer, the objects are converted into
//! [`VisualObject`] values that carry everything a renderer needs: the shape to draw, an RGBA
//! color, a scale factor, an angle in degrees, and a flip state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{Color, Flip, Shape};
use crate::generator::grid::{GRID_DIM, GridCell, SymbolicCell, SymbolicGrid};
use crate::generator::object::SymbolicObject;

/// 3x3 grid of renderer-ready cells. `None` is the hole.
pub type VisualGrid = [[Option<VisualCell>; GRID_DIM]; GRID_DIM];

/// Color components for the renderer.
///
/// Components are integers between 0 and 255.
pub fn rgba(color: Color) -> (u8, u8, u8, u8) {
    match color {
        Color::Red => (0xe0, 0x1b, 0x24, 0xff),
        Color::Blue => (0x1c, 0x71, 0xd8, 0xff),
        Color::Green => (0x2e, 0xc2, 0x7e, 0xff),
        Color::Purple => (0x91, 0x41, 0xac, 0xff),
        Color::Orange => (0xff, 0x78, 0x00, 0xff),
    }
}

/// One object as the renderer draws it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct VisualObject {
    pub shape: Shape,
    pub color: Color,

    /// Color components, see [`rgba`].
    pub rgba: (u8, u8, u8, u8),

    /// Size relative to the renderer's base unit.
    pub scale: f64,

    /// Clockwise rotation angle.
    pub rotation_degrees: u16,

    pub flip: Flip,
    pub layer: Option<i32>,
}

/// Objects drawn in one grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VisualCell {
    pub objects: Vec<VisualObject>,
}

impl From<&SymbolicObject> for VisualObject {
    fn from(object: &SymbolicObject) -> Self {
        Self {
            shape: object.shape,
            color: object.color,
            rgba: rgba(object.color),
            scale: object.size.scale(),
            rotation_degrees: object.rotation.degrees(),
            flip: object.flip,
            layer: object.layer,
        }
    }
}

impl From<&SymbolicCell> for VisualCell {
    fn from(cell: &SymbolicCell) -> Self {
        Self {
            objects: cell.objects.iter().map(VisualObject::from).collect(),
        }
    }
}

impl fmt::Display for VisualObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}x {} {}", self.scale, self.color, self.shape)?;
        if self.rotation_degrees != 0 {
            write!(f, " {}°", self.rotation_degrees)?;
        }
        match self.flip {
            Flip::None => Ok(()),
            Flip::Horizontal => write!(f, " flip-h"),
            Flip::Vertical => write!(f, " flip-v"),
        }
    }
}

/// Convert the symbolic grid into a renderer-ready grid. Holes become `None`.
pub fn project_grid(grid: &SymbolicGrid) -> VisualGrid {
    let rows = grid.rows();
    std::array::from_fn(|row| {
        std::array::from_fn(|col| match &rows[row][col] {
            GridCell::Filled(cell) => Some(VisualCell::from(cell)),
            GridCell::Hole => None,
        })
    })
}
