/*
object.rs

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

//! Symbolic puzzle piece.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{AttributeKind, Color, Domain, Flip, Rotation, Shape, SizeStep};
use crate::error::PuzzleError;

/// Geometric transforms that can be applied to a [`SymbolicObject`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GeometricTransform {
    Rotate90,
    Rotate180,
    Rotate270,
    FlipHorizontal,
    FlipVertical,
}

/// One puzzle piece.
///
/// The object is a value: the transform methods return a new object and leave the original
/// untouched.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicObject {
    pub shape: Shape,
    pub color: Color,
    pub size: SizeStep,
    pub rotation: Rotation,
    pub flip: Flip,

    /// Layer index for multi-layer icons. Not used by the current rules.
    pub layer: Option<i32>,
}

impl SymbolicObject {
    /// Create a medium-sized object without rotation, flip, or layer.
    pub fn new(shape: Shape, color: Color) -> Self {
        Self::with_size(shape, color, SizeStep::Medium)
    }

    /// Create an object of the given size without rotation, flip, or layer.
    pub fn with_size(shape: Shape, color: Color, size: SizeStep) -> Self {
        Self {
            shape,
            color,
            size,
            rotation: Rotation::Degrees0,
            flip: Flip::None,
            layer: None,
        }
    }

    /// Return a copy of the object on the given layer.
    pub fn on_layer(self, layer: Option<i32>) -> Self {
        Self { layer, ..self }
    }

    /// Return the domain index of the given attribute.
    pub fn attribute_index(&self, kind: AttributeKind) -> usize {
        match kind {
            AttributeKind::Shape => self.shape.index(),
            AttributeKind::Color => self.color.index(),
            AttributeKind::Size => self.size.index(),
            AttributeKind::Rotation => self.rotation.index(),
            AttributeKind::Flip => self.flip.index(),
        }
    }

    /// Return a copy of the object with the given attribute set to the value at `index` in the
    /// attribute domain.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidArgument`] if `index` is outside of the domain.
    pub fn with_attribute(self, kind: AttributeKind, index: usize) -> Result<Self, PuzzleError> {
        let out_of_domain = || {
            PuzzleError::InvalidArgument(format!(
                "index {index} is outside of the {kind} domain (size {})",
                kind.domain_size()
            ))
        };
        let mut object: SymbolicObject = self;
        match kind {
            AttributeKind::Shape => {
                object.shape = Shape::from_index(index).ok_or_else(out_of_domain)?
            }
            AttributeKind::Color => {
                object.color = Color::from_index(index).ok_or_else(out_of_domain)?
            }
            AttributeKind::Size => {
                object.size = SizeStep::from_index(index).ok_or_else(out_of_domain)?
            }
            AttributeKind::Rotation => {
                object.rotation = Rotation::from_index(index).ok_or_else(out_of_domain)?
            }
            AttributeKind::Flip => {
                object.flip = Flip::from_index(index).ok_or_else(out_of_domain)?
            }
        }
        Ok(object)
    }

    /// Return a new object with the transform applied once.
    ///
    /// Rotations add up modulo 360 degrees, flips follow [`Flip::compose`].
    pub fn apply_transform(&self, transform: GeometricTransform) -> Self {
        let mut object: SymbolicObject = *self;
        match transform {
            GeometricTransform::Rotate90 => {
                object.rotation = self.rotation.compose(Rotation::Degrees90)
            }
            GeometricTransform::Rotate180 => {
                object.rotation = self.rotation.compose(Rotation::Degrees180)
            }
            GeometricTransform::Rotate270 => {
                object.rotation = self.rotation.compose(Rotation::Degrees270)
            }
            GeometricTransform::FlipHorizontal => {
                object.flip = self.flip.compose(Flip::Horizontal)
            }
            GeometricTransform::FlipVertical => object.flip = self.flip.compose(Flip::Vertical),
        }
        object
    }

    /// Return a new object with the transform applied `count` times.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidArgument`] if `count` is negative.
    pub fn apply_repeated(
        &self,
        transform: GeometricTransform,
        count: i32,
    ) -> Result<Self, PuzzleError> {
        if count < 0 {
            return Err(PuzzleError::InvalidArgument(format!(
                "repeat count must not be negative (got {count})"
            )));
        }
        Ok((0..count).fold(*self, |object, _| object.apply_transform(transform)))
    }
}

impl fmt::Display for SymbolicObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.size, self.color, self.shape)?;
        if self.rotation != Rotation::Degrees0 {
            write!(f, " {}°", self.rotation.degrees())?;
        }
        match self.flip {
            Flip::None => Ok(()),
            Flip::Horizontal => write!(f, " flip-h"),
            Flip::Vertical => write!(f, " flip-v"),
        }
    }
}
