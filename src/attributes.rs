/*
attributes.rs

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

//! Attribute domains.
//!
//! Each attribute of a puzzle piece takes its value from a small ordered domain.
//! The rules in [`crate::generator::rules`] compute domain indexes, and the [`Domain`] trait
//! converts these indexes back to values.
//!
//! Rotations and flips also compose, so that a transform can be applied several times in a row
//! (see [`Rotation::compose`] and [`Flip::compose`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Ordered and finite set of values for an attribute.
pub trait Domain: Copy + PartialEq + Sized + 'static {
    /// All the values, in domain order.
    const ALL: &'static [Self];

    /// Position of the value in the domain.
    fn index(self) -> usize;

    /// Value at the given position, or `None` when the index is outside of the domain.
    fn from_index(index: usize) -> Option<Self>;
}

/// The categorical dimensions of a puzzle piece.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    Shape,
    Color,
    Size,
    Rotation,
    Flip,
}

impl AttributeKind {
    /// All the attribute kinds.
    pub const ALL: [AttributeKind; 5] = [
        AttributeKind::Shape,
        AttributeKind::Color,
        AttributeKind::Size,
        AttributeKind::Rotation,
        AttributeKind::Flip,
    ];

    /// Number of values in the domain of the attribute.
    pub fn domain_size(self) -> usize {
        match self {
            AttributeKind::Shape => Shape::ALL.len(),
            AttributeKind::Color => Color::ALL.len(),
            AttributeKind::Size => SizeStep::ALL.len(),
            AttributeKind::Rotation => Rotation::ALL.len(),
            AttributeKind::Flip => Flip::ALL.len(),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttributeKind::Shape => write!(f, "shape"),
            AttributeKind::Color => write!(f, "color"),
            AttributeKind::Size => write!(f, "size"),
            AttributeKind::Rotation => write!(f, "rotation"),
            AttributeKind::Flip => write!(f, "flip"),
        }
    }
}

/// Piece shape.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Domain for Shape {
    const ALL: &'static [Self] = &[Shape::Circle, Shape::Square, Shape::Triangle];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Circle => write!(f, "circle"),
            Shape::Square => write!(f, "square"),
            Shape::Triangle => write!(f, "triangle"),
        }
    }
}

/// Piece color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Domain for Color {
    const ALL: &'static [Self] = &[
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
            Color::Purple => write!(f, "purple"),
            Color::Orange => write!(f, "orange"),
        }
    }
}

/// Discrete size steps (small, medium, large).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum SizeStep {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeStep {
    /// Scale factor applied to the renderer's base unit.
    pub fn scale(self) -> f64 {
        match self {
            SizeStep::Small => 0.7,
            SizeStep::Medium => 1.0,
            SizeStep::Large => 1.3,
        }
    }
}

impl Domain for SizeStep {
    const ALL: &'static [Self] = &[SizeStep::Small, SizeStep::Medium, SizeStep::Large];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl fmt::Display for SizeStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SizeStep::Small => write!(f, "S"),
            SizeStep::Medium => write!(f, "M"),
            SizeStep::Large => write!(f, "L"),
        }
    }
}

/// Quarter-turn rotation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum Rotation {
    #[default]
    Degrees0,
    Degrees90,
    Degrees180,
    Degrees270,
}

impl Rotation {
    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Return the rotation closest to the given angle.
    ///
    /// The angle is first reduced modulo 360, so negative angles are accepted.
    pub fn from_degrees(degrees: i32) -> Self {
        let reduced: i32 = degrees.rem_euclid(360);
        let quarter: usize = (((reduced + 45) / 90) % 4) as usize;
        Self::from_repr(quarter).unwrap_or_default()
    }

    /// Combine two rotations: `(a + b) mod 360`.
    pub fn compose(self, other: Rotation) -> Self {
        Self::from_degrees(self.degrees() as i32 + other.degrees() as i32)
    }
}

impl Domain for Rotation {
    const ALL: &'static [Self] = &[
        Rotation::Degrees0,
        Rotation::Degrees90,
        Rotation::Degrees180,
        Rotation::Degrees270,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// Mirror state of a piece.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl Flip {
    /// Apply the `other` flip on top of the current state.
    ///
    /// `None` is the identity, the same flip twice cancels out, and a different flip replaces
    /// the current one.
    pub fn compose(self, other: Flip) -> Self {
        match (self, other) {
            (current, Flip::None) => current,
            (current, applied) if current == applied => Flip::None,
            (_, applied) => applied,
        }
    }
}

impl Domain for Flip {
    const ALL: &'static [Self] = &[Flip::None, Flip::Horizontal, Flip::Vertical];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_index_roundtrip<T: Domain + fmt::Debug>() {
        for (i, value) in T::ALL.iter().enumerate() {
            assert_eq!(value.index(), i, "{value:?} is not at position {i}");
            assert_eq!(T::from_index(i), Some(*value));
        }
        assert_eq!(T::from_index(T::ALL.len()), None);
    }

    #[test]
    fn test_domain_indexes() {
        assert_index_roundtrip::<Shape>();
        assert_index_roundtrip::<Color>();
        assert_index_roundtrip::<SizeStep>();
        assert_index_roundtrip::<Rotation>();
        assert_index_roundtrip::<Flip>();
    }

    #[test]
    fn test_domain_sizes() {
        let sizes: Vec<usize> = AttributeKind::ALL
            .iter()
            .map(|kind| kind.domain_size())
            .collect();
        assert_eq!(sizes, vec![3, 5, 3, 4, 3]);
        assert!(sizes.iter().all(|s| *s >= 2));
    }

    #[test]
    fn test_rotation_compose_wraps() {
        assert_eq!(
            Rotation::Degrees270.compose(Rotation::Degrees180),
            Rotation::Degrees90
        );
        assert_eq!(
            Rotation::Degrees90.compose(Rotation::Degrees270),
            Rotation::Degrees0
        );
        assert_eq!(
            Rotation::Degrees0.compose(Rotation::Degrees0),
            Rotation::Degrees0
        );
    }

    #[test]
    fn test_rotation_from_degrees_nearest() {
        assert_eq!(Rotation::from_degrees(44), Rotation::Degrees0);
        assert_eq!(Rotation::from_degrees(46), Rotation::Degrees90);
        assert_eq!(Rotation::from_degrees(-90), Rotation::Degrees270);
        assert_eq!(Rotation::from_degrees(350), Rotation::Degrees0);
        assert_eq!(Rotation::from_degrees(720 + 180), Rotation::Degrees180);
    }

    #[test]
    fn test_flip_compose() {
        for state in Flip::ALL {
            assert_eq!(state.compose(Flip::None), *state, "none must be the identity");
        }
        assert_eq!(Flip::Horizontal.compose(Flip::Horizontal), Flip::None);
        assert_eq!(Flip::Vertical.compose(Flip::Vertical), Flip::None);
        assert_eq!(Flip::Horizontal.compose(Flip::Vertical), Flip::Vertical);
        assert_eq!(Flip::Vertical.compose(Flip::Horizontal), Flip::Horizontal);
        assert_eq!(Flip::None.compose(Flip::Vertical), Flip::Vertical);
    }

    #[test]
    fn test_size_scales() {
        assert_eq!(SizeStep::Small.scale(), 0.7);
        assert_eq!(SizeStep::Medium.scale(), 1.0);
        assert_eq!(SizeStep::Large.scale(), 1.3);
    }
}
