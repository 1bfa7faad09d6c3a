/*
rules.rs

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

//! Attribute rules.
//!
//! An [`AttributeRule`] computes, for a grid position, the domain index of one attribute.
//! The index depends on a base index, on a step derived from the [`Axis`], and on the
//! [`TransformType`] that combines both (see [`evaluate`]).
//!
//! The rule also stores an ordering of the attribute domain. The evaluated index is a position
//! in that ordering, which lets the generator shuffle the domain values per puzzle while keeping
//! the pattern structured.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeKind, Color, Shape, SizeStep};
use crate::error::PuzzleError;
use crate::generator::object::SymbolicObject;

/// How the attribute index changes along the axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TransformType {
    /// Same value everywhere.
    Constant,

    /// Next value in the domain at each step, wrapping around.
    Cycle,

    /// Increasing value at each step.
    /// Wraps like [`TransformType::Cycle`] for the current domains.
    Progression,

    /// Base value on even steps, the next domain value on odd steps.
    Alternate,
}

/// Grid index that drives the attribute value.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// The value follows the row index: constant along a row, changing down a column.
    Row,

    /// The value follows the column index: constant down a column, changing along a row.
    Column,

    /// The value follows `row + col`.
    Diagonal,
}

impl Axis {
    /// Step for the given grid position.
    pub fn step(self, row: usize, col: usize, domain_size: usize) -> usize {
        match self {
            Axis::Row => row,
            Axis::Column => col,
            Axis::Diagonal => (row + col) % domain_size,
        }
    }
}

/// Rule for one attribute kind.
///
/// Deserialized rules go through [`AttributeRule::with_base`] and [`AttributeRule::with_order`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "AttributeRuleData")]
pub struct AttributeRule {
    pub kind: AttributeKind,
    pub transform: TransformType,
    pub axis: Axis,

    /// Starting index, fixed for the whole puzzle.
    base: usize,

    /// Domain indexes in the order the rule walks through them.
    order: Vec<usize>,
}

impl AttributeRule {
    /// Create a rule with a base index of 0 and the natural domain order.
    pub fn new(kind: AttributeKind, transform: TransformType, axis: Axis) -> Self {
        Self {
            kind,
            transform,
            axis,
            base: 0,
            order: (0..kind.domain_size()).collect(),
        }
    }

    /// Return a copy of the rule that starts at the given index.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidArgument`] if the index is outside of the domain.
    pub fn with_base(self, base: usize) -> Result<Self, PuzzleError> {
        if base >= self.kind.domain_size() {
            return Err(PuzzleError::InvalidArgument(format!(
                "base index {base} is outside of the {} domain",
                self.kind
            )));
        }
        Ok(Self { base, ..self })
    }

    /// Return a copy of the rule that walks the domain in the given order.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidArgument`] if `order` is not a permutation of the domain
    /// indexes.
    pub fn with_order(self, order: Vec<usize>) -> Result<Self, PuzzleError> {
        let mut sorted: Vec<usize> = order.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(0..self.kind.domain_size()) {
            return Err(PuzzleError::InvalidArgument(format!(
                "{order:?} is not a permutation of the {} domain",
                self.kind
            )));
        }
        Ok(Self { order, ..self })
    }

    /// Starting index.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Domain order used by the rule.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Return the domain index of the attribute at the given position.
    pub fn value_index(&self, row: usize, col: usize) -> Result<usize, PuzzleError> {
        let position: usize = evaluate(self, row, col, self.order.len())?;
        self.order.get(position).copied().ok_or_else(|| {
            PuzzleError::InvariantViolation(format!(
                "position {position} is outside of the {} order",
                self.kind
            ))
        })
    }
}

/// Serialized form of an [`AttributeRule`], checked before conversion.
#[derive(Deserialize)]
struct AttributeRuleData {
    kind: AttributeKind,
    transform: TransformType,
    axis: Axis,
    base: usize,
    order: Vec<usize>,
}

impl TryFrom<AttributeRuleData> for AttributeRule {
    type Error = PuzzleError;

    fn try_from(data: AttributeRuleData) -> Result<Self, Self::Error> {
        AttributeRule::new(data.kind, data.transform, data.axis)
            .with_order(data.order)?
            .with_base(data.base)
    }
}

/// Compute the position in the rule order for the given grid position.
///
/// The result is always lower than `domain_size`.
///
/// # Errors
///
/// Return [`PuzzleError::InvalidArgument`] if `domain_size` is 0.
pub fn evaluate(
    rule: &AttributeRule,
    row: usize,
    col: usize,
    domain_size: usize,
) -> Result<usize, PuzzleError> {
    if domain_size == 0 {
        return Err(PuzzleError::InvalidArgument(format!(
            "empty domain for the {} rule",
            rule.kind
        )));
    }
    let base: usize = rule.base % domain_size;
    let step: usize = rule.axis.step(row, col, domain_size);
    let position: usize = match rule.transform {
        TransformType::Constant => base,
        TransformType::Cycle => (base + step) % domain_size,
        TransformType::Progression => (base + step) % domain_size,
        TransformType::Alternate => {
            if step % 2 == 0 {
                base
            } else {
                (base + 1) % domain_size
            }
        }
    };
    Ok(position)
}

/// Set of attribute rules that describes a whole grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RuleSetData")]
pub struct RuleSet {
    rules: Vec<AttributeRule>,
}

#[derive(Deserialize)]
struct RuleSetData {
    rules: Vec<AttributeRule>,
}

impl TryFrom<RuleSetData> for RuleSet {
    type Error = PuzzleError;

    fn try_from(data: RuleSetData) -> Result<Self, Self::Error> {
        RuleSet::new(data.rules)
    }
}

impl RuleSet {
    /// Create a rule set from the given rules.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvalidArgument`] if two rules target the same attribute kind.
    pub fn new(rules: Vec<AttributeRule>) -> Result<Self, PuzzleError> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[i + 1..].iter().any(|other| other.kind == rule.kind) {
                return Err(PuzzleError::InvalidArgument(format!(
                    "several rules for the {} attribute",
                    rule.kind
                )));
            }
        }
        Ok(Self { rules })
    }

    /// Rules with the natural domain orders and base indexes of 0.
    ///
    /// Shape follows the columns, color follows the rows, and size progresses along the
    /// diagonals.
    pub fn canonical() -> Self {
        Self {
            rules: vec![
                AttributeRule::new(AttributeKind::Shape, TransformType::Cycle, Axis::Column),
                AttributeRule::new(AttributeKind::Color, TransformType::Cycle, Axis::Row),
                AttributeRule::new(AttributeKind::Size, TransformType::Progression, Axis::Diagonal),
            ],
        }
    }

    /// Same axes as [`RuleSet::canonical`], but with shuffled shape and color orders and random
    /// base indexes.
    ///
    /// The size keeps its small, medium, large progression.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut rules: Vec<AttributeRule> = Self::canonical().rules;
        for rule in rules.iter_mut() {
            if rule.kind == AttributeKind::Size {
                continue;
            }
            rule.order.shuffle(rng);
            rule.base = rng.random_range(0..rule.order.len());
        }
        debug!("Rules = {rules:?}");
        Self { rules }
    }

    /// List of the rules.
    pub fn rules(&self) -> &[AttributeRule] {
        &self.rules
    }

    /// Build the object at the given grid position.
    ///
    /// Attributes without a rule keep their default value: circle, red, medium, no rotation, no
    /// flip.
    pub fn object_at(&self, row: usize, col: usize) -> Result<SymbolicObject, PuzzleError> {
        self.rules.iter().try_fold(
            SymbolicObject::with_size(Shape::Circle, Color::Red, SizeStep::Medium),
            |object, rule| object.with_attribute(rule.kind, rule.value_index(row, col)?),
        )
    }
}
