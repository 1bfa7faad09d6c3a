/*
puzzles.rs

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

//! Puzzle generation.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::distractors::{self, OPTION_COUNT};
use super::grid::{GRID_DIM, SymbolicCell, SymbolicGrid};
use super::object::{GeometricTransform, SymbolicObject};
use super::rules::RuleSet;
use crate::error::PuzzleError;
use crate::projection::{self, VisualGrid, VisualObject};

/// Hole positions for the medium difficulty level: the middle of each edge.
pub const EDGE_CENTERS: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];

/// Hole positions for the hard and expert difficulty levels.
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// Hole position for the easy difficulty level.
pub const EASY_HOLE: (usize, usize) = (2, 0);

/// Puzzle difficulty level.
///
/// The level only controls where the hole is punched.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "camelCase")]
#[repr(i32)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

impl Difficulty {
    /// Select the position of the hole.
    ///
    /// Easy puzzles always miss the bottom-left cell, medium puzzles miss the middle of an edge,
    /// and hard and expert puzzles miss a corner.
    pub fn hole_position<R: Rng + ?Sized>(self, rng: &mut R) -> (usize, usize) {
        match self {
            Difficulty::Easy => EASY_HOLE,
            Difficulty::Medium => EDGE_CENTERS[rng.random_range(0..EDGE_CENTERS.len())],
            Difficulty::Hard | Difficulty::Expert => CORNERS[rng.random_range(0..CORNERS.len())],
        }
    }
}

/// Geometric pattern applied over the grid once the attribute rules have been evaluated.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum TransformPattern {
    #[default]
    None,

    /// Rotate by a quarter turn per column.
    RotateAcrossRow,

    /// Rotate by a quarter turn per row.
    RotateAcrossColumn,

    /// No flip in the first column, horizontal flip in the second, vertical flip in the third.
    FlipAcrossRow,
}

impl TransformPattern {
    /// Return the object at the given grid position with the pattern applied.
    pub fn overlay(
        self,
        object: &SymbolicObject,
        row: usize,
        col: usize,
    ) -> Result<SymbolicObject, PuzzleError> {
        let count = |index: usize| {
            i32::try_from(index).map_err(|_| PuzzleError::InvalidPosition { row, col })
        };
        match self {
            TransformPattern::None => Ok(*object),
            TransformPattern::RotateAcrossRow => {
                object.apply_repeated(GeometricTransform::Rotate90, count(col)?)
            }
            TransformPattern::RotateAcrossColumn => {
                object.apply_repeated(GeometricTransform::Rotate90, count(row)?)
            }
            TransformPattern::FlipAcrossRow => match col {
                1 => Ok(object.apply_transform(GeometricTransform::FlipHorizontal)),
                2 => Ok(object.apply_transform(GeometricTransform::FlipVertical)),
                _ => Ok(*object),
            },
        }
    }
}

/// Generator configuration.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub difficulty: Difficulty,
    pub transform_pattern: TransformPattern,
}

/// One complete puzzle, ready for the presentation layer.
///
/// The puzzle is built once by [`PuzzleGenerator`] and cannot be modified afterward.
/// Deserialized puzzles are checked the same way as generated ones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "PuzzleData")]
pub struct Puzzle {
    /// 3x3 grid with one hole.
    grid: VisualGrid,

    /// Answer options.
    options: Vec<VisualObject>,

    /// Index of the correct answer in [`Puzzle::options`].
    correct_index: usize,

    /// Row and column of the hole.
    hole: (usize, usize),
}

impl Puzzle {
    /// Assemble a puzzle after checking that the grid has a single hole at `hole`, and that
    /// `correct_index` designates one of the answer options.
    fn new(
        grid: VisualGrid,
        options: Vec<VisualObject>,
        correct_index: usize,
        hole: (usize, usize),
    ) -> Result<Self, PuzzleError> {
        if options.len() != OPTION_COUNT {
            return Err(PuzzleError::InvariantViolation(format!(
                "{} answer options instead of {OPTION_COUNT}",
                options.len()
            )));
        }
        if correct_index >= options.len() {
            return Err(PuzzleError::InvariantViolation(format!(
                "correct answer index {correct_index} is out of range"
            )));
        }
        let (row, col) = hole;
        if row >= GRID_DIM || col >= GRID_DIM {
            return Err(PuzzleError::InvalidPosition { row, col });
        }
        let mut holes: Vec<(usize, usize)> = Vec::with_capacity(1);
        for (r, grid_row) in grid.iter().enumerate() {
            for (c, cell) in grid_row.iter().enumerate() {
                if cell.is_none() {
                    holes.push((r, c));
                }
            }
        }
        if holes != [hole] {
            return Err(PuzzleError::InvariantViolation(format!(
                "expected a single hole at ({row}, {col}), found {holes:?}"
            )));
        }
        Ok(Self {
            grid,
            options,
            correct_index,
            hole,
        })
    }

    /// Return the grid. The hole is `None`.
    pub fn grid(&self) -> &VisualGrid {
        &self.grid
    }

    /// Return the answer options.
    pub fn options(&self) -> &[VisualObject] {
        &self.options
    }

    /// Return the index of the correct answer.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Return the correct answer.
    pub fn correct_option(&self) -> &VisualObject {
        &self.options[self.correct_index]
    }

    /// Return the row and column of the hole.
    pub fn hole(&self) -> (usize, usize) {
        self.hole
    }

    /// Whether the option at the given index is the correct answer.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

/// Serialized form of a [`Puzzle`], checked before conversion.
#[derive(Deserialize)]
struct PuzzleData {
    grid: VisualGrid,
    options: Vec<VisualObject>,
    correct_index: usize,
    hole: (usize, usize),
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = PuzzleError;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        Puzzle::new(data.grid, data.options, data.correct_index, data.hole)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for grid_row in &self.grid {
            let cells: Vec<String> = grid_row
                .iter()
                .map(|cell| match cell {
                    Some(c) => c
                        .objects
                        .iter()
                        .map(|o| o.to_string())
                        .collect::<Vec<String>>()
                        .join(" + "),
                    None => "?".to_string(),
                })
                .collect();
            writeln!(
                f,
                "| {:<24} | {:<24} | {:<24} |",
                cells[0], cells[1], cells[2]
            )?;
        }
        writeln!(f)?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(f, "  {}. {option}", i + 1)?;
        }
        write!(f, "Answer: {}", self.correct_index + 1)
    }
}

/// Puzzle generator.
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    options: GeneratorOptions,
}

impl PuzzleGenerator {
    /// Create a [`PuzzleGenerator`] object.
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Return the generator configuration.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate a puzzle with random rules.
    ///
    /// All the randomness comes from `rng`, so a seeded generator always produces the same
    /// puzzle.
    ///
    /// # Errors
    ///
    /// Return [`PuzzleError::InvariantViolation`] if the grid is inconsistent. This is a bug,
    /// and no puzzle is returned.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, PuzzleError> {
        let rules: RuleSet = RuleSet::random(rng);
        self.generate_with_rules(&rules, rng)
    }

    /// Generate a puzzle with random rules by using the thread random generator.
    pub fn generate_with_thread_rng(&self) -> Result<Puzzle, PuzzleError> {
        self.generate(&mut rand::rng())
    }

    /// Generate a puzzle from the given rules.
    ///
    /// The random generator is still used to select the hole position, the distractors, and
    /// the order of the answer options.
    pub fn generate_with_rules<R: Rng + ?Sized>(
        &self,
        rules: &RuleSet,
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError> {
        debug!(
            "Generating puzzle: difficulty = {}  pattern = {:?}",
            self.options.difficulty, self.options.transform_pattern
        );

        // Build the complete grid
        let grid: SymbolicGrid = SymbolicGrid::populate(rules, self.options.transform_pattern)?;
        self.complete(grid, rng)
    }

    /// Punch the hole in the complete grid and build the answer options.
    fn complete<R: Rng + ?Sized>(
        &self,
        grid: SymbolicGrid,
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError> {
        let holes: Vec<(usize, usize)> = grid.holes();
        if !holes.is_empty() {
            return Err(PuzzleError::InvariantViolation(format!(
                "populated grid already has holes at {holes:?}"
            )));
        }

        // Punch the hole
        let (row, col) = self.options.difficulty.hole_position(rng);
        let (grid, removed): (SymbolicGrid, SymbolicCell) = grid.punch_hole(row, col)?;
        let holes: Vec<(usize, usize)> = grid.holes();
        if holes != [(row, col)] {
            return Err(PuzzleError::InvariantViolation(format!(
                "expected a single hole at ({row}, {col}), found {holes:?}"
            )));
        }

        // The removed object is the answer
        let correct: SymbolicObject = removed.objects.first().copied().ok_or_else(|| {
            PuzzleError::InvariantViolation(format!("cell ({row}, {col}) has no object"))
        })?;
        debug!("Correct answer = {correct}");

        let (options, correct_index) = distractors::build_options(&correct, rng)?;

        Puzzle::new(projection::project_grid(&grid), options, correct_index, (row, col))
    }
}

/// Generate one puzzle.
///
/// Shortcut for [`PuzzleGenerator::generate`].
pub fn generate<R: Rng + ?Sized>(
    difficulty: Difficulty,
    transform_pattern: TransformPattern,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    PuzzleGenerator::new(GeneratorOptions {
        difficulty,
        transform_pattern,
    })
    .generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Color, Flip, Rotation, Shape, SizeStep};
    use crate::generator::grid::GridCell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(difficulty: Difficulty, transform_pattern: TransformPattern) -> PuzzleGenerator {
        PuzzleGenerator::new(GeneratorOptions {
            difficulty,
            transform_pattern,
        })
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Expert);
        assert_eq!(Difficulty::from_repr(3), Some(Difficulty::Expert));
    }

    #[test]
    fn test_hole_positions() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            assert_eq!(Difficulty::Easy.hole_position(&mut rng), EASY_HOLE);
            assert!(EDGE_CENTERS.contains(&Difficulty::Medium.hole_position(&mut rng)));
            assert!(CORNERS.contains(&Difficulty::Hard.hole_position(&mut rng)));
            assert!(CORNERS.contains(&Difficulty::Expert.hole_position(&mut rng)));
        }
    }

    #[test]
    fn test_canonical_easy_puzzle() {
        let mut rng = StdRng::seed_from_u64(0);
        let puzzle = generator(Difficulty::Easy, TransformPattern::None)
            .generate_with_rules(&RuleSet::canonical(), &mut rng)
            .unwrap();

        assert_eq!(puzzle.hole(), (2, 0));
        assert!(puzzle.grid()[2][0].is_none());

        let top_left = &puzzle.grid()[0][0].as_ref().unwrap().objects[0];
        assert_eq!(top_left.shape, Shape::Circle);
        assert_eq!(top_left.color, Color::Red);
        assert_eq!(top_left.scale, SizeStep::Small.scale());

        let middle_right = &puzzle.grid()[1][2].as_ref().unwrap().objects[0];
        assert_eq!(middle_right.shape, Shape::Triangle);
        assert_eq!(middle_right.color, Color::Blue);
        assert_eq!(middle_right.scale, SizeStep::Small.scale());

        let answer = SymbolicObject::with_size(Shape::Circle, Color::Green, SizeStep::Large);
        let expected = VisualObject::from(&answer);
        assert_eq!(*puzzle.correct_option(), expected);
        assert!(puzzle.is_correct(puzzle.correct_index()));
    }

    #[test]
    fn test_pattern_reaches_answer() {
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generator(Difficulty::Hard, TransformPattern::RotateAcrossRow)
            .generate_with_rules(&RuleSet::canonical(), &mut rng)
            .unwrap();
        let (_, col) = puzzle.hole();
        let expected = Rotation::from_degrees(90 * col as i32);
        assert_eq!(puzzle.correct_option().rotation_degrees, expected.degrees());
        for option in puzzle.options() {
            assert_eq!(option.rotation_degrees, expected.degrees());
            assert_eq!(option.flip, Flip::None);
        }
    }

    #[test]
    fn test_overlay_flip_across_row() {
        let object = SymbolicObject::new(Shape::Square, Color::Blue);
        let pattern = TransformPattern::FlipAcrossRow;
        assert_eq!(pattern.overlay(&object, 2, 0).unwrap().flip, Flip::None);
        assert_eq!(pattern.overlay(&object, 0, 1).unwrap().flip, Flip::Horizontal);
        assert_eq!(pattern.overlay(&object, 1, 2).unwrap().flip, Flip::Vertical);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = generator(Difficulty::Expert, TransformPattern::FlipAcrossRow);
        let first = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = generator(Difficulty::Easy, TransformPattern::None)
            .generate_with_rules(&RuleSet::canonical(), &mut rng)
            .unwrap();
        let text = puzzle.to_string();
        assert_eq!(text.lines().count(), 3 + 1 + 4 + 1);
        assert!(text.lines().nth(2).unwrap().starts_with("| ? "));
        assert!(text.ends_with(&format!("Answer: {}", puzzle.correct_index() + 1)));
    }

    #[test]
    fn test_grid_dimension() {
        let puzzle = generate(
            Difficulty::Medium,
            TransformPattern::None,
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert_eq!(puzzle.grid().len(), GRID_DIM);
        assert_eq!(puzzle.options().len(), OPTION_COUNT);
    }

    #[test]
    fn test_thread_rng_generation() {
        let generator = generator(Difficulty::Hard, TransformPattern::RotateAcrossColumn);
        for _ in 0..20 {
            let puzzle = generator.generate_with_thread_rng().unwrap();
            assert!(CORNERS.contains(&puzzle.hole()));
            assert!(puzzle.grid()[puzzle.hole().0][puzzle.hole().1].is_none());
            assert!(puzzle.correct_index() < OPTION_COUNT);
        }
    }

    #[test]
    fn test_empty_cell_aborts_generation() {
        let cells = std::array::from_fn(|_| {
            std::array::from_fn(|_| GridCell::Filled(SymbolicCell { objects: vec![] }))
        });
        let ret = generator(Difficulty::Easy, TransformPattern::None)
            .complete(SymbolicGrid::from_cells(cells), &mut StdRng::seed_from_u64(4));
        assert!(matches!(ret, Err(PuzzleError::InvariantViolation(_))));
    }

    #[test]
    fn test_grid_with_hole_aborts_generation() {
        let grid = SymbolicGrid::populate(&RuleSet::canonical(), TransformPattern::None).unwrap();
        let (grid, _) = grid.punch_hole(1, 1).unwrap();
        let ret = generator(Difficulty::Medium, TransformPattern::None)
            .complete(grid, &mut StdRng::seed_from_u64(4));
        assert!(matches!(ret, Err(PuzzleError::InvariantViolation(_))));
    }

    #[test]
    fn test_deserialize_checks_puzzle() {
        let puzzle = generate(
            Difficulty::Hard,
            TransformPattern::FlipAcrossRow,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
        let mut value = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(serde_json::from_value::<Puzzle>(value.clone()).unwrap(), puzzle);

        value["correct_index"] = serde_json::json!(9);
        assert!(serde_json::from_value::<Puzzle>(value.clone()).is_err());

        value["correct_index"] = serde_json::json!(puzzle.correct_index());
        value["hole"] = serde_json::json!([1, 1]);
        assert!(serde_json::from_value::<Puzzle>(value.clone()).is_err());

        value["hole"] = serde_json::json!([puzzle.hole().0, puzzle.hole().1]);
        value["options"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<Puzzle>(value).is_err());
    }
}
