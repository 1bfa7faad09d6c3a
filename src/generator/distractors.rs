/*
distractors.rs

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

//! Build the answer options.
//!
//! A distractor is a copy of the correct answer where exactly one categorical attribute (the
//! shape or the color) has been changed.
//! Each distractor therefore breaks exactly one rule of the grid.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::attributes::Domain;
use crate::error::PuzzleError;
use crate::generator::object::SymbolicObject;
use crate::projection::VisualObject;

/// Number of answer options, including the correct one.
pub const OPTION_COUNT: usize = 4;

// Candidate draws before giving up. With the current domains there are six possible distractors,
// so this limit is never reached.
const MAX_ATTEMPTS: usize = 1000;

/// Draw a random domain value that differs from `current`.
fn draw_other<T: Domain, R: Rng + ?Sized>(current: T, rng: &mut R) -> T {
    loop {
        let candidate: T = T::ALL[rng.random_range(0..T::ALL.len())];
        if candidate != current {
            return candidate;
        }
    }
}

/// Copy the correct object and change either its shape or its color.
fn perturb<R: Rng + ?Sized>(correct: &SymbolicObject, rng: &mut R) -> SymbolicObject {
    let mut candidate: SymbolicObject = *correct;
    if rng.random_bool(0.5) {
        candidate.shape = draw_other(correct.shape, rng);
    } else {
        candidate.color = draw_other(correct.color, rng);
    }
    candidate
}

/// Return the shuffled answer options and the index of the correct answer in the list.
///
/// # Errors
///
/// Return [`PuzzleError::InvariantViolation`] if distinct options cannot be found.
pub fn build_options<R: Rng + ?Sized>(
    correct: &SymbolicObject,
    rng: &mut R,
) -> Result<(Vec<VisualObject>, usize), PuzzleError> {
    let correct_visual: VisualObject = VisualObject::from(correct);
    let mut options: Vec<VisualObject> = Vec::with_capacity(OPTION_COUNT);
    options.push(correct_visual);

    let mut attempts: usize = 0;
    while options.len() < OPTION_COUNT {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(PuzzleError::InvariantViolation(format!(
                "only {} distinct options after {MAX_ATTEMPTS} attempts",
                options.len()
            )));
        }

        let candidate: SymbolicObject = perturb(correct, rng);
        let candidate_visual: VisualObject = VisualObject::from(&candidate);
        if options.contains(&candidate_visual) {
            debug!("    Distractor {candidate} rejected: already an option");
            continue;
        }
        debug!("    Distractor {candidate} accepted");
        options.push(candidate_visual);
    }

    options.shuffle(rng);
    let correct_index: usize = options
        .iter()
        .position(|option| *option == correct_visual)
        .ok_or_else(|| {
            PuzzleError::InvariantViolation("correct answer lost while shuffling".to_string())
        })?;
    debug!("Correct option index = {correct_index}  Attempts = {attempts}");
    Ok((options, correct_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Color, Rotation, Shape, SizeStep};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn correct() -> SymbolicObject {
        let mut object = SymbolicObject::with_size(Shape::Square, Color::Green, SizeStep::Large);
        object.rotation = Rotation::Degrees90;
        object
    }

    #[test]
    fn test_draw_other_never_returns_current() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_ne!(draw_other(Shape::Circle, &mut rng), Shape::Circle);
            assert_ne!(draw_other(Color::Purple, &mut rng), Color::Purple);
        }
    }

    #[test]
    fn test_options_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (options, _) = build_options(&correct(), &mut rng).unwrap();
            assert_eq!(options.len(), OPTION_COUNT);
            for i in 0..options.len() {
                for j in i + 1..options.len() {
                    assert_ne!(options[i], options[j], "options {i} and {j} are equal");
                }
            }
        }
    }

    #[test]
    fn test_correct_index_points_to_correct_answer() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let (options, index) = build_options(&correct(), &mut rng).unwrap();
            assert_eq!(options[index], VisualObject::from(&correct()));
        }
    }

    #[test]
    fn test_distractors_change_one_attribute() {
        let mut rng = StdRng::seed_from_u64(99);
        let expected = VisualObject::from(&correct());
        for _ in 0..200 {
            let (options, index) = build_options(&correct(), &mut rng).unwrap();
            for (i, option) in options.iter().enumerate() {
                if i == index {
                    continue;
                }
                let shape_changed = option.shape != expected.shape;
                let color_changed = option.color != expected.color;
                assert!(
                    shape_changed ^ color_changed,
                    "distractor {option:?} must change exactly one of shape and color"
                );
                assert_eq!(option.scale, expected.scale);
                assert_eq!(option.rotation_degrees, expected.rotation_degrees);
                assert_eq!(option.flip, expected.flip);
                assert_eq!(option.layer, expected.layer);
            }
        }
    }

    #[test]
    fn test_correct_answer_lands_everywhere() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; OPTION_COUNT];
        for _ in 0..200 {
            let (_, index) = build_options(&correct(), &mut rng).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s), "shuffle never used some positions: {seen:?}");
    }
}
