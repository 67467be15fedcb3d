use crate::bounds::{Bounds, BoundsError};
use crate::exercise::Exercise;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Owns the bounds, the exercise in flight and every answered exercise.
///
/// `current` always holds an unanswered exercise. `answer` closes it out and
/// opens the next one in a single call.
#[derive(Debug, Clone)]
pub struct ExerciseModel {
    bounds: Bounds,
    current: Exercise,
    history: Vec<Exercise>,
    rng: StdRng,
}

impl Default for ExerciseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseModel {
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Does not validate `bounds`.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Same sequence of exercises for the same seed and bounds.
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: Bounds, mut rng: StdRng) -> Self {
        let current = generate(&bounds, &mut rng);
        Self {
            bounds,
            current,
            history: Vec::new(),
            rng,
        }
    }

    pub fn current(&self) -> &Exercise {
        &self.current
    }

    pub fn history(&self) -> &[Exercise] {
        &self.history
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min(&self) -> i64 {
        self.bounds.min
    }

    pub fn max(&self) -> i64 {
        self.bounds.max
    }

    pub fn number_of_correct(&self) -> usize {
        self.history.iter().filter(|e| e.is_correct()).count()
    }

    pub fn number_of_failed(&self) -> usize {
        self.history.iter().filter(|e| e.is_failed()).count()
    }

    /// Records `value` against the current exercise and moves on to a new one.
    /// Returns whether the answer was correct.
    pub fn answer(&mut self, value: i64) -> bool {
        let answered = self.current.with_user_input(value);
        let correct = answered.is_correct();
        debug!(exercise = %answered, value, correct, "answered exercise");

        self.history.push(answered);
        self.regenerate();
        correct
    }

    /// Rejects `min >= max` and leaves the model untouched in that case.
    pub fn reconfigure(&mut self, min: i64, max: i64) -> Result<(), BoundsError> {
        self.reconfigure_with(Bounds::unchecked(min, max))
    }

    /// Same check as `reconfigure`, for pairs built with `Bounds::unchecked`.
    pub fn reconfigure_with(&mut self, bounds: Bounds) -> Result<(), BoundsError> {
        let bounds = Bounds::new(bounds.min, bounds.max)?;
        debug!(min = bounds.min, max = bounds.max, "reconfigured bounds");
        self.bounds = bounds;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        self.current = generate(&self.bounds, &mut self.rng);
    }
}

/// Draws both operands from `bounds` and flips a coin for the operator.
///
/// An inverted range has nothing to draw from: lhs falls back to `min` and
/// rhs to `max`.
fn generate<R: Rng>(bounds: &Bounds, rng: &mut R) -> Exercise {
    let (lhs, rhs) = if bounds.min <= bounds.max {
        (
            rng.gen_range(bounds.min..=bounds.max),
            rng.gen_range(bounds.min..=bounds.max),
        )
    } else {
        (bounds.min, bounds.max)
    };

    let exercise = if rng.gen_bool(0.5) {
        Exercise::addition(lhs, rhs)
    } else {
        Exercise::subtraction(lhs, rhs)
    };
    trace!(%exercise, "generated exercise");
    exercise
}
