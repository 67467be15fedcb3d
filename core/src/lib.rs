pub mod bounds;
pub mod exercise;
pub mod input;
pub mod model;

pub use bounds::{Bounds, BoundsError};
pub use exercise::{Exercise, Operator};
pub use model::ExerciseModel;
