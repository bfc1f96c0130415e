//! Core shared types for the line-fitting pipeline.
//!
//! The observation store is deliberately plain: a `Vec<Observation>` built
//! once by the loader, then borrowed as a read-only `&[Observation]` view by
//! every worker for the duration of a fitting run.

use nalgebra::Point2;

/// A single 2D observation; `x` is the independent variable, `y` the
/// dependent one. Immutable once stored.
pub type Observation = Point2<f64>;

/// Size of a minimal sample set: two points fully determine a line.
pub const MSS_SIZE: usize = 2;
