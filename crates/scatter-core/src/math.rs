//! Type definitions shared across the workspace.

use nalgebra::{Point2, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
