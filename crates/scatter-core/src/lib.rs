//! Synthetic 2D point-cloud generation.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Vec2`),
//! - annulus sampling geometry ([`AnnulusSpec`]) and cloud construction
//!   ([`sample_cloud`]),
//! - the [`PointCloud`] container (two equal-length coordinate rows),
//! - cloud transforms ([`scatter_vertical`], [`duplicate_random`]).
//!
//! All randomness flows through explicitly injected `rand` generators, so a
//! fixed seed reproduces a dataset exactly and independent callers never
//! share generator state.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use scatter_core::{sample_cloud, scatter_vertical, AnnulusSpec};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let cloud = sample_cloud(100, &AnnulusSpec::default(), &mut rng).unwrap();
//! let doubled = scatter_vertical(&cloud, 3.0);
//! assert_eq!(doubled.len(), 200);
//! ```

/// Annulus sampling geometry and cloud construction.
pub mod annulus;
/// The point-cloud container.
pub mod cloud;
/// Linear algebra type aliases.
pub mod math;
/// Cloud duplication transforms.
pub mod transform;

pub use annulus::*;
pub use cloud::*;
pub use math::*;
pub use transform::*;
