//! Annulus sampling geometry.
//!
//! [`AnnulusSpec`] describes the ring-shaped region points are drawn from;
//! [`AnnulusSpec::sample`] draws a single random point and [`sample_cloud`]
//! builds a whole cloud from an injected generator.

use crate::{PointCloud, Pt2, Real};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;

/// Validation failures for sampling geometry.
#[derive(Debug, Error)]
pub enum AnnulusError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: Real },
    #[error("{name} must be non-negative, got {value}")]
    NegativeRadius { name: &'static str, value: Real },
}

/// Sampling geometry: a center point plus outer and inner radii.
///
/// The relative ordering of the radii is intentionally unconstrained; see
/// [`AnnulusSpec::sample`] for how the inner radius enters the draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnulusSpec {
    /// X coordinate of the region center.
    pub center_x: Real,
    /// Y coordinate of the region center.
    pub center_y: Real,
    /// Radius of the disk the radial fraction is drawn from.
    pub outer_radius: Real,
    /// Hole radius added to every radial draw.
    pub inner_radius: Real,
}

impl Default for AnnulusSpec {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            outer_radius: 40.0,
            inner_radius: 10.0,
        }
    }
}

impl AnnulusSpec {
    /// Construct a spec from raw parameters.
    pub fn new(center_x: Real, center_y: Real, outer_radius: Real, inner_radius: Real) -> Self {
        Self {
            center_x,
            center_y,
            outer_radius,
            inner_radius,
        }
    }

    /// Check the geometry contract: all parameters finite, radii non-negative.
    ///
    /// `inner_radius < outer_radius` is deliberately not required.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), AnnulusError> {
        let params = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(AnnulusError::NonFinite { name, value });
            }
        }
        for (name, value) in [
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
        ] {
            if value < 0.0 {
                return Err(AnnulusError::NegativeRadius { name, value });
            }
        }
        Ok(())
    }

    /// Draw one random point from this geometry.
    ///
    /// The angle is uniform in `[0, 2π)`. The radius is a uniform-by-area
    /// disk draw of radius `outer_radius`, shifted outward by `inner_radius`
    /// *after* the square-root transform:
    ///
    /// `r = outer_radius * sqrt(|u|) + inner_radius`
    ///
    /// The resulting density near the inner boundary is therefore not that
    /// of a true uniform annulus; downstream consumers depend on this exact
    /// distribution.
    pub fn sample(&self, rng: &mut impl Rng) -> Pt2 {
        let theta = TAU * rng.random::<Real>();
        let r = self.outer_radius * rng.random::<Real>().abs().sqrt() + self.inner_radius;
        Pt2::new(
            r * theta.cos() + self.center_x,
            r * theta.sin() + self.center_y,
        )
    }
}

/// Build a cloud of exactly `n_points` random points from `spec`.
///
/// Sampling order is the column order of the result. `n_points == 0` yields
/// an empty cloud.
///
/// # Errors
///
/// Returns an error if `spec` fails [`AnnulusSpec::validate`].
pub fn sample_cloud(
    n_points: usize,
    spec: &AnnulusSpec,
    rng: &mut impl Rng,
) -> Result<PointCloud, AnnulusError> {
    spec.validate()?;
    let mut cloud = PointCloud::with_capacity(n_points);
    for _ in 0..n_points {
        cloud.push(spec.sample(rng));
    }
    Ok(cloud)
}
