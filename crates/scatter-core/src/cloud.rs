//! Point-cloud container.
//!
//! This module provides the canonical storage for generated 2D point sets:
//! two equal-length coordinate rows, with the column index identifying the
//! point.

use crate::{Pt2, Real};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A fixed-size collection of 2D points.
///
/// Points are stored as two coordinate rows (`xs`, `ys`); column `i` holds
/// point `i`. Both rows always have the same length. Column order is the
/// insertion order from generation but carries no semantic meaning.
///
/// # Example
///
/// ```
/// use scatter_core::{PointCloud, Pt2};
///
/// let cloud = PointCloud::new(vec![10.0, 11.0], vec![20.0, 21.0]).unwrap();
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.point(1), Pt2::new(11.0, 21.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// X coordinates (row 0).
    pub xs: Vec<Real>,
    /// Y coordinates (row 1).
    pub ys: Vec<Real>,
}

impl PointCloud {
    /// Construct a cloud from its coordinate rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the row lengths don't match.
    pub fn new(xs: Vec<Real>, ys: Vec<Real>) -> Result<Self> {
        ensure!(
            xs.len() == ys.len(),
            "x / y row lengths must match: {} vs {}",
            xs.len(),
            ys.len()
        );
        Ok(Self { xs, ys })
    }

    /// An empty cloud with room reserved for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
        }
    }

    /// Build a cloud from a point slice, preserving order.
    pub fn from_points(points: &[Pt2]) -> Self {
        Self {
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
        }
    }

    /// Number of points in the cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the cloud holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Append one point, keeping the rows in lockstep.
    pub fn push(&mut self, p: Pt2) {
        self.xs.push(p.x);
        self.ys.push(p.y);
    }

    /// The point in column `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn point(&self, idx: usize) -> Pt2 {
        Pt2::new(self.xs[idx], self.ys[idx])
    }

    /// Iterate over the points in column order.
    pub fn iter(&self) -> impl Iterator<Item = Pt2> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Pt2::new(x, y))
    }

    /// A new cloud holding this cloud's columns followed by `other`'s.
    ///
    /// Neither input is modified.
    pub fn concat(&self, other: &PointCloud) -> PointCloud {
        let mut xs = Vec::with_capacity(self.len() + other.len());
        let mut ys = Vec::with_capacity(self.len() + other.len());
        xs.extend_from_slice(&self.xs);
        xs.extend_from_slice(&other.xs);
        ys.extend_from_slice(&self.ys);
        ys.extend_from_slice(&other.ys);
        PointCloud { xs, ys }
    }
}
