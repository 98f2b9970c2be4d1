//! Cloud duplication transforms.
//!
//! Both transforms consume their input read-only and return a brand-new
//! cloud with twice the point count.

use crate::{sample_cloud, AnnulusError, AnnulusSpec, PointCloud, Real};
use rand::Rng;

/// Conventional offset for [`scatter_vertical`].
pub const DEFAULT_SCATTER_OFFSET: Real = 5.0;

/// Duplicate a cloud with the copy shifted vertically by `offset`.
///
/// The result holds `2N` columns: the first `N` are the input unchanged, the
/// last `N` are the input with `y + offset` (x unchanged). Deterministic —
/// no randomness is involved.
pub fn scatter_vertical(cloud: &PointCloud, offset: Real) -> PointCloud {
    let n = cloud.len();
    let mut xs = Vec::with_capacity(2 * n);
    let mut ys = Vec::with_capacity(2 * n);

    xs.extend_from_slice(&cloud.xs);
    xs.extend_from_slice(&cloud.xs);
    ys.extend_from_slice(&cloud.ys);
    ys.extend(cloud.ys.iter().map(|y| y + offset));

    PointCloud { xs, ys }
}

/// Mix a fresh random cloud of equal size into `cloud`.
///
/// The fresh half is always drawn from [`AnnulusSpec::default`], regardless
/// of the geometry the input was sampled from. The result holds the input
/// columns first, then the fresh columns.
///
/// # Errors
///
/// Never fails for the default geometry; the `Result` mirrors
/// [`sample_cloud`].
pub fn duplicate_random(
    cloud: &PointCloud,
    rng: &mut impl Rng,
) -> Result<PointCloud, AnnulusError> {
    let fresh = sample_cloud(cloud.len(), &AnnulusSpec::default(), rng)?;
    Ok(cloud.concat(&fresh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt2;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn scatter_vertical_doubles_and_shifts() {
        let cloud = PointCloud::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap();
        let out = scatter_vertical(&cloud, 5.0);

        assert_eq!(out.len(), 6);
        for i in 0..3 {
            assert_eq!(out.xs[i], cloud.xs[i]);
            assert_eq!(out.ys[i], cloud.ys[i]);
            assert_eq!(out.xs[i + 3], cloud.xs[i]);
            assert_eq!(out.ys[i + 3], cloud.ys[i] + 5.0);
        }
    }

    #[test]
    fn scatter_vertical_single_point() {
        let cloud = PointCloud::from_points(&[Pt2::new(10.0, 20.0)]);
        let out = scatter_vertical(&cloud, DEFAULT_SCATTER_OFFSET);
        let points: Vec<Pt2> = out.iter().collect();
        assert_eq!(points, vec![Pt2::new(10.0, 20.0), Pt2::new(10.0, 25.0)]);
    }

    #[test]
    fn scatter_vertical_empty_cloud() {
        let out = scatter_vertical(&PointCloud::default(), 5.0);
        assert!(out.is_empty());
    }

    #[test]
    fn duplicate_random_preserves_input_prefix() {
        let cloud = PointCloud::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let out = duplicate_random(&cloud, &mut rng).unwrap();

        assert_eq!(out.len(), 4);
        assert_eq!(&out.xs[..2], &cloud.xs[..]);
        assert_eq!(&out.ys[..2], &cloud.ys[..]);
    }

    #[test]
    fn duplicate_random_half_lies_in_default_band() {
        let spec = AnnulusSpec::default();
        let center = Pt2::new(spec.center_x, spec.center_y);
        let cloud = PointCloud::new(vec![0.0; 100], vec![0.0; 100]).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let out = duplicate_random(&cloud, &mut rng).unwrap();
        for i in 100..200 {
            let d = (out.point(i) - center).norm();
            assert!(d >= spec.inner_radius - 1e-9);
            assert!(d <= spec.inner_radius + spec.outer_radius + 1e-9);
        }
    }
}
