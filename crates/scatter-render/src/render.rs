//! Viewport mapping and marker drawing.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use scatter_core::{PointCloud, Real};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the points of a cloud are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// Filled circle marker per point.
    Dot,
    /// Polyline connecting the points in column order.
    Line,
}

/// Output image and marker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Viewport margin in pixels on every side.
    pub margin: u32,
    /// Background color (RGB).
    pub background: [u8; 3],
    /// Marker/line color (RGB).
    pub color: [u8; 3],
    /// Dot marker radius in pixels (only used by [`MarkerStyle::Dot`]).
    pub dot_radius: i32,
    /// Marker style.
    pub style: MarkerStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 20,
            background: [255, 255, 255],
            color: [0, 0, 0],
            dot_radius: 1,
            style: MarkerStyle::Dot,
        }
    }
}

/// Data-to-pixel mapping over the cloud's finite bounding box.
///
/// The y axis is flipped so that larger data y is higher in the image.
struct Viewport {
    min_x: Real,
    min_y: Real,
    span_x: Real,
    span_y: Real,
    origin: Real,
    inner_w: Real,
    inner_h: Real,
    height: Real,
}

impl Viewport {
    /// Fit the finite points of `cloud` into the image; `None` if there are
    /// none.
    fn fit(cloud: &PointCloud, opts: &RenderOptions) -> Option<Self> {
        let mut bounds: Option<(Real, Real, Real, Real)> = None;
        for p in cloud.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            bounds = Some(match bounds {
                None => (p.x, p.x, p.y, p.y),
                Some((min_x, max_x, min_y, max_y)) => (
                    min_x.min(p.x),
                    max_x.max(p.x),
                    min_y.min(p.y),
                    max_y.max(p.y),
                ),
            });
        }
        let (min_x, max_x, min_y, max_y) = bounds?;

        Some(Self {
            min_x,
            min_y,
            span_x: max_x - min_x,
            span_y: max_y - min_y,
            origin: opts.margin as Real,
            inner_w: opts.width.saturating_sub(2 * opts.margin).max(1) as Real,
            inner_h: opts.height.saturating_sub(2 * opts.margin).max(1) as Real,
            height: opts.height as Real,
        })
    }

    /// Pixel position of a data point; zero-span axes map to the viewport
    /// center.
    fn project(&self, x: Real, y: Real) -> (Real, Real) {
        let fx = if self.span_x > 0.0 {
            (x - self.min_x) / self.span_x
        } else {
            0.5
        };
        let fy = if self.span_y > 0.0 {
            (y - self.min_y) / self.span_y
        } else {
            0.5
        };
        (
            self.origin + fx * self.inner_w,
            self.height - self.origin - fy * self.inner_h,
        )
    }
}

/// Render a cloud into a fresh image.
///
/// Non-finite points are skipped (and break the polyline in
/// [`MarkerStyle::Line`] mode). An empty cloud yields the bare background.
pub fn render(cloud: &PointCloud, opts: &RenderOptions) -> RgbImage {
    let mut img = RgbImage::from_pixel(opts.width.max(1), opts.height.max(1), Rgb(opts.background));

    let Some(viewport) = Viewport::fit(cloud, opts) else {
        return img;
    };
    let color = Rgb(opts.color);

    match opts.style {
        MarkerStyle::Dot => {
            for p in cloud.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
                let (px, py) = viewport.project(p.x, p.y);
                draw_filled_circle_mut(
                    &mut img,
                    (px.round() as i32, py.round() as i32),
                    opts.dot_radius.max(0),
                    color,
                );
            }
        }
        MarkerStyle::Line => {
            let mut prev: Option<(Real, Real)> = None;
            for p in cloud.iter() {
                if !(p.x.is_finite() && p.y.is_finite()) {
                    prev = None;
                    continue;
                }
                let cur = viewport.project(p.x, p.y);
                if let Some((px, py)) = prev {
                    draw_line_segment_mut(
                        &mut img,
                        (px as f32, py as f32),
                        (cur.0 as f32, cur.1 as f32),
                        color,
                    );
                }
                prev = Some(cur);
            }
        }
    }

    img
}

/// Render a cloud and write it to `path` as PNG.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn render_to_file(cloud: &PointCloud, opts: &RenderOptions, path: &Path) -> Result<()> {
    render(cloud, opts)
        .save(path)
        .with_context(|| format!("failed to write image {}", path.display()))
}
