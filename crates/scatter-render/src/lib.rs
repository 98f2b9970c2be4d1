//! Raster rendering for point clouds.
//!
//! Maps a [`scatter_core::PointCloud`] into a pixel viewport and draws it as
//! dot markers or a connected polyline, producing an [`image::RgbImage`]
//! that can be written out as PNG.

mod render;

pub use render::{render, render_to_file, MarkerStyle, RenderOptions};
