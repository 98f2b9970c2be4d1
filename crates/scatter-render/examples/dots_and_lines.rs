//! Render one synthetic cloud with both marker styles.
//!
//! Samples a cloud from the default annulus, applies the vertical scatter
//! transform, and writes `dots.png` / `lines.png` next to the working
//! directory.
//!
//! Run with: `cargo run -p scatter-render --example dots_and_lines`

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use scatter_core::{sample_cloud, scatter_vertical, AnnulusSpec};
use scatter_render::{render_to_file, MarkerStyle, RenderOptions};

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);

    let base = sample_cloud(1000, &AnnulusSpec::default(), &mut rng)?;
    let cloud = scatter_vertical(&base, 3.0);
    println!("generated {} points", cloud.len());

    let dots = RenderOptions::default();
    render_to_file(&cloud, &dots, "dots.png".as_ref())?;
    println!("wrote dots.png");

    let lines = RenderOptions {
        style: MarkerStyle::Line,
        color: [200, 30, 30],
        ..RenderOptions::default()
    };
    render_to_file(&cloud, &lines, "lines.png".as_ref())?;
    println!("wrote lines.png");

    Ok(())
}
