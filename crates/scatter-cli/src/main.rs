//! Point-cloud generation demo.
//!
//! With no flags this reproduces the stock demonstration: sample 1000 points
//! from the default annulus, scatter them vertically by 3, and write the
//! result as black dots to `scatter.png`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use scatter_core::{duplicate_random, sample_cloud, scatter_vertical, AnnulusSpec, Real};
use scatter_render::{render_to_file, MarkerStyle, RenderOptions};

/// Synthetic annulus point-cloud demonstration.
#[derive(Debug, Parser)]
#[command(author, version, about = "Generate and render a synthetic point cloud")]
struct Args {
    /// Number of points to sample.
    #[arg(long, default_value_t = 1000)]
    n_points: usize,

    /// Vertical offset applied by the `vertical` variant.
    #[arg(long, default_value_t = 3.0)]
    offset: Real,

    /// RNG seed. Omitted means OS entropy; runs are then not reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Which transform to apply to the base cloud.
    #[arg(long, value_enum, default_value_t = Variant::Vertical)]
    variant: Variant,

    /// Marker style.
    #[arg(long, value_enum, default_value_t = Style::Dot)]
    style: Style,

    /// Output PNG path.
    #[arg(long, default_value = "scatter.png")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// The base cloud only.
    Plain,
    /// Base cloud plus a vertically shifted copy.
    Vertical,
    /// Base cloud plus an independent random cloud of equal size.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    Dot,
    Line,
}

impl From<Style> for MarkerStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Dot => MarkerStyle::Dot,
            Style::Line => MarkerStyle::Line,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let base = sample_cloud(args.n_points, &AnnulusSpec::default(), &mut rng)?;
    let cloud = match args.variant {
        Variant::Plain => base,
        Variant::Vertical => scatter_vertical(&base, args.offset),
        Variant::Random => duplicate_random(&base, &mut rng)?,
    };
    tracing::info!(points = cloud.len(), variant = ?args.variant, "generated point cloud");

    let opts = RenderOptions {
        style: args.style.into(),
        ..RenderOptions::default()
    };
    render_to_file(&cloud, &opts, &args.output)?;
    tracing::info!(path = %args.output.display(), "wrote scatter plot");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().init();

    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}
