use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use clusterscope::app;
use clusterscope::config::{AppConfig, DEFAULT_K, DEFAULT_POINTS, DEFAULT_RANGE, K_MAX, K_MIN};

/// Interactive 3D demonstration of stepwise k-means clustering.
#[derive(Parser, Debug)]
#[command(name = "clusterscope", version, about)]
struct Options {
    /// Number of points generated on load and on reset
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    points: usize,

    /// Initial number of centroids
    #[arg(long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Half-width of the cube coordinates are drawn from
    #[arg(long, default_value_t = DEFAULT_RANGE)]
    range: f32,

    /// RNG seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();

    if options.points == 0 {
        bail!("--points must be at least 1");
    }
    if !options.range.is_finite() || options.range <= 0.0 {
        bail!("--range must be a positive number");
    }

    let config = AppConfig {
        points: options.points,
        k: options.k.clamp(K_MIN, K_MAX),
        range: options.range,
        seed: options.seed,
    };
    info!(
        "starting with {} points, k = {}, range = ±{}",
        config.points, config.k, config.range
    );

    app::run(config);
    Ok(())
}
