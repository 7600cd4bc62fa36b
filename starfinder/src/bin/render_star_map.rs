//! Star map renderer
//!
//! Reads a Tycho-2 catalog, keeps the stars inside an RA/Dec window that are
//! brighter than a magnitude ceiling, and writes them as a grayscale image.
//!
//! Usage:
//!   cargo run --release --bin render_star_map -- [options] [FILE]
//!
//! Set `RUST_LOG=debug` for per-stage row counts.

use std::time::Instant;

use clap::Parser;
use log::info;
use starfinder::io::save_gray_image;
use starfinder::shared_args::StarMapArgs;
use starfinder::{filter_stars, read_stars_with_summary, render_stars};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = StarMapArgs::parse();

    let window = args.window.to_window()?;
    let size = args.image_size();

    info!("Reading stars from: {}", args.catalog.display());
    info!("Sky window: {window}");
    info!("Max magnitude: {}", args.max_magnitude);

    let start = Instant::now();
    let (stars, summary) = read_stars_with_summary(&args.catalog)?;
    info!(
        "Time taken to read catalog: {:.3}s ({} stars, {} rows skipped)",
        start.elapsed().as_secs_f64(),
        summary.kept,
        summary.skipped
    );

    let start = Instant::now();
    let stars = filter_stars(stars, &window, args.max_magnitude);
    info!(
        "Time taken to filter: {:.6}s",
        start.elapsed().as_secs_f64()
    );
    info!("Total stars: {}", stars.len());

    let start = Instant::now();
    let raster = render_stars(&stars, size, &window);
    save_gray_image(&raster, &args.output)?;
    info!(
        "Time taken to render and save {} image: {:.3}s",
        size,
        start.elapsed().as_secs_f64()
    );
    info!("Image saved as: {}", args.output.display());

    Ok(())
}
