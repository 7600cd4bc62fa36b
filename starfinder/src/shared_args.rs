//! Command line arguments for the star map tools

use std::path::PathBuf;

use clap::{Args, Parser};
use thiserror::Error;

use crate::{ImageSize, SkyWindow};

/// Conventional location of the Tycho-2 catalog
pub const DEFAULT_CATALOG_PATH: &str = "data/tycho2/catalog.dat";

/// Default output image file name
pub const DEFAULT_OUTPUT_PATH: &str = "star_map.png";

/// Rejected argument combinations
#[derive(Error, Debug, PartialEq)]
pub enum ArgsError {
    /// The RA bounds are inverted, equal or NaN
    #[error("Invalid RA range: minimum {min} must be below maximum {max}")]
    InvalidRaRange { min: f64, max: f64 },

    /// The Dec bounds are inverted, equal or NaN
    #[error("Invalid Dec range: minimum {min} must be below maximum {max}")]
    InvalidDecRange { min: f64, max: f64 },
}

/// Sky window options shared by tools that select a region of the catalog
#[derive(Args, Debug, Clone)]
pub struct SkyWindowArgs {
    /// Minimum Right Ascension (degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_ra: f64,

    /// Maximum Right Ascension (degrees)
    #[arg(long, default_value_t = 360.0, allow_negative_numbers = true)]
    pub max_ra: f64,

    /// Minimum Declination (degrees)
    #[arg(long, default_value_t = -90.0, allow_negative_numbers = true)]
    pub min_dec: f64,

    /// Maximum Declination (degrees)
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    pub max_dec: f64,
}

impl SkyWindowArgs {
    /// Build the window, rejecting empty or inverted ranges
    pub fn to_window(&self) -> Result<SkyWindow, ArgsError> {
        // Negated so NaN bounds are rejected as well
        if !(self.min_ra < self.max_ra) {
            return Err(ArgsError::InvalidRaRange {
                min: self.min_ra,
                max: self.max_ra,
            });
        }
        if !(self.min_dec < self.max_dec) {
            return Err(ArgsError::InvalidDecRange {
                min: self.min_dec,
                max: self.max_dec,
            });
        }

        Ok(SkyWindow::new(
            self.min_ra,
            self.max_ra,
            self.min_dec,
            self.max_dec,
        ))
    }
}

/// Arguments of the star map renderer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "render_star_map",
    about = "Renders a star map image from a Tycho-2 catalog",
    long_about = None
)]
pub struct StarMapArgs {
    /// Path to the Tycho-2 catalog file
    #[arg(value_name = "FILE", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Output image file name
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    #[command(flatten)]
    pub window: SkyWindowArgs,

    /// Maximum visual magnitude (lower is brighter)
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    pub max_magnitude: f64,
}

impl StarMapArgs {
    /// Requested raster dimensions
    pub fn image_size(&self) -> ImageSize {
        ImageSize::from_width_height(self.width as usize, self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = StarMapArgs::try_parse_from(["render_star_map"]).unwrap();

        assert_eq!(args.catalog, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(args.output, PathBuf::from("star_map.png"));
        assert_eq!(args.image_size(), ImageSize::from_width_height(800, 600));
        assert_eq!(args.max_magnitude, 6.0);
        assert_eq!(args.window.to_window().unwrap(), SkyWindow::full_sky());
    }

    #[test]
    fn test_all_options() {
        let args = StarMapArgs::try_parse_from([
            "render_star_map",
            "tyc2.dat",
            "--output",
            "orion.png",
            "--width",
            "320",
            "--height",
            "240",
            "--min-ra",
            "70",
            "--max-ra",
            "95",
            "--min-dec",
            "-12.5",
            "--max-dec",
            "-0.5",
            "--max-magnitude",
            "-1",
        ])
        .unwrap();

        assert_eq!(args.catalog, PathBuf::from("tyc2.dat"));
        assert_eq!(args.output, PathBuf::from("orion.png"));
        assert_eq!(args.image_size(), ImageSize::from_width_height(320, 240));
        assert_eq!(args.max_magnitude, -1.0);
        assert_eq!(
            args.window.to_window().unwrap(),
            SkyWindow::new(70.0, 95.0, -12.5, -0.5)
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(StarMapArgs::try_parse_from(["render_star_map", "--width", "0"]).is_err());
        assert!(StarMapArgs::try_parse_from(["render_star_map", "--height", "0"]).is_err());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let args =
            StarMapArgs::try_parse_from(["render_star_map", "--min-ra", "90", "--max-ra", "10"])
                .unwrap();
        assert_eq!(
            args.window.to_window(),
            Err(ArgsError::InvalidRaRange {
                min: 90.0,
                max: 10.0
            })
        );

        let args =
            StarMapArgs::try_parse_from(["render_star_map", "--min-dec", "5", "--max-dec", "5"])
                .unwrap();
        assert!(matches!(
            args.window.to_window(),
            Err(ArgsError::InvalidDecRange { .. })
        ));
    }
}
