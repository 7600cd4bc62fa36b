//! Rectangular RA/Dec window on the sky

use std::fmt;

/// Inclusive right ascension / declination rectangle in degrees.
///
/// Used both to select stars and as the extent of the rendered map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyWindow {
    /// Minimum right ascension (degrees)
    pub min_ra: f64,
    /// Maximum right ascension (degrees)
    pub max_ra: f64,
    /// Minimum declination (degrees)
    pub min_dec: f64,
    /// Maximum declination (degrees)
    pub max_dec: f64,
}

impl SkyWindow {
    /// Create a window from its RA and Dec bounds
    pub fn new(min_ra: f64, max_ra: f64, min_dec: f64, max_dec: f64) -> Self {
        Self {
            min_ra,
            max_ra,
            min_dec,
            max_dec,
        }
    }

    /// The whole sky: RA [0, 360], Dec [-90, 90]
    pub fn full_sky() -> Self {
        Self::new(0.0, 360.0, -90.0, 90.0)
    }

    /// True when the position lies inside the window, edges included
    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        ra >= self.min_ra && ra <= self.max_ra && dec >= self.min_dec && dec <= self.max_dec
    }

    /// Width of the window in right ascension (degrees)
    pub fn ra_span(&self) -> f64 {
        self.max_ra - self.min_ra
    }

    /// Height of the window in declination (degrees)
    pub fn dec_span(&self) -> f64 {
        self.max_dec - self.min_dec
    }
}

impl Default for SkyWindow {
    fn default() -> Self {
        Self::full_sky()
    }
}

impl fmt::Display for SkyWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RA {} to {}, Dec {} to {}",
            self.min_ra, self.max_ra, self.min_dec, self.max_dec
        )
    }
}
