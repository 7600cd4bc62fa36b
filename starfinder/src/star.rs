//! Catalog star value type

use std::fmt;

/// A single catalog star: position in degrees and visual magnitude.
///
/// Stars are plain values. Lower magnitude means a brighter star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    ra: f64,
    dec: f64,
    mag: f64,
}

impl Star {
    /// Create a star from right ascension, declination (degrees) and visual magnitude
    pub fn new(ra: f64, dec: f64, mag: f64) -> Self {
        Self { ra, dec, mag }
    }

    /// Right ascension in degrees
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Declination in degrees
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Visual magnitude
    pub fn mag(&self) -> f64 {
        self.mag
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RA {:.6}° Dec {:+.6}° mag {:.3}",
            self.ra, self.dec, self.mag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let star = Star::new(10.0, -20.0, 4.455);
        assert_eq!(star.ra(), 10.0);
        assert_eq!(star.dec(), -20.0);
        assert_eq!(star.mag(), 4.455);
    }

    #[test]
    fn test_display() {
        let star = Star::new(10.0, -20.5, 4.5);
        assert_eq!(star.to_string(), "RA 10.000000° Dec -20.500000° mag 4.500");
    }
}
