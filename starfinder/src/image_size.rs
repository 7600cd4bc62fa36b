//! Raster dimensions

use ndarray::Array2;
use std::fmt;

/// Output raster dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl ImageSize {
    /// Create a new ImageSize
    pub fn from_width_height(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create a black 8-bit raster with this size
    ///
    /// The array shape is (height, width): rows come first.
    pub fn empty_array_u8(&self) -> Array2<u8> {
        Array2::zeros((self.height, self.width))
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
