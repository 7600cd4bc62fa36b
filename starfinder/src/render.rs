//! Star map rasterization
//!
//! Stars are binned onto an 8-bit single-channel raster by a linear mapping
//! of the sky window onto the image:
//!
//! ```text
//! x = floor((ra  - min_ra)  / (max_ra  - min_ra)  * width)
//! y = floor((dec - min_dec) / (max_dec - min_dec) * height)
//! ```
//!
//! Bins are half open, so a star sitting exactly on `max_ra` or `max_dec`
//! falls outside the image and is not drawn. Pixel intensity comes from the
//! star's magnitude relative to the brightest and faintest star in the input:
//!
//! ```text
//! normalized = (max_mag - mag) / (max_mag - min_mag)
//! intensity  = round(normalized^2.5 * 255)
//! ```
//!
//! The 2.5 exponent pushes faint stars towards black so bright stars stand
//! out. When every star has the same magnitude all of them are drawn at full
//! intensity.

use log::debug;
use ndarray::Array2;

use crate::{ImageSize, SkyWindow, Star};

/// Exponent of the magnitude to intensity curve
pub const BRIGHTNESS_EXPONENT: f64 = 2.5;

/// Render stars into a `(height, width)` raster covering `window`.
///
/// The raster starts black. Stars are drawn one pixel each, in input order;
/// when two stars land on the same pixel the later one wins.
pub fn render_stars(stars: &[Star], size: ImageSize, window: &SkyWindow) -> Array2<u8> {
    let mut img = size.empty_array_u8();

    if stars.is_empty() {
        return img;
    }

    let (min_mag, max_mag) = stars
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), star| {
            (lo.min(star.mag()), hi.max(star.mag()))
        });

    let mut drawn = 0;
    for star in stars {
        if let Some((x, y)) = pixel_position(star, size, window) {
            img[[y, x]] = magnitude_to_intensity(star.mag(), min_mag, max_mag);
            drawn += 1;
        }
    }
    debug!(
        "Rendered {} of {} stars onto a {} raster",
        drawn,
        stars.len(),
        size
    );

    img
}

/// Pixel bin of a star, or None when it falls outside the raster
pub fn pixel_position(
    star: &Star,
    size: ImageSize,
    window: &SkyWindow,
) -> Option<(usize, usize)> {
    let x = ((star.ra() - window.min_ra) / window.ra_span() * size.width as f64).floor();
    let y = ((star.dec() - window.min_dec) / window.dec_span() * size.height as f64).floor();

    // Negated comparison so NaN is rejected too
    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }

    // Float to int casts saturate, so infinities end up out of range
    let (x, y) = (x as usize, y as usize);
    (x < size.width && y < size.height).then_some((x, y))
}

/// Map a magnitude onto an 8-bit intensity given the magnitude range of the field
pub fn magnitude_to_intensity(mag: f64, min_mag: f64, max_mag: f64) -> u8 {
    let mag_range = max_mag - min_mag;
    let normalized = if mag_range > 0.0 {
        (max_mag - mag) / mag_range
    } else {
        1.0
    };

    (normalized.powf(BRIGHTNESS_EXPONENT) * 255.0)
        .round()
        .clamp(0.0, 255.0) as u8
}
