//! Sky window and brightness selection

use rayon::prelude::*;

use crate::{SkyWindow, Star};

/// Keep the stars inside `window` that are at least as bright as `max_magnitude`.
///
/// All bounds are inclusive. Magnitudes grow as stars get fainter, so a star
/// is kept when `mag <= max_magnitude`. The predicate runs on the rayon pool;
/// the collect keeps input order, which makes the result deterministic and
/// the operation idempotent.
pub fn filter_stars(stars: Vec<Star>, window: &SkyWindow, max_magnitude: f64) -> Vec<Star> {
    let mut filtered: Vec<Star> = stars
        .into_par_iter()
        .filter(|star| window.contains(star.ra(), star.dec()) && star.mag() <= max_magnitude)
        .collect();
    filtered.shrink_to_fit();
    filtered
}
