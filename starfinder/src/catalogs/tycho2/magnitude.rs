//! Visual magnitude from the Tycho BT/VT bands

use super::fields::{extract_field, RecordError};
use super::{BT_FIELD, VT_FIELD};

/// Color term of the BT/VT to Johnson V approximation
pub const BT_VT_COLOR_COEFFICIENT: f64 = 0.090;

/// Derive a visual magnitude from the BT and VT columns of a row.
///
/// Tycho-2 regularly omits one band for a star, so:
/// - both bands: `V = VT - 0.090 * (BT - VT)`
/// - only BT: `V = BT`
/// - only VT: `V = VT`
///
/// Both columns are always read; a failure on one does not stop the other.
///
/// # Errors
/// [`RecordError::MissingMagnitude`] when neither band is usable. It carries
/// both field errors.
pub fn synthesize_magnitude(record: &[&str]) -> Result<f64, RecordError> {
    let bt = extract_field(record, BT_FIELD, "BT magnitude");
    let vt = extract_field(record, VT_FIELD, "VT magnitude");

    match (bt, vt) {
        (Ok(bt), Ok(vt)) => Ok(vt - BT_VT_COLOR_COEFFICIENT * (bt - vt)),
        (Ok(bt), Err(_)) => Ok(bt),
        (Err(_), Ok(vt)) => Ok(vt),
        (Err(bt), Err(vt)) => Err(RecordError::MissingMagnitude {
            bt: Box::new(bt),
            vt: Box::new(vt),
        }),
    }
}
