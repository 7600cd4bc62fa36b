//! Split catalog row to [`Star`]

use super::fields::{extract_field, RecordError};
use super::magnitude::synthesize_magnitude;
use super::{DEC_FIELD, RA_FIELD};
use crate::Star;

/// Turn one split catalog row into a [`Star`].
///
/// RA and Dec are read first and the first failure is returned as is; the
/// magnitude follows the rules of [`synthesize_magnitude`]. Pure, so rows can
/// be parsed concurrently.
pub fn parse_record(record: &[&str]) -> Result<Star, RecordError> {
    let ra = extract_field(record, RA_FIELD, "RA")?;
    let dec = extract_field(record, DEC_FIELD, "Dec")?;
    let mag = synthesize_magnitude(record)?;

    Ok(Star::new(ra, dec, mag))
}
