//! Tycho-2 catalog reader
//!
//! Tycho-2 `catalog.dat` rows are fixed-width text records with fields
//! separated by `|`. Only four columns are used here:
//!
//! | column | content                 | required |
//! |--------|-------------------------|----------|
//! | 17     | BT magnitude            | no       |
//! | 19     | VT magnitude            | no       |
//! | 24     | right ascension (deg)   | yes      |
//! | 25     | declination (deg)       | yes      |
//!
//! A row becomes a [`Star`](crate::Star) when RA, Dec and at least one of the
//! two photometric bands parse. Everything else is rejected with a
//! [`RecordError`] and dropped by the reader.
//!
//! # Example
//!
//! ```rust,no_run
//! use starfinder::catalogs::tycho2::read_stars_with_summary;
//!
//! let (stars, summary) = read_stars_with_summary("data/tycho2/catalog.dat")?;
//! println!("{} stars, {} rows skipped", stars.len(), summary.skipped);
//! # Ok::<(), starfinder::catalogs::CatalogError>(())
//! ```

mod fields;
mod magnitude;
mod reader;
mod record;

pub use fields::{extract_field, RecordError};
pub use magnitude::{synthesize_magnitude, BT_VT_COLOR_COEFFICIENT};
pub use reader::{
    parse_catalog_lines, read_stars, read_stars_with_summary, CatalogError, ReadSummary,
    MAX_REPORTED_SKIPS,
};
pub use record::parse_record;

/// Field delimiter of a catalog row
pub const FIELD_DELIMITER: char = '|';

/// Column of the Tycho BT magnitude
pub const BT_FIELD: usize = 17;
/// Column of the Tycho VT magnitude
pub const VT_FIELD: usize = 19;
/// Column of the observed right ascension in degrees
pub const RA_FIELD: usize = 24;
/// Column of the observed declination in degrees
pub const DEC_FIELD: usize = 25;

/// Number of fields a row needs to carry every column above
pub const MIN_FIELDS_COUNT: usize = 26;
