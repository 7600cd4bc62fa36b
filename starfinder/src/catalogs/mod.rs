//! Star catalogs module
//!
//! Readers that turn catalog files into [`Star`](crate::Star) lists.
//! Only the Tycho-2 pipe-delimited layout is supported.

pub mod tycho2;

pub use tycho2::{read_stars, read_stars_with_summary, CatalogError, ReadSummary, RecordError};
