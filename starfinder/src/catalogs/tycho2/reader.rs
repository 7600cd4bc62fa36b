//! Whole-file Tycho-2 catalog reader
//!
//! The catalog is loaded in one go: every line is read, split on `|` and
//! parsed. Splitting and parsing run on the rayon pool; indexed collects keep
//! results in line order, so the set and order of returned stars only depend
//! on the file contents.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use super::fields::RecordError;
use super::record::parse_record;
use super::{FIELD_DELIMITER, MIN_FIELDS_COUNT};
use crate::Star;

/// Number of rejected rows reported individually before going quiet
pub const MAX_REPORTED_SKIPS: usize = 10;

/// Fatal catalog read failures
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog could not be opened or read to the end
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Row accounting for one catalog read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadSummary {
    /// Lines read from the catalog
    pub rows: usize,
    /// Rows that produced a star
    pub kept: usize,
    /// Rows rejected with a [`RecordError`]
    pub skipped: usize,
}

/// Read every star from a Tycho-2 catalog file.
///
/// Rows that fail to parse are dropped; see [`read_stars_with_summary`] for
/// the counts.
///
/// # Errors
/// [`CatalogError::Io`] when the file cannot be opened or read. No partial
/// star list is returned in that case.
pub fn read_stars<P: AsRef<Path>>(path: P) -> Result<Vec<Star>, CatalogError> {
    read_stars_with_summary(path).map(|(stars, _)| stars)
}

/// Read every star from a Tycho-2 catalog file along with row counts.
pub fn read_stars_with_summary<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<Star>, ReadSummary), CatalogError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let start = Instant::now();
    let file = File::open(path).map_err(io_error)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        lines.push(decode_line(line.map_err(io_error)?));
    }
    debug!(
        "Read {} catalog lines from {} in {:.3}s",
        lines.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );

    let parse_start = Instant::now();
    let result = parse_catalog_lines(&lines);
    debug!(
        "Parsed catalog in {:.3}s",
        parse_start.elapsed().as_secs_f64()
    );

    Ok(result)
}

/// Decode one raw catalog line, dropping a trailing `\r`.
///
/// Invalid UTF-8 is replaced rather than rejected so a stray byte only
/// affects the row it sits in.
fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Rate limited reporting of rejected rows
#[derive(Debug, Default)]
struct SkipReporter {
    skipped: usize,
}

impl SkipReporter {
    /// Count a rejected row and return the message to log for it, if any
    fn skip(&mut self, row: usize, field_count: usize, error: &RecordError) -> Option<String> {
        self.skipped += 1;
        if self.skipped <= MAX_REPORTED_SKIPS {
            let mut message = format!("Skipping row {row} due to error: {error}");
            if field_count < MIN_FIELDS_COUNT {
                message.push_str(&format!(" ({field_count} of {MIN_FIELDS_COUNT} fields)"));
            }
            Some(message)
        } else if self.skipped == MAX_REPORTED_SKIPS + 1 {
            Some("Further skipped rows will not be printed...".to_string())
        } else {
            None
        }
    }
}

/// Split and parse already-loaded catalog lines.
///
/// Lines must not carry their terminator. The first
/// [`MAX_REPORTED_SKIPS`] rejected rows are logged at `warn` with their
/// 0-based row index; later ones are only counted.
pub fn parse_catalog_lines<S>(lines: &[S]) -> (Vec<Star>, ReadSummary)
where
    S: AsRef<str> + Sync,
{
    let records: Vec<Vec<&str>> = lines
        .par_iter()
        .map(|line| line.as_ref().split(FIELD_DELIMITER).collect())
        .collect();

    let parsed: Vec<Result<Star, RecordError>> = records
        .par_iter()
        .map(|record| parse_record(record))
        .collect();

    let mut stars = Vec::with_capacity(parsed.len());
    let mut reporter = SkipReporter::default();
    for (row, (record, result)) in records.iter().zip(parsed).enumerate() {
        match result {
            Ok(star) => stars.push(star),
            Err(e) => {
                if let Some(message) = reporter.skip(row, record.len(), &e) {
                    warn!("{message}");
                }
            }
        }
    }
    stars.shrink_to_fit();

    let summary = ReadSummary {
        rows: lines.len(),
        kept: stars.len(),
        skipped: reporter.skipped,
    };
    debug!(
        "Catalog rows: {}, stars kept: {}, rows skipped: {}",
        summary.rows, summary.kept, summary.skipped
    );

    (stars, summary)
}
