//! Shared fixtures for starfinder tests.
//!
//! - **Catalog rows**: [`tycho2_row`] builds a full-width Tycho-2 `catalog.dat`
//!   line from the handful of columns the reader cares about.
//! - **Catalog files**: [`write_catalog`] writes rows to a temporary file that
//!   is removed when dropped.
//! - **Artifacts**: [`output_path`] points into `<workspace>/test_output/` so
//!   rendered maps survive the test run for manual inspection.
//!
//! ```rust
//! use test_helpers::{tycho2_row, write_catalog};
//!
//! let rows = vec![
//!     tycho2_row(Some("5.0"), Some("4.5"), Some("10.0"), Some("20.0")),
//!     tycho2_row(None, None, Some("11.0"), Some("21.0")),
//! ];
//! let catalog = write_catalog(&rows).unwrap();
//! assert!(catalog.path().exists());
//! ```

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fields in a Tycho-2 `catalog.dat` row
pub const TYCHO2_FIELD_COUNT: usize = 32;

const BT_FIELD: usize = 17;
const VT_FIELD: usize = 19;
const RA_FIELD: usize = 24;
const DEC_FIELD: usize = 25;

/// Errors raised while setting up test fixtures
#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    /// No Cargo.toml with a `[workspace]` section above the current directory
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),

    #[error("Failed to write test catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Build one `|` separated Tycho-2 row.
///
/// `None` leaves the column blank-padded the way the catalog marks missing
/// values. The other columns carry fixed filler text.
pub fn tycho2_row(
    bt: Option<&str>,
    vt: Option<&str>,
    ra: Option<&str>,
    dec: Option<&str>,
) -> String {
    let mut fields = vec![" 0.0".to_string(); TYCHO2_FIELD_COUNT];
    fields[0] = "0001 00008 1".to_string();
    for (column, value) in [
        (BT_FIELD, bt),
        (VT_FIELD, vt),
        (RA_FIELD, ra),
        (DEC_FIELD, dec),
    ] {
        fields[column] = value.unwrap_or("      ").to_string();
    }
    fields.join("|")
}

/// Write rows to a temporary catalog file, one per line.
pub fn write_catalog<S: AsRef<str>>(rows: &[S]) -> Result<NamedTempFile, TestHelperError> {
    let mut file = NamedTempFile::new()?;
    for row in rows {
        writeln!(file, "{}", row.as_ref())?;
    }
    file.flush()?;
    Ok(file)
}

/// Locate the workspace root by walking up to the Cargo.toml with `[workspace]`.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {}", e))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {}", e))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// Test output directory, `<workspace>/test_output/`, created on first use
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }

    output_dir
}

/// Path of a test artifact inside the output directory
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_layout() {
        let row = tycho2_row(Some("5.0"), None, Some("10.0"), Some("-20.0"));
        let fields: Vec<&str> = row.split('|').collect();

        assert_eq!(fields.len(), TYCHO2_FIELD_COUNT);
        assert_eq!(fields[BT_FIELD], "5.0");
        assert_eq!(fields[VT_FIELD].trim(), "");
        assert_eq!(fields[RA_FIELD], "10.0");
        assert_eq!(fields[DEC_FIELD], "-20.0");
    }

    #[test]
    fn test_write_catalog() {
        let rows = vec!["a|b".to_string(), "c|d".to_string()];
        let file = write_catalog(&rows).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "a|b\nc|d\n");
    }

    #[test]
    fn test_project_root_exists() {
        let root = find_project_root().expect("Failed to find project root");
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn test_output_path() {
        let path = output_path("test.png");
        assert_eq!(path, get_output_dir().join("test.png"));
        assert!(get_output_dir().is_dir());
    }
}
