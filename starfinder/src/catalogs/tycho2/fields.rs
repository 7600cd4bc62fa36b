//! Per-field extraction from a split catalog row

use std::num::ParseFloatError;

use thiserror::Error;

/// Reasons a single catalog row is rejected.
///
/// These are per-row failures. The reader drops the row and keeps going, so
/// a `RecordError` never escapes a catalog read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The row has no column at the requested index
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The column text is not a decimal number
    #[error("Failed to parse {field}. ({source})")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseFloatError,
    },

    /// The column parsed to NaN or an infinity
    #[error("Non-finite value in {0}")]
    NonFiniteField(&'static str),

    /// Neither photometric band could be read
    #[error("Missing magnitude. {bt}. {vt}")]
    MissingMagnitude {
        bt: Box<RecordError>,
        vt: Box<RecordError>,
    },
}

/// Parse the numeric value at `column` of a split row.
///
/// Tycho-2 pads fields with spaces, so the text is trimmed before parsing.
/// `field` is the human readable name used in the error.
///
/// # Errors
/// * [`RecordError::MissingField`] - `column` is past the end of the row
/// * [`RecordError::InvalidField`] - the text is not a number (blank included)
/// * [`RecordError::NonFiniteField`] - the text is `nan`, `inf` or similar
pub fn extract_field(
    record: &[&str],
    column: usize,
    field: &'static str,
) -> Result<f64, RecordError> {
    let text = record
        .get(column)
        .ok_or(RecordError::MissingField(field))?;

    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|source| RecordError::InvalidField { field, source })?;

    if !value.is_finite() {
        return Err(RecordError::NonFiniteField(field));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_value() {
        let record = ["1.5", "-2.25", "3"];
        assert_eq!(extract_field(&record, 1, "Dec").unwrap(), -2.25);
        assert_eq!(extract_field(&record, 2, "Dec").unwrap(), 3.0);
    }

    #[test]
    fn test_trims_padding() {
        let record = ["  12.146 ", " 9.409"];
        assert_eq!(extract_field(&record, 0, "RA").unwrap(), 12.146);
        assert_eq!(extract_field(&record, 1, "RA").unwrap(), 9.409);
    }

    #[test]
    fn test_out_of_range_column_is_missing() {
        let record = ["1.0", "2.0"];
        assert_eq!(
            extract_field(&record, 2, "RA"),
            Err(RecordError::MissingField("RA"))
        );
        assert_eq!(
            extract_field(&[], 0, "Dec"),
            Err(RecordError::MissingField("Dec"))
        );
    }

    #[test]
    fn test_garbage_is_invalid() {
        let record = ["abc"];
        match extract_field(&record, 0, "RA") {
            Err(RecordError::InvalidField { field, .. }) => assert_eq!(field, "RA"),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_is_invalid() {
        let record = ["      "];
        assert!(matches!(
            extract_field(&record, 0, "VT magnitude"),
            Err(RecordError::InvalidField {
                field: "VT magnitude",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let record = ["nan", "inf", "-infinity"];
        for column in 0..record.len() {
            assert_eq!(
                extract_field(&record, column, "RA"),
                Err(RecordError::NonFiniteField("RA"))
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RecordError::MissingField("RA").to_string(),
            "Missing field: RA"
        );

        let invalid = extract_field(&["x"], 0, "Dec").unwrap_err();
        assert!(invalid.to_string().starts_with("Failed to parse Dec. ("));
    }
}
