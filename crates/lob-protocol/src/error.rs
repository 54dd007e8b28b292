//! Typed errors for the text boundary.

use std::num::ParseIntError;

use thiserror::Error;

/// Rejection reasons for a recognized order line that fails to parse.
///
/// Lines that are not recognized at all (empty, or not starting with
/// `B`/`S`) are not errors; the parser skips them as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line ended before a required field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A field did not parse as a decimal in its required range.
    #[error("invalid {field} {value:?}: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A field parsed but violates the order model (zero id, zero
    /// quantity, non-positive price, zero peak).
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    /// More fields than the record format allows.
    #[error("unexpected field after peak size")]
    TrailingField,
}
