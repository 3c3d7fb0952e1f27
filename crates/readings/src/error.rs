//! Defines the error types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The error type for resolving catalog labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The display label does not belong to the catalog's label table.
    UnknownSensorLabel { label: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let catalog_error = "catalog error:";

        match self {
            CatalogError::UnknownSensorLabel { label } => write!(
                f,
                "{catalog_error} the \"{label}\" label does not name a known sensor type"
            ),
        }
    }
}

impl Error for CatalogError {}

/// The error type for validating wire readings.
///
/// Any of these marks the reading, and therefore the response carrying
/// it, as malformed; callers treat it the same way as a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// The reading carries no value field.
    MissingValue,

    /// The reading value is not coercible to a finite number.
    MalformedValue { value: String },

    /// The reading carries no timestamp field.
    MissingTimestamp,

    /// The reading timestamp does not match the `YYYY/MM/DD HH:mm` format.
    MalformedTimestamp { timestamp: String },

    /// The reading type key is not one of the known sensor kinds.
    UnknownKind { key: String },

    /// The reading carries no type key and the caller supplied no kind.
    MissingKind,
}

impl Display for ReadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reading_error = "reading error:";

        match self {
            ReadingError::MissingValue => {
                write!(f, "{reading_error} the reading carries no value")
            }
            ReadingError::MalformedValue { value } => write!(
                f,
                "{reading_error} the \"{value}\" value is not a finite number"
            ),
            ReadingError::MissingTimestamp => {
                write!(f, "{reading_error} the reading carries no timestamp")
            }
            ReadingError::MalformedTimestamp { timestamp } => write!(
                f,
                "{reading_error} the \"{timestamp}\" timestamp does not match the YYYY/MM/DD HH:mm format"
            ),
            ReadingError::UnknownKind { key } => write!(
                f,
                "{reading_error} the \"{key}\" type key does not name a known sensor kind"
            ),
            ReadingError::MissingKind => write!(
                f,
                "{reading_error} the reading carries no type key and no kind was requested"
            ),
        }
    }
}

impl Error for ReadingError {}
