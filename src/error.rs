//! Error types for the timecard audit.
//!
//! Every failure is fatal to the run: loading and classification either
//! complete in full or return one of these errors, and no partial report
//! is produced.

use thiserror::Error;

/// The main error type for the timecard audit.
///
/// # Example
///
/// ```
/// use timecard_audit::error::AuditError;
///
/// let error = AuditError::MalformedRow { row: 4, found: 6 };
/// assert_eq!(
///     error.to_string(),
///     "Malformed row 4: expected 9 comma-separated fields, found 6"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// The input file is missing or could not be read.
    #[error("Cannot read timecard file '{path}': {message}")]
    FileAccess {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// A data row did not contain the nine required fields.
    #[error("Malformed row {row}: expected 9 comma-separated fields, found {found}")]
    MalformedRow {
        /// The 1-based data row number (the header is not counted).
        row: usize,
        /// The number of fields the row actually contained.
        found: usize,
    },

    /// A time-in or time-out value did not match `MM/DD/YYYY hh:mm AM|PM`.
    #[error("Invalid timestamp in record {record}, field '{field}': '{value}'")]
    DateFormat {
        /// The 1-based position of the record in the classified sequence.
        record: usize,
        /// The field name (`time_in` or `time_out`).
        field: String,
        /// The offending text.
        value: String,
    },

    /// The YAML configuration file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The YAML configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No input file was given on the command line, environment or config file.
    #[error("No timecard file given: pass --input or set TIMECARD_AUDIT_INPUT")]
    MissingInput,
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
