//! Timestamp parsing and per-record duration arithmetic.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::{TIMESTAMP_FORMAT, TimecardRecord};

/// Parses a `MM/DD/YYYY hh:mm AM|PM` timestamp.
///
/// The pattern is fixed and does not depend on the host locale.
///
/// # Arguments
///
/// * `record` - The 1-based record position, used in error messages
/// * `field` - The field name, used in error messages
/// * `value` - The timestamp text
///
/// # Errors
///
/// Returns [`AuditError::DateFormat`] if `value` does not match the pattern.
///
/// # Example
///
/// ```
/// use timecard_audit::classification::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let parsed = parse_timestamp(1, "time_in", "03/14/2024 07:05 PM")?;
/// assert_eq!(
///     parsed,
///     NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(19, 5, 0).unwrap()
/// );
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
pub fn parse_timestamp(record: usize, field: &str, value: &str) -> AuditResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| AuditError::DateFormat {
        record,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// The parsed clock times of one record and the two durations derived
/// from them.
///
/// `gap` is always the exact negation of `span`. It is not a gap between two
/// different shifts; it reuses the same pair of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTiming {
    /// Parsed time-in.
    pub time_in: NaiveDateTime,
    /// Parsed time-out.
    pub time_out: NaiveDateTime,
    /// `time_out - time_in`; negative when time-out precedes time-in.
    pub span: TimeDelta,
    /// `time_in - time_out`.
    pub gap: TimeDelta,
}

impl ShiftTiming {
    /// Builds the timing from two parsed timestamps.
    pub fn new(time_in: NaiveDateTime, time_out: NaiveDateTime) -> Self {
        Self {
            time_in,
            time_out,
            span: time_out - time_in,
            gap: time_in - time_out,
        }
    }

    /// Parses both timestamps of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::DateFormat`] naming the first field that fails
    /// to parse, time-in before time-out.
    pub fn from_record(position: usize, record: &TimecardRecord) -> AuditResult<Self> {
        let time_in = parse_timestamp(position, "time_in", &record.time_in)?;
        let time_out = parse_timestamp(position, "time_out", &record.time_out)?;
        Ok(Self::new(time_in, time_out))
    }

    /// The span in hours, rounded to two decimal places.
    pub fn span_hours(&self) -> Decimal {
        to_hours(self.span)
    }

    /// The gap in hours, rounded to two decimal places.
    pub fn gap_hours(&self) -> Decimal {
        to_hours(self.gap)
    }
}

fn to_hours(delta: TimeDelta) -> Decimal {
    (Decimal::new(delta.num_minutes(), 0) / Decimal::new(60, 0)).round_dp(2)
}
