//! Timecard record model.
//!
//! This module defines [`TimecardRecord`], one row of the source timecard
//! table, along with the fixed timestamp format the time-in and time-out
//! fields are written in.

use serde::{Deserialize, Serialize};

/// The chrono pattern for `MM/DD/YYYY hh:mm AM|PM` timestamps.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Stands in for an empty time-in or time-out field (Unix epoch midnight).
pub const SENTINEL_TIMESTAMP: &str = "01/01/1970 12:00 AM";

/// The number of columns every data row must provide.
pub const FIELD_COUNT: usize = 9;

/// Represents one row of the timecard table.
///
/// All fields are kept as text. Only `time_in` and `time_out` are ever
/// interpreted, and only during classification.
///
/// Equality, ordering and hashing cover all nine fields. Two rows with the
/// same text in every column are therefore the same record: an anomaly
/// bucket holds one entry for them even when they were two physical
/// timecard entries.
///
/// # Example
///
/// ```
/// use timecard_audit::models::TimecardRecord;
///
/// let record = TimecardRecord {
///     position_id: "P1".to_string(),
///     position_status: "Active".to_string(),
///     time_in: "01/01/2024 08:00 AM".to_string(),
///     time_out: "01/01/2024 04:00 PM".to_string(),
///     timecard_hours: "8".to_string(),
///     pay_cycle_start_date: "01/01/2024".to_string(),
///     pay_cycle_end_date: "01/14/2024".to_string(),
///     employee_name: "Jane Doe".to_string(),
///     file_number: "F001".to_string(),
/// };
/// assert!(record.has_timestamps());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimecardRecord {
    /// Position identifier.
    pub position_id: String,
    /// Position status label.
    pub position_status: String,
    /// Clock-in time in `MM/DD/YYYY hh:mm AM|PM` form.
    pub time_in: String,
    /// Clock-out time in `MM/DD/YYYY hh:mm AM|PM` form.
    pub time_out: String,
    /// Hours recorded on the timecard (not interpreted).
    pub timecard_hours: String,
    /// Start date of the pay cycle (not interpreted).
    pub pay_cycle_start_date: String,
    /// End date of the pay cycle (not interpreted).
    pub pay_cycle_end_date: String,
    /// Employee display name.
    pub employee_name: String,
    /// Employee file number.
    pub file_number: String,
}

impl TimecardRecord {
    /// Returns true when both `time_in` and `time_out` hold text.
    ///
    /// Loaded records always do, since the loader substitutes
    /// [`SENTINEL_TIMESTAMP`] for empty values. Records built directly may not.
    pub fn has_timestamps(&self) -> bool {
        !self.time_in.is_empty() && !self.time_out.is_empty()
    }
}
