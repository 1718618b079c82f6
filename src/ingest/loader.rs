//! Timecard file loading.
//!
//! Rows are split naively on commas. There is no quoting or escaping: a
//! field containing a comma shifts every column after it.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{AuditError, AuditResult};
use crate::models::{FIELD_COUNT, SENTINEL_TIMESTAMP, TimecardRecord};

const DELIMITER: char = ',';

/// Parses one data row into a [`TimecardRecord`].
///
/// Every field is trimmed. An empty time-in (column 2) or time-out
/// (column 3) is replaced with [`SENTINEL_TIMESTAMP`]. Columns past the
/// ninth are ignored.
///
/// # Arguments
///
/// * `row` - The 1-based data row number, used in error messages
/// * `line` - The raw row text
///
/// # Errors
///
/// Returns [`AuditError::MalformedRow`] if the row has fewer than nine fields.
///
/// # Example
///
/// ```
/// use timecard_audit::ingest::parse_row;
///
/// let record = parse_row(1, "P1, Active,,01/01/2024 05:00 PM,8,01/01/2024,01/14/2024,Jane Doe,F001")?;
/// assert_eq!(record.position_status, "Active");
/// assert_eq!(record.time_in, "01/01/1970 12:00 AM");
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
pub fn parse_row(row: usize, line: &str) -> AuditResult<TimecardRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    if fields.len() < FIELD_COUNT {
        return Err(AuditError::MalformedRow {
            row,
            found: fields.len(),
        });
    }
    if fields.len() > FIELD_COUNT {
        warn!(row, found = fields.len(), "Ignoring fields past column {}", FIELD_COUNT);
    }

    Ok(TimecardRecord {
        position_id: fields[0].to_string(),
        position_status: fields[1].to_string(),
        time_in: or_sentinel(fields[2]),
        time_out: or_sentinel(fields[3]),
        timecard_hours: fields[4].to_string(),
        pay_cycle_start_date: fields[5].to_string(),
        pay_cycle_end_date: fields[6].to_string(),
        employee_name: fields[7].to_string(),
        file_number: fields[8].to_string(),
    })
}

fn or_sentinel(value: &str) -> String {
    if value.is_empty() {
        SENTINEL_TIMESTAMP.to_string()
    } else {
        value.to_string()
    }
}

/// Parses data rows (header already removed) into records, keeping order.
///
/// The first malformed row aborts the load.
pub fn load_records<'a, I>(lines: I) -> AuditResult<Vec<TimecardRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_row(index + 1, line))
        .collect()
}

/// Reads a timecard file, discards its header line and loads the rest.
///
/// The whole file is read into memory before any row is parsed. Bytes that
/// are not valid UTF-8 are replaced with `U+FFFD` rather than failing the run.
///
/// # Errors
///
/// - [`AuditError::FileAccess`] if the file is missing or unreadable
/// - [`AuditError::MalformedRow`] for the first row with fewer than nine fields
///
/// # Example
///
/// ```no_run
/// use timecard_audit::ingest::load_file;
///
/// let records = load_file("./timecards.csv")?;
/// println!("Loaded {} records", records.len());
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> AuditResult<Vec<TimecardRecord>> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| AuditError::FileAccess {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    // Exports are often not UTF-8; invalid bytes become U+FFFD.
    let content = String::from_utf8_lossy(&bytes);

    let records = load_records(content.lines().skip(1))?;
    debug!(path = %path.display(), count = records.len(), "Loaded timecard records");

    Ok(records)
}
