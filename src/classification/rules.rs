//! Anomaly threshold rules.
//!
//! Thresholds are fixed. Durations are compared in whole seconds; timecard
//! timestamps carry minute precision, so no rounding is involved.

use chrono::TimeDelta;

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Spans of seven days or more are flagged as long spans (inclusive).
pub const LONG_SPAN_THRESHOLD_SECS: i64 = 7 * 24 * SECONDS_PER_HOUR;

/// Gaps must exceed one hour to count as short gaps (exclusive).
pub const SHORT_GAP_LOWER_BOUND_SECS: i64 = SECONDS_PER_HOUR;

/// Gaps must stay under ten hours to count as short gaps (exclusive).
pub const SHORT_GAP_UPPER_BOUND_SECS: i64 = 10 * SECONDS_PER_HOUR;

/// Spans over fourteen hours are flagged as long shifts (exclusive).
pub const LONG_SHIFT_THRESHOLD_SECS: i64 = 14 * SECONDS_PER_HOUR;

/// Returns true if `span` is at least seven days.
///
/// # Example
///
/// ```
/// use timecard_audit::classification::is_long_span;
/// use chrono::TimeDelta;
///
/// assert!(is_long_span(TimeDelta::days(7)));
/// assert!(!is_long_span(TimeDelta::days(7) - TimeDelta::minutes(1)));
/// ```
pub fn is_long_span(span: TimeDelta) -> bool {
    span.num_seconds() >= LONG_SPAN_THRESHOLD_SECS
}

/// Returns true if the magnitude of `gap` lies strictly between one and
/// ten hours.
///
/// # Example
///
/// ```
/// use timecard_audit::classification::is_short_gap;
/// use chrono::TimeDelta;
///
/// assert!(is_short_gap(TimeDelta::minutes(-150)));
/// assert!(!is_short_gap(TimeDelta::hours(1)));
/// assert!(!is_short_gap(TimeDelta::hours(10)));
/// ```
pub fn is_short_gap(gap: TimeDelta) -> bool {
    let magnitude = gap.num_seconds().abs();
    magnitude > SHORT_GAP_LOWER_BOUND_SECS && magnitude < SHORT_GAP_UPPER_BOUND_SECS
}

/// Returns true if `span` exceeds fourteen hours.
pub fn is_long_shift(span: TimeDelta) -> bool {
    span.num_seconds() > LONG_SHIFT_THRESHOLD_SECS
}
