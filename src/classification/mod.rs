//! Anomaly classification for the timecard audit.
//!
//! This module parses clock times, derives the span and gap of each record,
//! applies the three threshold rules and collects matching records into
//! deduplicated buckets.

mod classifier;
mod rules;
mod timing;

pub use classifier::classify;
pub use rules::{
    LONG_SHIFT_THRESHOLD_SECS, LONG_SPAN_THRESHOLD_SECS, SHORT_GAP_LOWER_BOUND_SECS,
    SHORT_GAP_UPPER_BOUND_SECS, is_long_shift, is_long_span, is_short_gap,
};
pub use timing::{ShiftTiming, parse_timestamp};
