//! Record loading for the timecard audit.
//!
//! Turns comma-separated timecard rows into [`TimecardRecord`]s, substituting
//! a sentinel for missing clock-in and clock-out times.
//!
//! # Example
//!
//! ```no_run
//! use timecard_audit::ingest::load_file;
//!
//! let records = load_file("./timecards.csv").unwrap();
//! println!("Loaded {} records", records.len());
//! ```
//!
//! [`TimecardRecord`]: crate::models::TimecardRecord

mod loader;

pub use loader::{load_file, load_records, parse_row};
