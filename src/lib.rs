//! Timecard Audit
//!
//! This crate loads employee timecard records from a comma-separated file and
//! flags scheduling anomalies: long spans of consecutive days, short gaps
//! between shifts, and single shifts longer than fourteen hours.

#![warn(missing_docs)]

pub mod classification;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
