//! Core data models for the timecard audit.
//!
//! This module contains the timecard record and the anomaly report produced
//! by classification.

mod anomaly_report;
mod timecard;

pub use anomaly_report::{
    AnomalyKind, AnomalyReport, ClassificationStep, ClassificationTrace, ClassificationWarning,
};
pub use timecard::{FIELD_COUNT, SENTINEL_TIMESTAMP, TIMESTAMP_FORMAT, TimecardRecord};
