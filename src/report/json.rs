//! JSON report rendering.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{AnomalyKind, AnomalyReport, ClassificationTrace, TimecardRecord};

/// A flagged employee entry in a JSON bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedEmployee {
    /// Employee display name.
    pub employee_name: String,
    /// Position identifier.
    pub position_id: String,
    /// Employee file number.
    pub file_number: String,
    /// Clock-in text as loaded.
    pub time_in: String,
    /// Clock-out text as loaded.
    pub time_out: String,
}

impl From<&TimecardRecord> for FlaggedEmployee {
    fn from(record: &TimecardRecord) -> Self {
        Self {
            employee_name: record.employee_name.clone(),
            position_id: record.position_id.clone(),
            file_number: record.file_number.clone(),
            time_in: record.time_in.clone(),
            time_out: record.time_out.clone(),
        }
    }
}

/// One anomaly bucket in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    /// The bucket kind.
    pub kind: AnomalyKind,
    /// The section heading.
    pub heading: String,
    /// The records in the bucket.
    pub employees: Vec<FlaggedEmployee>,
}

/// The complete JSON form of an audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The crate version that produced the report.
    pub engine_version: String,
    /// The timecard file that was audited.
    pub source: String,
    /// Number of records whose timestamps were examined.
    pub records_examined: usize,
    /// Number of records skipped for lacking timestamps.
    pub records_skipped: usize,
    /// Number of distinct records flagged in any bucket.
    pub total_flagged: usize,
    /// The three buckets, in report order.
    pub buckets: Vec<BucketSummary>,
    /// The decisions behind the buckets.
    pub trace: ClassificationTrace,
}

impl JsonReport {
    /// Builds the JSON form of `report` for the file at `source`.
    pub fn new(report: &AnomalyReport, source: &Path) -> Self {
        let buckets = AnomalyKind::ALL
            .into_iter()
            .map(|kind| BucketSummary {
                kind,
                heading: kind.heading().to_string(),
                employees: report.bucket(kind).iter().map(FlaggedEmployee::from).collect(),
            })
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.display().to_string(),
            records_examined: report.records_examined,
            records_skipped: report.records_skipped,
            total_flagged: report.total_flagged(),
            buckets,
            trace: report.trace.clone(),
        }
    }
}

/// Renders `report` as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error, which only occurs for non-string map keys
/// and so cannot happen for this report shape.
pub fn render_json(report: &AnomalyReport, source: &Path) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(report, source))
}
