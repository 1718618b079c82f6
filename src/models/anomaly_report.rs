//! Anomaly report models.
//!
//! This module contains [`AnomalyReport`], the output of a classification run:
//! three deduplicated buckets of flagged records and a trace of every rule
//! match that put a record into a bucket.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimecardRecord;

/// The three anomaly buckets, in report order.
///
/// # Example
///
/// ```
/// use timecard_audit::models::AnomalyKind;
///
/// assert_eq!(AnomalyKind::ALL[0], AnomalyKind::LongSpan);
/// assert_eq!(
///     AnomalyKind::LongShift.heading(),
///     "Employees who have worked for more than 14 hours in a single shift"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Time-out at least seven days after time-in.
    LongSpan,
    /// Time-in and time-out more than one but less than ten hours apart.
    ShortGap,
    /// Time-out more than fourteen hours after time-in.
    LongShift,
}

impl AnomalyKind {
    /// Every kind, in the order sections appear in the report.
    pub const ALL: [AnomalyKind; 3] = [
        AnomalyKind::LongSpan,
        AnomalyKind::ShortGap,
        AnomalyKind::LongShift,
    ];

    /// The section heading printed above this bucket.
    pub fn heading(self) -> &'static str {
        match self {
            AnomalyKind::LongSpan => "Employees who have worked for 7 consecutive days",
            AnomalyKind::ShortGap => {
                "Employees who have less than 10 hours between shifts but greater than 1 hour"
            }
            AnomalyKind::LongShift => {
                "Employees who have worked for more than 14 hours in a single shift"
            }
        }
    }

    /// A stable identifier for the rule, used in the trace.
    pub fn rule_id(self) -> &'static str {
        match self {
            AnomalyKind::LongSpan => "long_span",
            AnomalyKind::ShortGap => "short_gap",
            AnomalyKind::LongShift => "long_shift",
        }
    }
}

/// A single rule match recorded during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The 1-based position of the record in the classified sequence.
    pub record: usize,
    /// The bucket the record was matched to.
    pub kind: AnomalyKind,
    /// Employee name of the matched record.
    pub employee_name: String,
    /// Position identifier of the matched record.
    pub position_id: String,
    /// Time-out minus time-in, in hours.
    pub span_hours: Decimal,
    /// Time-in minus time-out, in hours.
    pub gap_hours: Decimal,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning raised during classification.
///
/// Warnings do not stop the run but may need a reviewer's attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// Every decision made while classifying a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTrace {
    /// One step per rule match, in the order they were made.
    pub steps: Vec<ClassificationStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<ClassificationWarning>,
}

/// The result of classifying a sequence of timecard records.
///
/// Buckets are ordered sets keyed on all nine record fields. The same record
/// may sit in several buckets. Iteration order within a bucket follows the
/// record ordering and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnomalyReport {
    long_span: BTreeSet<TimecardRecord>,
    short_gap: BTreeSet<TimecardRecord>,
    long_shift: BTreeSet<TimecardRecord>,
    /// Number of records whose timestamps were examined.
    pub records_examined: usize,
    /// Number of records skipped for lacking a time-in or time-out value.
    pub records_skipped: usize,
    /// The decisions behind the bucket contents.
    pub trace: ClassificationTrace,
}

impl AnomalyReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `kind`.
    pub fn bucket(&self, kind: AnomalyKind) -> &BTreeSet<TimecardRecord> {
        match kind {
            AnomalyKind::LongSpan => &self.long_span,
            AnomalyKind::ShortGap => &self.short_gap,
            AnomalyKind::LongShift => &self.long_shift,
        }
    }

    /// Adds `record` to the bucket for `kind`.
    ///
    /// Returns false when an identical record was already present.
    pub fn insert(&mut self, kind: AnomalyKind, record: TimecardRecord) -> bool {
        let bucket = match kind {
            AnomalyKind::LongSpan => &mut self.long_span,
            AnomalyKind::ShortGap => &mut self.short_gap,
            AnomalyKind::LongShift => &mut self.long_shift,
        };
        bucket.insert(record)
    }

    /// Returns true if no bucket holds any record.
    pub fn is_clean(&self) -> bool {
        AnomalyKind::ALL
            .iter()
            .all(|&kind| self.bucket(kind).is_empty())
    }

    /// Returns the number of distinct records flagged in at least one bucket.
    pub fn total_flagged(&self) -> usize {
        let all: BTreeSet<&TimecardRecord> = AnomalyKind::ALL
            .iter()
            .flat_map(|&kind| self.bucket(kind).iter())
            .collect();
        all.len()
    }
}
