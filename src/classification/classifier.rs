//! Anomaly classification over loaded timecard records.

use tracing::{debug, info};

use crate::error::AuditResult;
use crate::models::{
    AnomalyKind, AnomalyReport, ClassificationStep, ClassificationWarning, TimecardRecord,
};

use super::rules::{is_long_shift, is_long_span, is_short_gap};
use super::timing::ShiftTiming;

/// Sorts records into the long-span, short-gap and long-shift buckets.
///
/// Each record is checked independently:
///
/// 1. Records with an empty time-in or time-out are skipped.
/// 2. Both timestamps are parsed with the fixed format.
/// 3. `span = time_out - time_in` and `gap = time_in - time_out`.
/// 4. The record goes into every bucket whose rule it meets:
///    - long span: `span >= 7 days`
///    - short gap: `1 hour < |gap| < 10 hours`
///    - long shift: `span > 14 hours`
///
/// Buckets deduplicate on all nine record fields, so repeated identical rows
/// appear once. Each collapse is noted as a `duplicate_record` warning in the
/// trace.
///
/// # Errors
///
/// Returns [`AuditError::DateFormat`] for the first unparseable timestamp.
/// No partial report is returned.
///
/// # Example
///
/// ```
/// use timecard_audit::classification::classify;
/// use timecard_audit::ingest::parse_row;
/// use timecard_audit::models::AnomalyKind;
///
/// let record = parse_row(
///     1,
///     "P1,Active,01/01/2024 08:00 AM,01/08/2024 08:00 AM,40,01/01/2024,01/14/2024,Jane Doe,F001",
/// )?;
/// let report = classify(&[record])?;
///
/// assert_eq!(report.bucket(AnomalyKind::LongSpan).len(), 1);
/// assert!(report.bucket(AnomalyKind::ShortGap).is_empty());
/// // 168 hours is also over the 14 hour shift limit.
/// assert_eq!(report.bucket(AnomalyKind::LongShift).len(), 1);
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
///
/// [`AuditError::DateFormat`]: crate::error::AuditError::DateFormat
pub fn classify(records: &[TimecardRecord]) -> AuditResult<AnomalyReport> {
    let mut report = AnomalyReport::new();
    let mut step_number: u32 = 0;

    for (index, record) in records.iter().enumerate() {
        let position = index + 1;

        if !record.has_timestamps() {
            report.records_skipped += 1;
            continue;
        }

        let timing = ShiftTiming::from_record(position, record)?;
        report.records_examined += 1;

        for kind in matched_kinds(&timing) {
            step_number += 1;
            report.trace.steps.push(ClassificationStep {
                step_number,
                record: position,
                kind,
                employee_name: record.employee_name.clone(),
                position_id: record.position_id.clone(),
                span_hours: timing.span_hours(),
                gap_hours: timing.gap_hours(),
                reasoning: reasoning(kind, &timing),
            });

            debug!(
                record = position,
                employee = %record.employee_name,
                rule = kind.rule_id(),
                "Flagged timecard record"
            );

            if !report.insert(kind, record.clone()) {
                report.trace.warnings.push(ClassificationWarning {
                    code: "duplicate_record".to_string(),
                    message: format!(
                        "Record {} is identical to an earlier {} record and is reported once",
                        position,
                        kind.rule_id()
                    ),
                });
            }
        }
    }

    info!(
        examined = report.records_examined,
        skipped = report.records_skipped,
        long_span = report.bucket(AnomalyKind::LongSpan).len(),
        short_gap = report.bucket(AnomalyKind::ShortGap).len(),
        long_shift = report.bucket(AnomalyKind::LongShift).len(),
        "Classification complete"
    );

    Ok(report)
}

fn matched_kinds(timing: &ShiftTiming) -> Vec<AnomalyKind> {
    let mut kinds = Vec::new();
    if is_long_span(timing.span) {
        kinds.push(AnomalyKind::LongSpan);
    }
    if is_short_gap(timing.gap) {
        kinds.push(AnomalyKind::ShortGap);
    }
    if is_long_shift(timing.span) {
        kinds.push(AnomalyKind::LongShift);
    }
    kinds
}

fn reasoning(kind: AnomalyKind, timing: &ShiftTiming) -> String {
    match kind {
        AnomalyKind::LongSpan => format!(
            "{} hours from time-in to time-out meets the 168 hour (7 day) threshold",
            timing.span_hours()
        ),
        AnomalyKind::ShortGap => format!(
            "{} hours between time-in and time-out is between 1 and 10 hours",
            timing.gap_hours().abs()
        ),
        AnomalyKind::LongShift => format!(
            "{} hour shift exceeds the 14 hour threshold",
            timing.span_hours()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;
    use crate::ingest::parse_row;
    use crate::models::SENTINEL_TIMESTAMP;
    use rust_decimal::Decimal;

    fn make_record(name: &str, time_in: &str, time_out: &str) -> TimecardRecord {
        TimecardRecord {
            position_id: format!("POS-{}", name),
            position_status: "Active".to_string(),
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
            timecard_hours: "0".to_string(),
            pay_cycle_start_date: "01/01/2024".to_string(),
            pay_cycle_end_date: "01/14/2024".to_string(),
            employee_name: name.to_string(),
            file_number: "F000".to_string(),
        }
    }

    fn kinds_for(record: TimecardRecord) -> Vec<AnomalyKind> {
        let report = classify(&[record]).unwrap();
        AnomalyKind::ALL
            .into_iter()
            .filter(|&kind| !report.bucket(kind).is_empty())
            .collect()
    }

    #[test]
    fn test_exact_seven_day_span_is_long_span() {
        let record = parse_row(
            1,
            "P1,Active,01/01/2024 08:00 AM,01/08/2024 08:00 AM,40,01/01/2024,01/14/2024,Jane Doe,F001",
        )
        .unwrap();

        let report = classify(&[record.clone()]).unwrap();
        assert!(report.bucket(AnomalyKind::LongSpan).contains(&record));
        assert!(report.bucket(AnomalyKind::ShortGap).is_empty());
        // 168 hours is also over the 14 hour shift limit.
        assert!(report.bucket(AnomalyKind::LongShift).contains(&record));
    }

    #[test]
    fn test_two_and_a_half_hour_shift_is_short_gap_only() {
        let record = parse_row(
            1,
            "P2,Active,01/01/2024 08:00 AM,01/01/2024 10:30 AM,2.5,01/01/2024,01/14/2024,John Roe,F002",
        )
        .unwrap();

        assert_eq!(kinds_for(record), vec![AnomalyKind::ShortGap]);
    }

    #[test]
    fn test_empty_timestamps_fall_in_no_bucket() {
        let record =
            parse_row(1, "P3,Active,,,0,01/01/2024,01/14/2024,Ann Poe,F003").unwrap();

        let report = classify(&[record]).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records_examined, 1);
        assert_eq!(report.records_skipped, 0);
    }

    #[test]
    fn test_sentinel_behaves_like_empty_field() {
        let from_empty = parse_row(
            1,
            "P4,Active,,01/01/1970 05:00 AM,0,01/01/2024,01/14/2024,Ann Poe,F004",
        )
        .unwrap();
        let from_sentinel = parse_row(
            1,
            &format!(
                "P4,Active,{},01/01/1970 05:00 AM,0,01/01/2024,01/14/2024,Ann Poe,F004",
                SENTINEL_TIMESTAMP
            ),
        )
        .unwrap();

        assert_eq!(from_empty, from_sentinel);
        assert_eq!(kinds_for(from_empty), vec![AnomalyKind::ShortGap]);
    }

    #[test]
    fn test_directly_built_record_without_timestamps_is_skipped() {
        let record = make_record("Ann Poe", "", "01/01/2024 08:00 AM");

        let report = classify(&[record]).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records_skipped, 1);
        assert_eq!(report.records_examined, 0);
    }

    #[test]
    fn test_fourteen_hour_shift_is_not_long_shift() {
        let record = make_record("Max Moe", "01/01/2024 06:00 AM", "01/01/2024 08:00 PM");
        assert!(kinds_for(record).is_empty());
    }

    #[test]
    fn test_fifteen_hour_shift_is_long_shift() {
        let record = make_record("Max Moe", "01/01/2024 06:00 AM", "01/01/2024 09:00 PM");
        assert_eq!(kinds_for(record), vec![AnomalyKind::LongShift]);
    }

    #[test]
    fn test_gap_bounds_are_excluded() {
        let one_hour = make_record("A", "01/01/2024 08:00 AM", "01/01/2024 09:00 AM");
        let ten_hours = make_record("B", "01/01/2024 08:00 AM", "01/01/2024 06:00 PM");
        assert!(kinds_for(one_hour).is_empty());
        assert!(kinds_for(ten_hours).is_empty());
    }

    #[test]
    fn test_reversed_timestamps_count_as_short_gap() {
        // |gap| is used, so time-out before time-in still qualifies.
        let record = make_record("Rev", "01/01/2024 05:00 PM", "01/01/2024 12:00 PM");
        assert_eq!(kinds_for(record), vec![AnomalyKind::ShortGap]);
    }

    #[test]
    fn test_eight_day_span_is_long_span_and_long_shift() {
        let record = make_record("Long", "01/01/2024 08:00 AM", "01/09/2024 08:00 AM");
        assert_eq!(
            kinds_for(record),
            vec![AnomalyKind::LongSpan, AnomalyKind::LongShift]
        );
    }

    #[test]
    fn test_identical_rows_collapse_with_warning() {
        let record = make_record("Dup", "01/01/2024 08:00 AM", "01/01/2024 11:00 AM");
        let report = classify(&[record.clone(), record]).unwrap();

        assert_eq!(report.bucket(AnomalyKind::ShortGap).len(), 1);
        assert_eq!(report.records_examined, 2);
        assert_eq!(report.trace.steps.len(), 2);
        assert_eq!(report.trace.warnings.len(), 1);
        assert_eq!(report.trace.warnings[0].code, "duplicate_record");
    }

    #[test]
    fn test_trace_records_each_match() {
        let record = make_record("Long", "01/01/2024 08:00 AM", "01/09/2024 08:00 AM");
        let report = classify(&[record]).unwrap();

        let steps = &report.trace.steps;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step_number, 1);
        assert_eq!(steps[0].kind, AnomalyKind::LongSpan);
        assert_eq!(steps[1].step_number, 2);
        assert_eq!(steps[1].kind, AnomalyKind::LongShift);
        assert_eq!(steps[0].span_hours, Decimal::new(192, 0));
        assert_eq!(steps[0].gap_hours, Decimal::new(-192, 0));
        assert_eq!(steps[0].record, 1);
    }

    #[test]
    fn test_bad_timestamp_aborts_the_run() {
        let good = make_record("Good", "01/01/2024 08:00 AM", "01/01/2024 11:00 AM");
        let bad = make_record("Bad", "01/01/2024 08:00 AM", "2024-01-01T11:00");

        match classify(&[good, bad]) {
            Err(AuditError::DateFormat { record, field, .. }) => {
                assert_eq!(record, 2);
                assert_eq!(field, "time_out");
            }
            other => panic!("Expected DateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_gives_clean_report() {
        let report = classify(&[]).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records_examined, 0);
    }
}
