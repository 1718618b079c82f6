//! Plain text report rendering.

use crate::models::{AnomalyKind, AnomalyReport};

/// Renders the three report sections in fixed order.
///
/// Each section is its heading followed by a colon, then one
/// `Employee: <name>, Position: <position>` line per record in the bucket.
/// Sections are separated by a blank line.
///
/// # Example
///
/// ```
/// use timecard_audit::models::AnomalyReport;
/// use timecard_audit::report::render_text;
///
/// let text = render_text(&AnomalyReport::new());
/// assert!(text.starts_with("Employees who have worked for 7 consecutive days:\n"));
/// ```
pub fn render_text(report: &AnomalyReport) -> String {
    let mut out = String::new();

    for (index, kind) in AnomalyKind::ALL.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}:\n", kind.heading()));
        for record in report.bucket(kind) {
            out.push_str(&format!(
                "Employee: {}, Position: {}\n",
                record.employee_name, record.position_id
            ));
        }
    }

    out
}
