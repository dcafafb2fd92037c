//! Display formatting helpers for reports.

use chrono::{DateTime, Utc};

use crate::models::Report;

/// Format a timestamp as a short calendar date, e.g. `Apr 10, 2025`.
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// One-line summary: `[Road Hazard] Dangerous Intersection (In Progress)`.
#[must_use]
pub fn summary_line(report: &Report) -> String {
    format!(
        "[{}] {} ({})",
        report.kind().label(),
        report.title,
        report.status.label()
    )
}
