//! Report domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use civicstorm_core::{ReportCategory, ReportId, ReportKind, ReportStatus, UserId};

/// Minimum title length, in characters.
pub const MIN_TITLE_LENGTH: usize = 5;

/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// A submitted civic issue or road hazard.
///
/// Reports are created only through the report session, which forces the
/// initial status and timestamps. Afterwards only `status` and `updated_at`
/// ever change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    /// Kind and kind-specific category (`type` / `reportType` on the wire).
    #[serde(flatten)]
    pub category: ReportCategory,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Inline image data or URL. Never uploaded anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Reporting user.
    pub user_id: UserId,
}

impl Report {
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        self.category.kind()
    }
}

/// Caller-supplied fields for a new report.
///
/// Everything else (ID, status, timestamps, owner) is filled in by the
/// report session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub category: ReportCategory,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
}

impl NewReport {
    /// Check the submission rules for free-text fields.
    ///
    /// # Errors
    ///
    /// Returns every failed rule at once so a form can show them together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.title.trim().chars().count() < MIN_TITLE_LENGTH {
            errors.push(ValidationError::new(
                "title",
                format!("Title must be at least {MIN_TITLE_LENGTH} characters"),
            ));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LENGTH {
            errors.push(ValidationError::new(
                "description",
                format!("Description must be at least {MIN_DESCRIPTION_LENGTH} characters"),
            ));
        }
        if self.location.trim().is_empty() {
            errors.push(ValidationError::new("location", "Location is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All failed field rules for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Whether `field` has at least one error.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Query criteria for reports. Absent criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub kind: Option<ReportKind>,
    pub status: Option<ReportStatus>,
    /// Case-insensitive substring matched against title, description or
    /// location.
    pub search_term: Option<String>,
}

impl ReportFilter {
    #[must_use]
    pub const fn with_kind(mut self, kind: ReportKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Whether `report` satisfies every provided criterion.
    #[must_use]
    pub fn matches(&self, report: &Report) -> bool {
        if self.kind.is_some_and(|kind| report.kind() != kind) {
            return false;
        }

        if self.status.is_some_and(|status| report.status != status) {
            return false;
        }

        match self.search_term.as_deref().map(str::to_lowercase) {
            Some(term) if !term.is_empty() => {
                report.title.to_lowercase().contains(&term)
                    || report.description.to_lowercase().contains(&term)
                    || report.location.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

/// Report counts for the triage dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub civic: usize,
    pub hazard: usize,
}

impl ReportStats {
    /// Tally a sequence of reports.
    pub fn tally<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        reports.into_iter().fold(Self::default(), |mut stats, report| {
            stats.total += 1;
            match report.status {
                ReportStatus::Pending => stats.pending += 1,
                ReportStatus::InProgress => stats.in_progress += 1,
                ReportStatus::Resolved => stats.resolved += 1,
            }
            match report.kind() {
                ReportKind::Civic => stats.civic += 1,
                ReportKind::Hazard => stats.hazard += 1,
            }
            stats
        })
    }

    /// Count for a single status.
    #[must_use]
    pub const fn count(&self, status: ReportStatus) -> usize {
        match status {
            ReportStatus::Pending => self.pending,
            ReportStatus::InProgress => self.in_progress,
            ReportStatus::Resolved => self.resolved,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use civicstorm_core::{HazardType, IssueType};

    use super::*;

    fn report(category: ReportCategory, status: ReportStatus) -> Report {
        let at = Utc.with_ymd_and_hms(2025, 4, 10, 10, 30, 0).unwrap();
        Report {
            id: ReportId::new("report-x"),
            category,
            title: "Flooded Underpass".to_owned(),
            description: "Water pools under the rail bridge after rain".to_owned(),
            location: "Riverside District".to_owned(),
            status,
            created_at: at,
            updated_at: at,
            image_url: None,
            user_id: UserId::new("user-1"),
        }
    }

    fn new_report(title: &str, description: &str, location: &str) -> NewReport {
        NewReport {
            category: ReportCategory::Civic(IssueType::Graffiti),
            title: title.to_owned(),
            description: description.to_owned(),
            location: location.to_owned(),
            image_url: None,
        }
    }

    #[test]
    fn test_validate_accepts_minimums() {
        assert!(new_report("Tags", "x", "Main Street").validate().is_err());
        assert!(new_report("Paint", "0123456789", "Main Street").validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = new_report("abc", "short", "   ").validate().unwrap_err();
        assert_eq!(errors.0.len(), 3);
        assert!(errors.has("title"));
        assert!(errors.has("description"));
        assert!(errors.has("location"));
    }

    #[test]
    fn test_filter_search_is_case_insensitive_over_three_fields() {
        let r = report(ReportCategory::Hazard(HazardType::Flooding), ReportStatus::Pending);
        assert!(ReportFilter::default().with_search("UNDERPASS").matches(&r));
        assert!(ReportFilter::default().with_search("rail bridge").matches(&r));
        assert!(ReportFilter::default().with_search("riverside").matches(&r));
        assert!(!ReportFilter::default().with_search("pothole").matches(&r));
    }

    #[test]
    fn test_filter_empty_search_matches_everything() {
        let r = report(ReportCategory::Civic(IssueType::Other), ReportStatus::Resolved);
        assert!(ReportFilter::default().with_search("").matches(&r));
        assert!(ReportFilter::default().matches(&r));
    }

    #[test]
    fn test_filter_criteria_are_anded() {
        let r = report(ReportCategory::Hazard(HazardType::Flooding), ReportStatus::Pending);
        let filter = ReportFilter::default()
            .with_kind(ReportKind::Hazard)
            .with_status(ReportStatus::Pending);
        assert!(filter.matches(&r));
        assert!(!filter.clone().with_status(ReportStatus::Resolved).matches(&r));
        assert!(!filter.with_kind(ReportKind::Civic).matches(&r));
    }

    #[test]
    fn test_serializes_type_and_report_type_as_siblings() {
        let r = report(ReportCategory::Hazard(HazardType::Flooding), ReportStatus::InProgress);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "hazard");
        assert_eq!(json["reportType"], "flooding");
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["userId"], "user-1");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_stats_tally() {
        let reports = [
            report(ReportCategory::Civic(IssueType::Pothole), ReportStatus::Pending),
            report(ReportCategory::Civic(IssueType::Garbage), ReportStatus::Resolved),
            report(ReportCategory::Hazard(HazardType::Accident), ReportStatus::Pending),
        ];
        let stats = ReportStats::tally(&reports);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(ReportStatus::Pending), 2);
        assert_eq!(stats.count(ReportStatus::InProgress), 0);
        assert_eq!(stats.civic, 2);
        assert_eq!(stats.hazard, 1);
    }
}
