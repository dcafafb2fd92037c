//! Report store.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use civicstorm_core::{ReportId, ReportStatus};

use super::{RepositoryError, fixtures};
use crate::models::{Report, ReportFilter};

/// In-memory ordered collection of reports.
///
/// New reports go to the front, so iteration yields the most recently
/// submitted report first. Reports are never removed.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: VecDeque<Report>,
}

impl ReportStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: VecDeque::new(),
        }
    }

    /// Create a store holding the fixture reports.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            reports: fixtures::reports().into(),
        }
    }

    /// Insert a report at the head of the collection.
    pub fn push_front(&mut self, report: Report) {
        self.reports.push_front(report);
    }

    #[must_use]
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|r| &r.id == id)
    }

    /// Set a report's status and stamp `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no report has this ID.
    pub fn update_status(
        &mut self,
        id: &ReportId,
        status: ReportStatus,
        now: DateTime<Utc>,
    ) -> Result<&Report, RepositoryError> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("report {id}")))?;

        report.status = status;
        report.updated_at = now;
        Ok(report)
    }

    /// All reports, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    /// Reports matching `filter`, preserving store order.
    pub fn filter<'a>(&'a self, filter: &ReportFilter) -> impl Iterator<Item = &'a Report> {
        self.reports.iter().filter(move |r| filter.matches(r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use civicstorm_core::ReportKind;

    use super::*;

    #[test]
    fn test_seeded_has_five_reports() {
        assert_eq!(ReportStore::seeded().len(), 5);
        assert!(ReportStore::new().is_empty());
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut store = ReportStore::seeded();
        let mut report = store.get(&ReportId::new("report-4")).unwrap().clone();
        report.id = ReportId::new("report-6");
        store.push_front(report);

        let ids: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["report-6", "report-1", "report-2", "report-3", "report-4", "report-5"]
        );
    }

    #[test]
    fn test_update_status_touches_only_target() {
        let mut store = ReportStore::seeded();
        let before: Vec<Report> = store.iter().cloned().collect();
        let now = Utc::now();

        let updated = store
            .update_status(&ReportId::new("report-1"), ReportStatus::Resolved, now)
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Resolved);
        assert_eq!(updated.updated_at, now);

        for (old, new) in before.iter().zip(store.iter()) {
            if new.id.as_str() == "report-1" {
                assert_eq!(new.created_at, old.created_at);
                assert_eq!(new.title, old.title);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_update_status_unknown_id() {
        let mut store = ReportStore::seeded();
        let err = store
            .update_status(&ReportId::new("report-404"), ReportStatus::Resolved, Utc::now())
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn test_filter_preserves_order() {
        let store = ReportStore::seeded();
        let filter = ReportFilter::default().with_kind(ReportKind::Civic);
        let ids: Vec<&str> = store.filter(&filter).map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["report-1", "report-3", "report-4"]);
    }
}
