//! Report session.
//!
//! Create, query and triage reports, scoped by the signed-in user. Admin
//! gating for [`ReportSession::get_all_reports`] and
//! [`ReportSession::update_report_status`] is the caller's job.

mod error;

pub use error::ReportError;

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use civicstorm_core::{ReportId, ReportStatus};

use crate::db::ReportStore;
use crate::models::{CurrentUser, NewReport, Report, ReportFilter, ReportStats};
use crate::services::notify::{Notification, Notifier};

/// Report operations over the report store.
pub struct ReportSession {
    reports: ReportStore,
    current: CurrentUser,
    notifier: Arc<dyn Notifier>,
}

impl ReportSession {
    #[must_use]
    pub fn new(reports: ReportStore, current: CurrentUser, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            reports,
            current,
            notifier,
        }
    }

    /// Submit a report as the signed-in user.
    ///
    /// The report starts as `pending` with `created_at == updated_at` and is
    /// placed at the head of the collection.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Unauthenticated` if nobody is signed in and
    /// `ReportError::Invalid` if a field rule fails. The store is unchanged
    /// in both cases.
    #[instrument(skip(self, input), fields(kind = %input.category.kind()))]
    pub fn add_report(&mut self, input: NewReport) -> Result<Report, ReportError> {
        let Some(user) = self.current.get() else {
            self.notifier.notify(Notification::destructive(
                "Authentication Required",
                "You must be logged in to create a report",
            ));
            return Err(ReportError::Unauthenticated);
        };

        if let Err(errors) = input.validate() {
            self.notifier
                .notify(Notification::destructive("Invalid Report", errors.to_string()));
            return Err(errors.into());
        }

        let now = Utc::now();
        let report = Report {
            id: ReportId::generate(),
            category: input.category,
            title: input.title.trim().to_owned(),
            description: input.description.trim().to_owned(),
            location: input.location.trim().to_owned(),
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
            image_url: input.image_url,
            user_id: user.id,
        };
        self.reports.push_front(report.clone());

        info!(report_id = %report.id, user_id = %report.user_id, "report submitted");
        self.notifier.notify(Notification::info(
            "Report Submitted",
            "Your report has been successfully submitted",
        ));
        Ok(report)
    }

    /// Set a report's status and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NotFound` if no report has this ID.
    #[instrument(skip(self))]
    pub fn update_report_status(
        &mut self,
        id: &ReportId,
        status: ReportStatus,
    ) -> Result<Report, ReportError> {
        let report = match self.reports.update_status(id, status, Utc::now()) {
            Ok(report) => report.clone(),
            Err(e) => {
                info!(error = %e, "status update rejected");
                self.notifier.notify(Notification::destructive(
                    "Report Not Found",
                    format!("No report with id {id}"),
                ));
                return Err(ReportError::NotFound(id.clone()));
            }
        };

        info!(report_id = %report.id, status = %status, "report status updated");
        self.notifier.notify(Notification::info(
            "Status Updated",
            format!(
                "Report status has been updated to {}",
                status.as_str().replace('_', " ")
            ),
        ));
        Ok(report)
    }

    /// Reports submitted by the signed-in user, most recent first. Empty when
    /// signed out.
    pub fn get_user_reports(&self) -> impl Iterator<Item = &Report> {
        let user_id = self.current.get().map(|user| user.id);
        self.reports
            .iter()
            .filter(move |report| user_id.as_ref() == Some(&report.user_id))
    }

    /// Every report, most recent first.
    pub fn get_all_reports(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    #[must_use]
    pub fn get_report_by_id(&self, id: &ReportId) -> Option<&Report> {
        self.reports.get(id)
    }

    /// Reports matching every provided criterion, in store order.
    pub fn filter_reports<'a>(
        &'a self,
        criteria: &ReportFilter,
    ) -> impl Iterator<Item = &'a Report> {
        self.reports.filter(criteria)
    }

    /// Counts by status and kind across all reports.
    #[must_use]
    pub fn stats(&self) -> ReportStats {
        ReportStats::tally(self.reports.iter())
    }

    /// Counts over the signed-in user's reports only. All zero when signed out.
    #[must_use]
    pub fn user_stats(&self) -> ReportStats {
        ReportStats::tally(self.get_user_reports())
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
