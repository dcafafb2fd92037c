//! Report commands.
//!
//! # Usage
//!
//! ```bash
//! civicstorm reports mine
//! civicstorm reports show report-3
//! civicstorm reports search --type civic --query street
//! civicstorm reports submit --type hazard --category flooding \
//!     --title "Flooded underpass" --description "Knee-deep water after rain" \
//!     --location "Riverside District"
//!
//! # Your own counts, or every report's for admins
//! civicstorm reports stats
//!
//! # Admin only
//! civicstorm reports all
//! civicstorm reports set-status report-1 resolved
//! ```

use clap::Subcommand;

use civicstorm_client::models::{NewReport, Report, ReportFilter, ReportStats};
use civicstorm_client::state::AppState;
use civicstorm_core::{
    KNOWN_LOCATIONS, ReportCategory, ReportId, ReportKind, ReportStatus, is_known_location,
};

use super::{require_admin, require_user};
use crate::error::{AppError, Result};
use crate::output::Output;

#[derive(Subcommand)]
pub enum ReportsAction {
    /// List your own reports
    Mine,
    /// List every report (admin)
    All,
    /// Show one report
    Show {
        /// Report ID
        id: String,
    },
    /// Filter reports by type, status and free text
    Search {
        /// `civic` or `hazard`
        #[arg(long = "type")]
        kind: Option<String>,

        /// `pending`, `in_progress` or `resolved`
        #[arg(long)]
        status: Option<String>,

        /// Matched against title, description and location
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Report counts by status and type (all reports for admins)
    Stats,
    /// Submit a new report
    Submit {
        /// `civic` or `hazard`
        #[arg(long = "type", default_value = "civic")]
        kind: String,

        /// Category for the type, e.g. `pothole` or `dangerous_turn`
        #[arg(long)]
        category: String,

        /// At least 5 characters
        #[arg(long)]
        title: String,

        /// At least 10 characters
        #[arg(long)]
        description: String,

        /// One of the known locations
        #[arg(long)]
        location: String,

        /// Inline image data or URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Change a report's status (admin)
    SetStatus {
        /// Report ID
        id: String,

        /// `pending`, `in_progress` or `resolved`
        status: String,
    },
}

pub fn run(state: &mut AppState, out: &Output, action: ReportsAction) -> Result<()> {
    match action {
        ReportsAction::Mine => {
            require_user(state)?;
            out.reports(state.reports().get_user_reports())
        }
        ReportsAction::All => {
            require_admin(state, "listing all reports")?;
            out.reports(state.reports().get_all_reports())
        }
        ReportsAction::Show { id } => {
            require_user(state)?;
            let id = ReportId::new(id);
            let report = state
                .reports()
                .get_report_by_id(&id)
                .ok_or(AppError::NotFound(id))?;
            out.report(report)
        }
        ReportsAction::Search {
            kind,
            status,
            query,
        } => {
            let matches = search(state, kind.as_deref(), status.as_deref(), query)?;
            out.reports(matches.into_iter())
        }
        ReportsAction::Stats => out.stats(&stats(state)?),
        ReportsAction::Submit {
            kind,
            category,
            title,
            description,
            location,
            image_url,
        } => {
            let kind: ReportKind = kind.parse()?;
            let category = ReportCategory::parse(kind, &category)?;
            if !is_known_location(&location) {
                return Err(AppError::BadRequest(format!(
                    "unknown location {location:?}; choose one of: {}",
                    KNOWN_LOCATIONS.join(", ")
                )));
            }

            let report = state.reports_mut().add_report(NewReport {
                category,
                title,
                description,
                location,
                image_url,
            })?;
            out.report(&report)
        }
        ReportsAction::SetStatus { id, status } => {
            require_admin(state, "changing report status")?;
            let status: ReportStatus = status.parse()?;
            let report = state
                .reports_mut()
                .update_report_status(&ReportId::new(id), status)?;
            out.report(&report)
        }
    }
}

/// Admins count every report, everyone else only their own.
fn stats(state: &AppState) -> Result<ReportStats> {
    let user = require_user(state)?;
    Ok(if user.is_admin {
        state.reports().stats()
    } else {
        state.reports().user_stats()
    })
}

/// Admins search every report, everyone else only their own.
fn search<'a>(
    state: &'a AppState,
    kind: Option<&str>,
    status: Option<&str>,
    query: Option<String>,
) -> Result<Vec<&'a Report>> {
    let user = require_user(state)?;
    let filter = ReportFilter {
        kind: kind.map(str::parse::<ReportKind>).transpose()?,
        status: status.map(str::parse::<ReportStatus>).transpose()?,
        search_term: query,
    };

    Ok(state
        .reports()
        .filter_reports(&filter)
        .filter(|report| user.is_admin || report.user_id == user.id)
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use secrecy::SecretString;

    use civicstorm_client::db::{ReportStore, UserStore};
    use civicstorm_client::services::{DemoPasswordVerifier, NotificationLog};
    use civicstorm_client::storage::MemoryStorage;

    use super::*;

    fn state() -> AppState {
        AppState::new(
            UserStore::seeded(),
            ReportStore::seeded(),
            Arc::new(MemoryStorage::new()),
            DemoPasswordVerifier::new(SecretString::from("password"), Duration::ZERO),
            Arc::new(NotificationLog::new()),
        )
    }

    async fn signed_in(email: &str) -> AppState {
        let mut state = state();
        state
            .auth_mut()
            .login(email, &SecretString::from("password"))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_member_cannot_use_admin_commands() {
        let mut state = signed_in("jane.smith@example.com").await;
        let out = Output::new(true);

        let err = run(&mut state, &out, ReportsAction::All).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let err = run(
            &mut state,
            &out,
            ReportsAction::SetStatus {
                id: "report-1".to_owned(),
                status: "resolved".to_owned(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        let report = state.reports().get_report_by_id(&ReportId::new("report-1")).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[test]
    fn test_signed_out_is_unauthorized() {
        let mut state = state();
        let out = Output::new(true);

        for action in [ReportsAction::Mine, ReportsAction::All, ReportsAction::Stats] {
            assert!(matches!(
                run(&mut state, &out, action),
                Err(AppError::Unauthorized)
            ));
        }
        assert!(matches!(
            search(&state, None, None, None),
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_member_search_sees_only_own_reports() {
        let state = signed_in("jane.smith@example.com").await;

        let all = search(&state, None, None, None).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|r| r.user_id.as_str() == "user-1"));

        // report-4 belongs to the admin and matches this term.
        let streetlight = search(&state, None, None, Some("streetlight".to_owned())).unwrap();
        assert!(streetlight.is_empty());
    }

    #[tokio::test]
    async fn test_admin_search_sees_every_report() {
        let state = signed_in("admin@civicstorm.com").await;
        let ids: Vec<&str> = search(&state, None, None, Some("streetlight".to_owned()))
            .unwrap()
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["report-4"]);
    }

    #[tokio::test]
    async fn test_stats_scoped_by_role() {
        let member = signed_in("jane.smith@example.com").await;
        let counts = stats(&member).unwrap();
        assert_eq!(counts.total, 4);
        assert_eq!(counts.resolved, 1);

        let admin = signed_in("admin@civicstorm.com").await;
        assert_eq!(stats(&admin).unwrap().total, 5);
    }
}
