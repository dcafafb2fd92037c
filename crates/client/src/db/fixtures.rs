//! Seed data loaded into fresh stores.

use chrono::{DateTime, Utc};

use civicstorm_core::{Email, HazardType, IssueType, ReportCategory, ReportId, ReportStatus, UserId};

use crate::models::{Report, User};

/// Demo resident account.
pub const RESIDENT_EMAIL: &str = "jane.smith@example.com";

/// Demo administrator account.
pub const ADMIN_EMAIL: &str = "admin@civicstorm.com";

/// Seed accounts.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("user-1"),
            name: "Jane Smith".to_owned(),
            email: Email::from_static(RESIDENT_EMAIL),
            is_admin: false,
        },
        User {
            id: UserId::new("user-2"),
            name: "Admin User".to_owned(),
            email: Email::from_static(ADMIN_EMAIL),
            is_admin: true,
        },
    ]
}

/// Seed reports, in display order.
#[must_use]
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: ReportId::new("report-1"),
            category: ReportCategory::Civic(IssueType::Garbage),
            title: "Overflowing Trash Bin".to_owned(),
            description: "Trash bin near the park entrance is overflowing for the past 3 days"
                .to_owned(),
            location: "Central Park".to_owned(),
            status: ReportStatus::Pending,
            created_at: at("2025-04-10T10:30:00Z"),
            updated_at: at("2025-04-10T10:30:00Z"),
            image_url: None,
            user_id: UserId::new("user-1"),
        },
        Report {
            id: ReportId::new("report-2"),
            category: ReportCategory::Hazard(HazardType::DangerousTurn),
            title: "Dangerous Intersection".to_owned(),
            description: "Cars speeding through intersection with poor visibility".to_owned(),
            location: "Oak Avenue & Main Street".to_owned(),
            status: ReportStatus::InProgress,
            created_at: at("2025-04-09T08:15:00Z"),
            updated_at: at("2025-04-11T14:20:00Z"),
            image_url: None,
            user_id: UserId::new("user-1"),
        },
        Report {
            id: ReportId::new("report-3"),
            category: ReportCategory::Civic(IssueType::Pothole),
            title: "Large Pothole".to_owned(),
            description: "Deep pothole causing vehicle damage".to_owned(),
            location: "Main Street".to_owned(),
            status: ReportStatus::Resolved,
            created_at: at("2025-04-05T16:45:00Z"),
            updated_at: at("2025-04-12T11:30:00Z"),
            image_url: Some(
                "https://images.unsplash.com/photo-1626168121742-d3aab1f0e549?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3"
                    .to_owned(),
            ),
            user_id: UserId::new("user-1"),
        },
        Report {
            id: ReportId::new("report-4"),
            category: ReportCategory::Civic(IssueType::BrokenStreetlight),
            title: "Broken Streetlight".to_owned(),
            description: "Streetlight has been out for over a week causing safety concerns"
                .to_owned(),
            location: "Riverside District".to_owned(),
            status: ReportStatus::InProgress,
            created_at: at("2025-04-08T20:10:00Z"),
            updated_at: at("2025-04-11T09:25:00Z"),
            image_url: None,
            user_id: UserId::new("user-2"),
        },
        Report {
            id: ReportId::new("report-5"),
            category: ReportCategory::Hazard(HazardType::Other),
            title: "Missing Street Sign".to_owned(),
            description: "Stop sign is missing at the intersection".to_owned(),
            location: "School Zone".to_owned(),
            status: ReportStatus::Pending,
            created_at: at("2025-04-12T15:30:00Z"),
            updated_at: at("2025-04-12T15:30:00Z"),
            image_url: None,
            user_id: UserId::new("user-1"),
        },
    ]
}

fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_timestamps_parse() {
        for report in reports() {
            assert_ne!(report.created_at, DateTime::<Utc>::default(), "{}", report.id);
            assert!(report.updated_at >= report.created_at, "{}", report.id);
        }
    }

    #[test]
    fn test_fixture_reports_reference_fixture_users() {
        let users = users();
        for report in reports() {
            assert!(users.iter().any(|u| u.id == report.user_id));
        }
    }

    #[test]
    fn test_fixture_reports_pass_validation() {
        for report in reports() {
            let input = crate::models::NewReport {
                category: report.category,
                title: report.title,
                description: report.description,
                location: report.location,
                image_url: report.image_url,
            };
            assert!(input.validate().is_ok());
        }
    }
}
