//! Report status lifecycle.

use serde::{Deserialize, Serialize};

/// Error returned when a status string is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid report status: {0} (expected pending, in_progress or resolved)")]
pub struct StatusParseError(pub String);

/// Triage status of a report.
///
/// New reports always start as [`ReportStatus::Pending`]. Status only changes
/// through an explicit administrator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Submitted, not yet looked at.
    #[default]
    Pending,
    /// Acknowledged and being worked on.
    InProgress,
    /// Fixed or otherwise closed.
    Resolved,
}

impl ReportStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    /// Wire value (`pending`, `in_progress`, `resolved`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(StatusParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }

    #[test]
    fn test_parse_accepts_variants() {
        assert_eq!("in_progress".parse::<ReportStatus>().unwrap(), ReportStatus::InProgress);
        assert_eq!("in-progress".parse::<ReportStatus>().unwrap(), ReportStatus::InProgress);
        assert_eq!("In Progress".parse::<ReportStatus>().unwrap(), ReportStatus::InProgress);
        assert_eq!("RESOLVED".parse::<ReportStatus>().unwrap(), ReportStatus::Resolved);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("closed".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_display_matches_wire_value() {
        for status in ReportStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
