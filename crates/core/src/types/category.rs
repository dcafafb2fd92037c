//! Report kinds and their per-kind categories.
//!
//! A report is either a civic issue or a road hazard, and each kind has its
//! own closed set of categories. [`ReportCategory`] pairs the two so that a
//! civic report can never carry a hazard category.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing kinds and categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The kind is neither `civic` nor `hazard`.
    #[error("invalid report type: {0} (expected civic or hazard)")]
    UnknownKind(String),
    /// The category does not belong to the given kind.
    #[error("{category} is not a valid {kind} category")]
    UnknownCategory {
        /// Kind the category was checked against.
        kind: ReportKind,
        /// Rejected category value.
        category: String,
    },
}

/// Top-level report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Municipal upkeep issue (trash, potholes, graffiti).
    Civic,
    /// Road-safety hazard.
    Hazard,
}

impl ReportKind {
    /// Wire value (`civic` or `hazard`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Civic => "civic",
            Self::Hazard => "hazard",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Civic => "Civic Issue",
            Self::Hazard => "Road Hazard",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civic" => Ok(Self::Civic),
            "hazard" => Ok(Self::Hazard),
            _ => Err(CategoryError::UnknownKind(s.to_owned())),
        }
    }
}

/// Civic issue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Garbage,
    Pothole,
    BrokenStreetlight,
    Graffiti,
    Other,
}

impl IssueType {
    pub const ALL: [Self; 5] = [
        Self::Garbage,
        Self::Pothole,
        Self::BrokenStreetlight,
        Self::Graffiti,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Garbage => "garbage",
            Self::Pothole => "pothole",
            Self::BrokenStreetlight => "broken_streetlight",
            Self::Graffiti => "graffiti",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Garbage => "Trash/Garbage Issue",
            Self::Pothole => "Pothole",
            Self::BrokenStreetlight => "Broken Streetlight",
            Self::Graffiti => "Graffiti",
            Self::Other => "Other Issue",
        }
    }
}

/// Road hazard categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardType {
    Accident,
    DangerousTurn,
    NoStreetlight,
    Flooding,
    Construction,
    Other,
}

impl HazardType {
    pub const ALL: [Self; 6] = [
        Self::Accident,
        Self::DangerousTurn,
        Self::NoStreetlight,
        Self::Flooding,
        Self::Construction,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accident => "accident",
            Self::DangerousTurn => "dangerous_turn",
            Self::NoStreetlight => "no_streetlight",
            Self::Flooding => "flooding",
            Self::Construction => "construction",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accident => "Accident Prone Area",
            Self::DangerousTurn => "Dangerous Turn",
            Self::NoStreetlight => "No Streetlight",
            Self::Flooding => "Flooding/Water Hazard",
            Self::Construction => "Construction Hazard",
            Self::Other => "Other Hazard",
        }
    }
}

/// A report's kind together with its kind-specific category.
///
/// Serializes as two sibling fields, e.g.
/// `{"type": "civic", "reportType": "pothole"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "reportType", rename_all = "lowercase")]
pub enum ReportCategory {
    Civic(IssueType),
    Hazard(HazardType),
}

impl ReportCategory {
    /// Parse a category string in the context of a kind.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::UnknownCategory` if `category` is not one of
    /// the values allowed for `kind`.
    pub fn parse(kind: ReportKind, category: &str) -> Result<Self, CategoryError> {
        let wanted = category.trim().to_ascii_lowercase();
        Self::all_for(kind)
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CategoryError::UnknownCategory {
                kind,
                category: category.to_owned(),
            })
    }

    /// All categories allowed for a kind.
    #[must_use]
    pub fn all_for(kind: ReportKind) -> Vec<Self> {
        match kind {
            ReportKind::Civic => IssueType::ALL.into_iter().map(Self::Civic).collect(),
            ReportKind::Hazard => HazardType::ALL.into_iter().map(Self::Hazard).collect(),
        }
    }

    #[must_use]
    pub const fn kind(self) -> ReportKind {
        match self {
            Self::Civic(_) => ReportKind::Civic,
            Self::Hazard(_) => ReportKind::Hazard,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Civic(t) => t.as_str(),
            Self::Hazard(t) => t.as_str(),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Civic(t) => t.label(),
            Self::Hazard(t) => t.label(),
        }
    }
}
