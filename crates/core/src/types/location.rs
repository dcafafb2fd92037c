//! Known report locations.

/// Locations offered when filing a report.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "Downtown Area",
    "Central Park",
    "Main Street",
    "Oak Avenue",
    "Riverside District",
    "Industrial Park",
    "Shopping District",
    "School Zone",
    "City Hall",
];

/// Whether `location` is one of [`KNOWN_LOCATIONS`] (case-insensitive).
#[must_use]
pub fn is_known_location(location: &str) -> bool {
    let location = location.trim();
    KNOWN_LOCATIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location() {
        assert!(is_known_location("Main Street"));
        assert!(is_known_location("  city hall "));
        assert!(!is_known_location("Oak Avenue & Main Street"));
        assert!(!is_known_location(""));
    }
}
