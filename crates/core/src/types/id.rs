//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are prefixed strings (`user-1`, `report-0190…`). Fixture data uses
//! short numeric suffixes, freshly generated IDs use a time-ordered UUID so
//! that newer entities sort after older ones.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `generate()`
/// - `From<&str>`, `From<String>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use civicstorm_core::define_id;
/// define_id!(WidgetId, "widget");
/// define_id!(GadgetId, "gadget");
///
/// let widget_id = WidgetId::new("widget-1");
/// let gadget_id = GadgetId::generate();
///
/// assert!(gadget_id.as_str().starts_with("gadget-"));
/// // These are different types, so this won't compile:
/// // let _: WidgetId = gadget_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix shared by every ID of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Wrap an existing ID value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh, time-ordered ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, ::uuid::Uuid::now_v7()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "user");
define_id!(ReportId, "report");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        assert!(UserId::generate().as_str().starts_with("user-"));
        assert!(ReportId::generate().as_str().starts_with("report-"));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ReportId::generate();
        let b = ReportId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_ids_are_time_ordered() {
        let first = ReportId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ReportId::generate();
        assert!(first < second);
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::new("user-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user-1\"");

        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportId::from("report-3").to_string(), "report-3");
    }
}
