//! Strongly-typed ID wrappers
//!
//! Ids are UUID v4 values serialized as plain strings, so persisted slots
//! stay readable by anything that treats ids as opaque tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// The 8 hex characters shown in listings
            pub fn short(&self) -> String {
                self.0.simple().to_string()[..8].to_string()
            }

            /// Whether `fragment` (with or without the display prefix)
            /// identifies this id: a full UUID or a leading fragment of it.
            pub fn matches(&self, fragment: &str) -> bool {
                let fragment = fragment.trim();
                let fragment = fragment.strip_prefix($display_prefix).unwrap_or(fragment);
                if fragment.is_empty() {
                    return false;
                }
                let full = self.0.to_string();
                full.eq_ignore_ascii_case(fragment)
                    || full.starts_with(&fragment.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = ExpenseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = ExpenseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("550e8400"));
        assert!(id.matches("exp-550e8400"));
        assert!(id.matches("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!id.matches("deadbeef"));
        assert!(!id.matches(""));
    }
}
