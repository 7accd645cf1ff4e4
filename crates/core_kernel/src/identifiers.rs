//! Strongly-typed identifiers for domain entities
//!
//! Catalog keys arrive as free-form strings (`"hamlet"`, `"as-like"`).
//! Wrapping them in newtypes keeps a play key from being confused with a
//! customer name or any other string field.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! define_key {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like key
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the underlying key
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

// Theater domain identifiers
define_key!(PlayId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_play_id_display() {
        let id = PlayId::new("hamlet");
        assert_eq!(id.to_string(), "hamlet");
    }

    #[test]
    fn test_play_id_parsing() {
        let parsed: PlayId = "as-like".parse().unwrap();
        assert_eq!(parsed, PlayId::from("as-like"));
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(PlayId::from("othello"), 1);
        assert_eq!(map.get("othello"), Some(&1));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayId::from("hamlet")).unwrap();
        assert_eq!(json, "\"hamlet\"");
    }
}
