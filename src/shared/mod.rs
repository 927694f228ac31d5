//! Shared newtypes and structures used across domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the Delivery API sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Codename ────────────────────────────────────────────────────────────────

/// Newtype for Delivery API codenames (e.g. `"on_roasts"`).
///
/// A codename is the stable human-readable identifier of a content item,
/// content type, or element, used in request path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codename(String);

impl Codename {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Codename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Codename {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Codename {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Codename {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Codename(s.to_string()))
    }
}

impl Serialize for Codename {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Codename {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Codename)
    }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Paging metadata attached to listing responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
    pub count: u64,
    /// URL of the next page; empty or absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}
