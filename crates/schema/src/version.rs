//! Schema version tags.
//!
//! Documents do not describe their own version. Callers always state the
//! version explicitly, and the tag is parsed into a closed enumeration so
//! that an unknown version is rejected at the boundary rather than deep in
//! a lens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// A released version of the power curve schema.
///
/// Variants are declared in release order, so the derived `Ord` matches
/// the version history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[serde(rename = "alpha-3")]
    Alpha3,
    #[serde(rename = "alpha-4")]
    Alpha4,
    #[serde(rename = "alpha-5")]
    Alpha5,
    #[serde(rename = "alpha-6")]
    Alpha6,
}

impl SchemaVersion {
    /// The version documents are migrated to by default.
    pub const CURRENT: SchemaVersion = SchemaVersion::Alpha6;

    /// Every known version, oldest first.
    pub const ALL: [SchemaVersion; 4] = [
        SchemaVersion::Alpha3,
        SchemaVersion::Alpha4,
        SchemaVersion::Alpha5,
        SchemaVersion::Alpha6,
    ];

    /// The bit-exact tag used on the command line and in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVersion::Alpha3 => "alpha-3",
            SchemaVersion::Alpha4 => "alpha-4",
            SchemaVersion::Alpha5 => "alpha-5",
            SchemaVersion::Alpha6 => "alpha-6",
        }
    }

    /// The version released directly after this one, if any.
    pub fn next(self) -> Option<SchemaVersion> {
        match self {
            SchemaVersion::Alpha3 => Some(SchemaVersion::Alpha4),
            SchemaVersion::Alpha4 => Some(SchemaVersion::Alpha5),
            SchemaVersion::Alpha5 => Some(SchemaVersion::Alpha6),
            SchemaVersion::Alpha6 => None,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownVersion(s.to_string()))
    }
}
