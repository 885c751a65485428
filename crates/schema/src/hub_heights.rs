//! Hub height specifications.
//!
//! A hub height specification is a flat list of heights, a `{values}`
//! object or a `{min, max}` range. From alpha-5 the turbine-level value may
//! instead be an array of entries, each restricted to a set of operating
//! modes through `allowed_modes`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Explicit list of heights written as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightValues {
    pub values: Vec<Number>,
}

/// Inclusive height range. Either bound may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
}

/// An ungrouped hub height specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HubHeights {
    List(Vec<Number>),
    Values(HeightValues),
    Range(HeightRange),
}

/// `{values, allowed_modes}` entry of a grouped specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValuesEntry {
    pub values: Vec<Number>,
    pub allowed_modes: Vec<String>,
}

/// `{min, max, allowed_modes}` entry of a grouped specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    pub allowed_modes: Vec<String>,
}

/// One entry of a grouped hub height specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HubHeightEntry {
    Values(ValuesEntry),
    Range(RangeEntry),
}

impl HubHeightEntry {
    /// Labels of the operating modes this entry applies to.
    pub fn allowed_modes(&self) -> &[String] {
        match self {
            HubHeightEntry::Values(entry) => &entry.allowed_modes,
            HubHeightEntry::Range(entry) => &entry.allowed_modes,
        }
    }
}

/// Turbine-level hub heights from alpha-5 onwards.
///
/// The grouped form is only produced when at least one operating mode
/// overrides the turbine default, so documents of the same version may
/// carry either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvailableHubHeights {
    Grouped(Vec<HubHeightEntry>),
    Ungrouped(HubHeights),
}

impl AvailableHubHeights {
    /// Resolve the entry that applies to `mode`.
    ///
    /// The ungrouped form applies to every mode. Returns `None` when a
    /// grouped specification does not list the mode.
    pub fn for_mode(&self, mode: &str) -> Option<HubHeightsRef<'_>> {
        match self {
            AvailableHubHeights::Ungrouped(heights) => Some(HubHeightsRef::Ungrouped(heights)),
            AvailableHubHeights::Grouped(entries) => entries
                .iter()
                .find(|e| e.allowed_modes().iter().any(|m| m == mode))
                .map(HubHeightsRef::Entry),
        }
    }
}

/// Borrowed result of [`AvailableHubHeights::for_mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HubHeightsRef<'a> {
    Ungrouped(&'a HubHeights),
    Entry(&'a HubHeightEntry),
}
