//! Record shapes of schema version alpha-3.
//!
//! Only fields that a later version reshapes are typed. Everything else
//! rides along untouched in the flattened `extra` map of its parent.
//! The operating mode, parameter and document section records are shared
//! with alpha-4 and alpha-5, which did not change them.
//!
//! A typed optional field set to `null` reads as absent and is omitted when
//! the record is written back. Typed fields are written before the
//! flattened extras, in declaration order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::hub_heights::HubHeights;
use crate::table::Table;

/// Top-level alpha-3 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub turbine: Turbine,
    pub power_curves: PowerCurves,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turbine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_hub_heights: Option<HubHeights>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurves {
    pub operating_modes: Vec<Mode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One operating mode with its power and thrust tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub label: String,
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Overrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thrust_coefficient: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ct: Option<Table>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A table axis (`dimension` + `values`) or a fixed scalar (`value`).
///
/// `axis` is accepted as an alias of `dimension` so that a parameter
/// already written in the alpha-6 spelling is carried forward unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: String,
    #[serde(default, alias = "axis", skip_serializing_if = "Option::is_none")]
    pub dimension: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Mode-specific deviations from turbine-level defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_hub_heights: Option<HubHeights>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `document` provenance section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{term, value}` metadata fact with a capitalised term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(alias = "term_name")]
    pub term: String,
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
