//! Record shapes of schema version alpha-5.
//!
//! alpha-5 replaces mode-level hub height overrides with a grouped
//! turbine-level specification carrying `allowed_modes`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hub_heights::AvailableHubHeights;

pub use crate::alpha3::{
    DocumentSection, MetadataEntry, Mode, Overrides, Parameter, PowerCurves,
};

/// Top-level alpha-5 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub turbine: Turbine,
    pub power_curves: PowerCurves,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Turbine section shared by alpha-5 and alpha-6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turbine {
    pub power_reference_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_hub_heights: Option<AvailableHubHeights>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
