//! Record shapes of schema version alpha-4.
//!
//! alpha-4 adds `turbine.power_reference_location` and retires the
//! `shear-coefficient` parameter label. Operating modes keep their
//! alpha-3 shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hub_heights::HubHeights;

pub use crate::alpha3::{
    DocumentSection, MetadataEntry, Mode, Overrides, Parameter, PowerCurves,
};

/// Default applied when upgrading documents that predate the field.
pub const DEFAULT_POWER_REFERENCE_LOCATION: &str = "low-voltage";

/// Top-level alpha-4 document.
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
    /// Electrical reference point the power curve is quoted at.
    pub power_reference_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_hub_heights: Option<HubHeights>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn power_reference_location_is_required() {
        let result: Result<Document, _> = serde_json::from_value(json!({
            "turbine": {},
            "power_curves": {"operating_modes": []}
        }));
        assert!(result.is_err());

        let doc: Document = serde_json::from_value(json!({
            "turbine": {"power_reference_location": "high-voltage"},
            "power_curves": {"operating_modes": []}
        }))
        .unwrap();
        assert_eq!(doc.turbine.power_reference_location, "high-voltage");
    }
}
