//! Record shapes of schema version alpha-6, the current version.
//!
//! Parameters are either axis or scalar parameters, never both. Singleton
//! axes are expressed as scalars, mode-level hub height restrictions live
//! in `restricted_to_hub_heights` and metadata terms are lower-cased
//! `term_name` values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::hub_heights::HubHeights;
use crate::table::Table;

pub use crate::alpha5::Turbine;

/// Top-level alpha-6 document.
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
pub struct PowerCurves {
    pub operating_modes: Vec<Mode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub label: String,
    pub parameters: Vec<Parameter>,
    /// Hub heights this mode is restricted to, if narrower than the turbine's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_to_hub_heights: Option<HubHeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Map<String, Value>>,
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

impl Mode {
    /// The mode's tables keyed by field name. Absent tables are `None`.
    pub fn tables_mut(&mut self) -> [(&'static str, &mut Option<Table>); 4] {
        [
            ("power", &mut self.power),
            ("cp", &mut self.cp),
            ("thrust_coefficient", &mut self.thrust_coefficient),
            ("ct", &mut self.ct),
        ]
    }

    /// Number of axis parameters, i.e. the expected table dimensionality.
    pub fn axis_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.axis().is_some()).count()
    }
}

/// A table axis or a fixed scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Axis(AxisParameter),
    Scalar(ScalarParameter),
}

impl Parameter {
    pub fn label(&self) -> &str {
        match self {
            Parameter::Axis(p) => &p.label,
            Parameter::Scalar(p) => &p.label,
        }
    }

    pub fn axis(&self) -> Option<usize> {
        match self {
            Parameter::Axis(p) => Some(p.axis),
            Parameter::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisParameter {
    pub label: String,
    pub axis: usize,
    pub values: Vec<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarParameter {
    pub label: String,
    pub value: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{term_name, value}` metadata fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub term_name: String,
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parameters_split_into_axis_and_scalar() {
        let params: Vec<Parameter> = serde_json::from_value(json!([
            {"label": "air-density", "value": 1.225},
            {"label": "wind-speed", "axis": 0, "values": [3.0, 3.5]}
        ]))
        .unwrap();
        assert!(matches!(params[0], Parameter::Scalar(_)));
        assert_eq!(params[1].axis(), Some(0));
        assert_eq!(params[1].label(), "wind-speed");
    }

    #[test]
    fn parameter_without_axis_or_value_is_rejected() {
        let result: Result<Parameter, _> = serde_json::from_value(json!({"label": "wind-speed"}));
        assert!(result.is_err());
    }

    #[test]
    fn axis_count_ignores_scalars() {
        let mode: Mode = serde_json::from_value(json!({
            "label": "default",
            "parameters": [
                {"label": "air-density", "value": 1.225},
                {"label": "wind-speed", "axis": 0, "values": [3.0, 3.5]}
            ],
            "power": [1.0, 2.0]
        }))
        .unwrap();
        assert_eq!(mode.axis_count(), 1);
    }
}
