//! AddField-with-default: `turbine.power_reference_location`.

use powercurve_schema::{alpha3, alpha4};
use serde_json::Value;

use crate::error::TransformError;

pub const NAME: &str = "add_power_reference_location";

const FIELD: &str = "power_reference_location";

/// Add `power_reference_location` to an alpha-3 turbine section.
///
/// Fails if the section already carries a non-null value for the field,
/// which happens when a document written in the alpha-4 shape is routed
/// through the alpha-3 lens. A `null` placeholder is replaced.
pub fn add_power_reference_location(
    turbine: alpha3::Turbine,
    value: &str,
) -> Result<alpha4::Turbine, TransformError> {
    let alpha3::Turbine {
        available_hub_heights,
        mut extra,
    } = turbine;

    match extra.remove(FIELD) {
        None | Some(Value::Null) => {}
        Some(existing) => {
            return Err(TransformError::PreconditionViolation {
                transform: NAME,
                field: format!("turbine.{}", FIELD),
                message: format!("already set to {}, it would be overwritten", existing),
            });
        }
    }

    Ok(alpha4::Turbine {
        power_reference_location: value.to_string(),
        available_hub_heights,
        extra,
    })
}
