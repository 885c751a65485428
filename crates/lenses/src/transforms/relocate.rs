//! RelocateField: `overrides.available_hub_heights` to
//! `restricted_to_hub_heights`.

use powercurve_schema::{alpha5, HubHeights};

use crate::error::TransformError;

pub const NAME: &str = "relocate_hub_height_override";

const TARGET: &str = "restricted_to_hub_heights";

/// Move a mode's hub height override out of `overrides`.
///
/// Returns the value the mode's `restricted_to_hub_heights` should hold:
/// the relocated override, or a restriction the mode already carried.
/// The override key is removed from `overrides`; the (possibly empty)
/// `overrides` object itself stays. Fails rather than drop data when
/// both an override and an existing restriction are present.
pub fn relocate_hub_height_override(
    mode: &mut alpha5::Mode,
) -> Result<Option<HubHeights>, TransformError> {
    let existing = match mode.extra.remove(TARGET) {
        Some(value) => Some(serde_json::from_value::<HubHeights>(value).map_err(|e| {
            TransformError::StructuralMismatch {
                transform: NAME,
                message: format!("mode '{}' has an invalid {}: {}", mode.label, TARGET, e),
            }
        })?),
        None => None,
    };

    let moved = mode
        .overrides
        .as_mut()
        .and_then(|o| o.available_hub_heights.take());

    match (moved, existing) {
        (Some(_), Some(existing)) => Err(TransformError::PreconditionViolation {
            transform: NAME,
            field: format!("power_curves.operating_modes[{}].{}", mode.label, TARGET),
            message: format!(
                "already set to {}, the hub height override would overwrite it",
                serde_json::to_string(&existing).unwrap_or_default()
            ),
        }),
        (Some(moved), None) => Ok(Some(moved)),
        (None, existing) => Ok(existing),
    }
}
