//! RenameField transforms.
//!
//! A rename is a silent no-op where the old name is absent, so applying
//! it to a part already in the target shape leaves that part unchanged.

use powercurve_schema::{alpha3, alpha5, alpha6};

use crate::error::TransformError;

pub const RENAME_LABEL: &str = "rename_parameter_label";
pub const DIMENSION_TO_AXIS: &str = "rename_dimension_to_axis";
pub const TERM_TO_TERM_NAME: &str = "rename_term_to_term_name";

/// Label used for the vertical shear parameter up to alpha-3.
pub const SHEAR_COEFFICIENT: &str = "shear-coefficient";
/// Label used for the vertical shear parameter from alpha-4.
pub const VERTICAL_SHEAR_EXPONENT: &str = "vertical-shear-exponent";

/// Rewrite every parameter label equal to `from` to `to`, in every mode.
///
/// Returns how many parameters were relabelled.
pub fn rename_parameter_label(modes: &mut [alpha3::Mode], from: &str, to: &str) -> usize {
    let mut renamed = 0;
    for param in modes.iter_mut().flat_map(|m| m.parameters.iter_mut()) {
        if param.label == from {
            param.label = to.to_string();
            renamed += 1;
        }
    }
    renamed
}

/// Rename a parameter's `dimension` to `axis`.
///
/// The result is an axis parameter when the input carries an index and a
/// non-empty `values` array, and a scalar parameter when it carries only
/// `value`. Anything else is rejected.
pub fn rename_dimension_to_axis(
    param: alpha5::Parameter,
) -> Result<alpha6::Parameter, TransformError> {
    let alpha5::Parameter {
        label,
        dimension,
        values,
        value,
        extra,
    } = param;

    match (dimension, values, value) {
        (Some(axis), Some(values), None) if !values.is_empty() => {
            Ok(alpha6::Parameter::Axis(alpha6::AxisParameter {
                label,
                axis,
                values,
                extra,
            }))
        }
        (Some(_), Some(_), None) => Err(TransformError::StructuralMismatch {
            transform: DIMENSION_TO_AXIS,
            message: format!("axis parameter '{}' has an empty values array", label),
        }),
        (None, None, Some(value)) => Ok(alpha6::Parameter::Scalar(alpha6::ScalarParameter {
            label,
            value,
            extra,
        })),
        _ => Err(TransformError::StructuralMismatch {
            transform: DIMENSION_TO_AXIS,
            message: format!(
                "parameter '{}' must carry either dimension and values, or a single value",
                label
            ),
        }),
    }
}

/// Rename a metadata entry's `term` to `term_name`, lower-casing it.
pub fn rename_term_to_term_name(entry: alpha5::MetadataEntry) -> alpha6::MetadataEntry {
    alpha6::MetadataEntry {
        term_name: entry.term.to_lowercase(),
        value: entry.value,
        extra: entry.extra,
    }
}
