//! CollapseSingletonAxis.

use powercurve_schema::alpha6::{Mode, Parameter, ScalarParameter};

use crate::error::TransformError;
use crate::ndarray::{is_singleton_axis, remove_axis, shape};

pub const NAME: &str = "collapse_singleton_axes";

/// Turn every single-valued axis of `mode` into a scalar parameter.
///
/// For each axis parameter whose `values` has exactly one element the
/// parameter becomes `{label, value}`, the matching dimension is removed
/// from every table and the indices of higher axes are decremented.
/// Singletons are processed from the highest axis index down, so an
/// index still to be processed is never shifted by an earlier removal.
///
/// Returns the number of axes collapsed.
pub fn collapse_singleton_axes(mode: &mut Mode) -> Result<usize, TransformError> {
    let mut singletons: Vec<usize> = mode
        .parameters
        .iter()
        .filter_map(|p| match p {
            Parameter::Axis(a) if a.values.len() == 1 => Some(a.axis),
            _ => None,
        })
        .collect();
    singletons.sort_unstable_by(|a, b| b.cmp(a));

    check_axes(mode, &singletons)?;

    for &axis in &singletons {
        for param in mode.parameters.iter_mut() {
            let Parameter::Axis(a) = param else {
                continue;
            };
            if a.axis > axis {
                a.axis -= 1;
            } else if a.axis == axis {
                if let Some(value) = a.values.pop() {
                    let scalar = ScalarParameter {
                        label: std::mem::take(&mut a.label),
                        value,
                        extra: std::mem::take(&mut a.extra),
                    };
                    *param = Parameter::Scalar(scalar);
                }
            }
        }

        for (_, table) in mode.tables_mut() {
            if let Some(t) = table.take() {
                *table = Some(remove_axis(t, axis));
            }
        }
    }

    Ok(singletons.len())
}

/// Axis indices must be `0..n` without gaps or repeats, every table must
/// have exactly `n` nesting levels, and every table must be one element
/// long along each singleton axis.
fn check_axes(mode: &mut Mode, singletons: &[usize]) -> Result<(), TransformError> {
    let mut axes: Vec<usize> = mode.parameters.iter().filter_map(Parameter::axis).collect();
    axes.sort_unstable();
    if axes.iter().enumerate().any(|(i, &axis)| i != axis) {
        return Err(TransformError::StructuralMismatch {
            transform: NAME,
            message: format!(
                "mode '{}' has axis indices {:?}, expected 0..{}",
                mode.label,
                axes,
                axes.len()
            ),
        });
    }

    let expected = axes.len();
    let label = mode.label.clone();
    for (field, table) in mode.tables_mut() {
        if let Some(t) = table {
            if t.depth() != expected {
                return Err(TransformError::StructuralMismatch {
                    transform: NAME,
                    message: format!(
                        "mode '{}' has {} axis parameters but '{}' has shape {:?}",
                        label,
                        expected,
                        field,
                        shape(t)
                    ),
                });
            }
            if let Some(axis) = singletons.iter().find(|&&axis| !is_singleton_axis(t, axis)) {
                return Err(TransformError::StructuralMismatch {
                    transform: NAME,
                    message: format!(
                        "mode '{}' has a single value on axis {} but '{}' has shape {:?}",
                        label,
                        axis,
                        field,
                        shape(t)
                    ),
                });
            }
        }
    }
    Ok(())
}
