//! GroupByOverrideValue: restructure hub heights around `allowed_modes`.

use std::collections::HashSet;

use powercurve_schema::{
    alpha4, alpha5, AvailableHubHeights, HeightRange, HeightValues, HubHeightEntry, HubHeights,
    RangeEntry, ValuesEntry,
};
use serde_json::Number;

use crate::error::TransformError;

pub const NAME: &str = "group_hub_heights_by_override";

/// Fold mode-level hub height overrides into the turbine's hub heights.
///
/// Modes are grouped by the structural identity of their override. The
/// result has one entry for all modes without an override (carrying the
/// turbine default), emitted first, then one entry per distinct override
/// in first-seen order. Each entry lists its modes in `allowed_modes`, and
/// the override is removed from every mode that had one.
///
/// When no mode overrides the default the turbine value keeps its
/// ungrouped shape. When the turbine has no hub heights at all, nothing
/// is grouped and mode overrides are left where they are.
pub fn group_hub_heights_by_override(
    turbine: alpha4::Turbine,
    modes: &mut [alpha4::Mode],
) -> Result<alpha5::Turbine, TransformError> {
    let alpha4::Turbine {
        power_reference_location,
        available_hub_heights,
        extra,
    } = turbine;

    let available_hub_heights = match available_hub_heights {
        Some(default) => Some(group(default, modes)?),
        None => None,
    };

    Ok(alpha5::Turbine {
        power_reference_location,
        available_hub_heights,
        extra,
    })
}

fn group(
    default: HubHeights,
    modes: &mut [alpha4::Mode],
) -> Result<AvailableHubHeights, TransformError> {
    {
        let mut seen = HashSet::new();
        if let Some(dup) = modes.iter().find(|m| !seen.insert(m.label.as_str())) {
            return Err(TransformError::PreconditionViolation {
                transform: NAME,
                field: "power_curves.operating_modes[].label".to_string(),
                message: format!(
                    "label '{}' is used by more than one mode, hub heights cannot be assigned unambiguously",
                    dup.label
                ),
            });
        }
    }

    let mut without_override = Vec::new();
    let mut groups: Vec<(GroupKey, HubHeights, Vec<String>)> = Vec::new();

    for mode in modes.iter_mut() {
        let Some(heights) = mode
            .overrides
            .as_mut()
            .and_then(|o| o.available_hub_heights.take())
        else {
            without_override.push(mode.label.clone());
            continue;
        };
        let key = GroupKey::of(&heights);
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, labels)) => labels.push(mode.label.clone()),
            None => groups.push((key, heights, vec![mode.label.clone()])),
        }
    }

    if groups.is_empty() {
        return Ok(AvailableHubHeights::Ungrouped(default));
    }

    let mut entries = Vec::with_capacity(groups.len() + 1);
    if !without_override.is_empty() {
        entries.push(into_entry(default, without_override));
    }
    entries.extend(
        groups
            .into_iter()
            .map(|(_, heights, labels)| into_entry(heights, labels)),
    );
    Ok(AvailableHubHeights::Grouped(entries))
}

/// Grouping identity of a hub height specification.
///
/// Heights compare numerically, so `140` and `140.0` group together. A
/// flat list and a `{values}` object with the same heights stay distinct.
#[derive(Debug, PartialEq)]
enum GroupKey {
    List(Vec<Option<f64>>),
    Values(Vec<Option<f64>>),
    Range(Option<f64>, Option<f64>),
}

impl GroupKey {
    fn of(heights: &HubHeights) -> Self {
        match heights {
            HubHeights::List(v) => GroupKey::List(numeric(v)),
            HubHeights::Values(HeightValues { values }) => GroupKey::Values(numeric(values)),
            HubHeights::Range(HeightRange { min, max }) => GroupKey::Range(
                min.as_ref().and_then(Number::as_f64),
                max.as_ref().and_then(Number::as_f64),
            ),
        }
    }
}

fn numeric(values: &[Number]) -> Vec<Option<f64>> {
    values.iter().map(Number::as_f64).collect()
}

fn into_entry(heights: HubHeights, allowed_modes: Vec<String>) -> HubHeightEntry {
    match heights {
        HubHeights::List(values) | HubHeights::Values(HeightValues { values }) => {
            HubHeightEntry::Values(ValuesEntry {
                values,
                allowed_modes,
            })
        }
        HubHeights::Range(HeightRange { min, max }) => HubHeightEntry::Range(RangeEntry {
            min,
            max,
            allowed_modes,
        }),
    }
}
