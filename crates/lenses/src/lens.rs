//! Version lenses: ordered compositions of primitive transforms, each
//! taking a document of one schema version to the next.
//!
//! Lenses are not idempotent. Applying a lens to a document that already
//! satisfies its target version is a caller error; the registry only ever
//! hands out the lenses between the two versions the caller declared.

use powercurve_schema::alpha4::DEFAULT_POWER_REFERENCE_LOCATION;
use powercurve_schema::{
    alpha3, alpha4, alpha5, alpha6, AvailableHubHeights, SchemaVersion, VersionedDocument,
};
use tracing::debug;

use crate::error::{MigrationError, TransformError};
use crate::transforms::{self, rename};

/// Caller-tunable inputs to the lenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensOptions {
    /// Value given to `turbine.power_reference_location` when upgrading
    /// from alpha-3.
    pub power_reference_location: String,
}

impl Default for LensOptions {
    fn default() -> Self {
        LensOptions {
            power_reference_location: DEFAULT_POWER_REFERENCE_LOCATION.to_string(),
        }
    }
}

pub type ApplyFn =
    fn(VersionedDocument, &LensOptions) -> Result<VersionedDocument, TransformError>;

/// A lens from one schema version to the next.
#[derive(Clone)]
pub struct Lens {
    pub from: SchemaVersion,
    pub to: SchemaVersion,
    /// Names of the primitive transforms the lens applies, in order.
    pub transforms: &'static [&'static str],
    apply: ApplyFn,
}

impl std::fmt::Debug for Lens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lens")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("transforms", &self.transforms)
            .finish()
    }
}

impl Lens {
    pub fn new(
        from: SchemaVersion,
        to: SchemaVersion,
        transforms: &'static [&'static str],
        apply: ApplyFn,
    ) -> Self {
        Lens {
            from,
            to,
            transforms,
            apply,
        }
    }

    /// Apply the lens to a document of its source version.
    pub fn apply(
        &self,
        doc: VersionedDocument,
        options: &LensOptions,
    ) -> Result<VersionedDocument, MigrationError> {
        if doc.version() != self.from {
            return Err(MigrationError::VersionMismatch {
                expected: self.from,
                found: doc.version(),
            });
        }
        debug!(from = %self.from, to = %self.to, transforms = ?self.transforms, "applying lens");
        (self.apply)(doc, options).map_err(|source| MigrationError::Lens {
            from: self.from,
            to: self.to,
            source,
        })
    }
}

/// The released lenses, oldest first.
pub fn standard_lenses() -> Vec<Lens> {
    vec![
        Lens::new(
            SchemaVersion::Alpha3,
            SchemaVersion::Alpha4,
            &[
                transforms::add_field::NAME,
                rename::RENAME_LABEL,
            ],
            apply_alpha_3_to_alpha_4,
        ),
        Lens::new(
            SchemaVersion::Alpha4,
            SchemaVersion::Alpha5,
            &[transforms::group::NAME],
            apply_alpha_4_to_alpha_5,
        ),
        Lens::new(
            SchemaVersion::Alpha5,
            SchemaVersion::Alpha6,
            &[
                transforms::relocate::NAME,
                rename::DIMENSION_TO_AXIS,
                transforms::collapse::NAME,
                rename::TERM_TO_TERM_NAME,
            ],
            apply_alpha_5_to_alpha_6,
        ),
    ]
}

/// alpha-3 to alpha-4: add `power_reference_location`, relabel
/// `shear-coefficient` as `vertical-shear-exponent`.
pub fn alpha_3_to_alpha_4(
    doc: alpha3::Document,
    options: &LensOptions,
) -> Result<alpha4::Document, TransformError> {
    let alpha3::Document {
        turbine,
        mut power_curves,
        document,
        extra,
    } = doc;

    let turbine =
        transforms::add_power_reference_location(turbine, &options.power_reference_location)?;
    debug!(
        transform = transforms::add_field::NAME,
        value = %turbine.power_reference_location,
        "added power reference location"
    );
    let renamed = transforms::rename_parameter_label(
        &mut power_curves.operating_modes,
        rename::SHEAR_COEFFICIENT,
        rename::VERTICAL_SHEAR_EXPONENT,
    );
    debug!(
        transform = rename::RENAME_LABEL,
        renamed,
        "relabelled shear coefficient parameters"
    );

    Ok(alpha4::Document {
        turbine,
        power_curves,
        document,
        extra,
    })
}

/// alpha-4 to alpha-5: group hub height overrides by value.
pub fn alpha_4_to_alpha_5(doc: alpha4::Document) -> Result<alpha5::Document, TransformError> {
    let alpha4::Document {
        turbine,
        mut power_curves,
        document,
        extra,
    } = doc;

    let turbine =
        transforms::group_hub_heights_by_override(turbine, &mut power_curves.operating_modes)?;
    debug!(
        transform = transforms::group::NAME,
        grouped = matches!(
            turbine.available_hub_heights,
            Some(AvailableHubHeights::Grouped(_))
        ),
        "grouped hub heights by override"
    );

    Ok(alpha5::Document {
        turbine,
        power_curves,
        document,
        extra,
    })
}

/// alpha-5 to alpha-6: relocate hub height overrides, rename `dimension`
/// to `axis`, collapse singleton axes and rename `term` to `term_name`.
pub fn alpha_5_to_alpha_6(doc: alpha5::Document) -> Result<alpha6::Document, TransformError> {
    let alpha5::Document {
        turbine,
        power_curves,
        document,
        extra,
    } = doc;

    let operating_modes = power_curves
        .operating_modes
        .into_iter()
        .map(upgrade_mode)
        .collect::<Result<Vec<_>, _>>()?;

    let terms = document
        .as_ref()
        .and_then(|section| section.metadata.as_ref())
        .map_or(0, Vec::len);
    let document = document.map(|section| alpha6::DocumentSection {
        metadata: section.metadata.map(|entries| {
            entries
                .into_iter()
                .map(transforms::rename_term_to_term_name)
                .collect()
        }),
        extra: section.extra,
    });
    debug!(
        transform = rename::TERM_TO_TERM_NAME,
        terms,
        "renamed metadata terms"
    );

    Ok(alpha6::Document {
        turbine,
        power_curves: alpha6::PowerCurves {
            operating_modes,
            extra: power_curves.extra,
        },
        document,
        extra,
    })
}

fn upgrade_mode(mut mode: alpha5::Mode) -> Result<alpha6::Mode, TransformError> {
    let restricted_to_hub_heights = transforms::relocate_hub_height_override(&mut mode)?;
    debug!(
        transform = transforms::relocate::NAME,
        mode = %mode.label,
        restricted = restricted_to_hub_heights.is_some(),
        "relocated hub height override"
    );
    let parameters = mode
        .parameters
        .into_iter()
        .map(transforms::rename_dimension_to_axis)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        transform = rename::DIMENSION_TO_AXIS,
        mode = %mode.label,
        parameters = parameters.len(),
        "renamed parameter dimensions to axes"
    );

    let mut upgraded = alpha6::Mode {
        label: mode.label,
        parameters,
        restricted_to_hub_heights,
        overrides: mode.overrides.map(|o| o.extra),
        power: mode.power,
        cp: mode.cp,
        thrust_coefficient: mode.thrust_coefficient,
        ct: mode.ct,
        extra: mode.extra,
    };
    let collapsed = transforms::collapse_singleton_axes(&mut upgraded)?;
    debug!(
        transform = transforms::collapse::NAME,
        mode = %upgraded.label,
        collapsed,
        "collapsed singleton axes"
    );
    Ok(upgraded)
}

fn apply_alpha_3_to_alpha_4(
    doc: VersionedDocument,
    options: &LensOptions,
) -> Result<VersionedDocument, TransformError> {
    match doc {
        VersionedDocument::Alpha3(doc) => Ok(alpha_3_to_alpha_4(doc, options)?.into()),
        other => Err(unexpected_input(other.version())),
    }
}

fn apply_alpha_4_to_alpha_5(
    doc: VersionedDocument,
    _options: &LensOptions,
) -> Result<VersionedDocument, TransformError> {
    match doc {
        VersionedDocument::Alpha4(doc) => Ok(alpha_4_to_alpha_5(doc)?.into()),
        other => Err(unexpected_input(other.version())),
    }
}

fn apply_alpha_5_to_alpha_6(
    doc: VersionedDocument,
    _options: &LensOptions,
) -> Result<VersionedDocument, TransformError> {
    match doc {
        VersionedDocument::Alpha5(doc) => Ok(alpha_5_to_alpha_6(doc)?.into()),
        other => Err(unexpected_input(other.version())),
    }
}

// Lens::apply checks the version first; this only fires for a lens built
// with a mismatched apply function.
fn unexpected_input(found: SchemaVersion) -> TransformError {
    TransformError::StructuralMismatch {
        transform: "lens",
        message: format!("lens received a {} document", found),
    }
}
