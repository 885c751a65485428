//! powercurve-lenses: migrate power curve documents between schema
//! versions.
//!
//! A document declared to be of some released version is walked forward
//! one version at a time. Each step is a [`Lens`], an ordered composition
//! of primitive transforms (see [`transforms`]). The [`LensRegistry`]
//! resolves the chain of lenses between two versions and the [`Migrator`]
//! folds the document through it, stopping at the first error.
//!
//! ```no_run
//! use powercurve_lenses::{migrate, SchemaVersion};
//!
//! let doc = serde_json::json!({"turbine": {}, "power_curves": {"operating_modes": []}});
//! let current = migrate(doc, SchemaVersion::Alpha3, SchemaVersion::CURRENT)?;
//! # Ok::<(), powercurve_lenses::MigrationError>(())
//! ```

pub mod driver;
pub mod error;
pub mod lens;
pub mod ndarray;
pub mod registry;
pub mod transforms;

pub use driver::{migrate, Migrator};
pub use error::{MigrationError, TransformError};
pub use lens::{standard_lenses, Lens, LensOptions};
pub use powercurve_schema::{SchemaVersion, VersionedDocument};
pub use registry::LensRegistry;
