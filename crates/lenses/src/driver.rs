//! Migration driver.
//!
//! Resolves the lens chain between two declared versions and folds the
//! document through it. The first failing lens aborts the migration and
//! its error is returned as-is. Transforms are deterministic, so there is
//! nothing to retry.

use powercurve_schema::{SchemaVersion, VersionedDocument};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::MigrationError;
use crate::lens::LensOptions;
use crate::registry::LensRegistry;

/// Applies lens chains from a registry with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Migrator {
    registry: LensRegistry,
    options: LensOptions,
}

impl Migrator {
    pub fn new(registry: LensRegistry, options: LensOptions) -> Self {
        Migrator { registry, options }
    }

    pub fn registry(&self) -> &LensRegistry {
        &self.registry
    }

    pub fn options(&self) -> &LensOptions {
        &self.options
    }

    /// Migrate a typed document to `to`.
    pub fn migrate(
        &self,
        doc: VersionedDocument,
        to: SchemaVersion,
    ) -> Result<VersionedDocument, MigrationError> {
        let from = doc.version();
        let chain = self.registry.resolve(from, to)?;
        debug!(%from, %to, lenses = chain.len(), "resolved lens chain");

        let migrated = chain
            .iter()
            .try_fold(doc, |doc, lens| lens.apply(doc, &self.options))?;

        info!(%from, %to, "migrated document");
        Ok(migrated)
    }

    /// Migrate an untyped JSON document declared to be of version `from`.
    ///
    /// The chain is resolved before the document is read, so a bad version
    /// pair is reported ahead of any shape problem in the document.
    pub fn migrate_value(
        &self,
        value: Value,
        from: SchemaVersion,
        to: SchemaVersion,
    ) -> Result<Value, MigrationError> {
        self.registry.resolve(from, to)?;
        let doc = VersionedDocument::from_value(from, value)?;
        Ok(self.migrate(doc, to)?.into_value()?)
    }
}

/// Migrate `value` from `from` to `to` with the standard lenses and
/// default options.
pub fn migrate(value: Value, from: SchemaVersion, to: SchemaVersion) -> Result<Value, MigrationError> {
    Migrator::default().migrate_value(value, from, to)
}
