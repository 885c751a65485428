//! Lens registry and chain resolution.
//!
//! The version history is strictly linear: lens `i` maps version `i` to
//! version `i + 1`. Resolving a migration is slicing that chain.

use powercurve_schema::SchemaVersion;

use crate::error::MigrationError;
use crate::lens::{standard_lenses, Lens};

/// Ordered catalogue of adjacent-version lenses.
#[derive(Debug, Clone)]
pub struct LensRegistry {
    lenses: Vec<Lens>,
}

impl LensRegistry {
    /// Build a registry, checking that `lenses` form one forward chain of
    /// adjacent versions.
    pub fn new(lenses: Vec<Lens>) -> Result<Self, MigrationError> {
        for lens in &lenses {
            if lens.from.next() != Some(lens.to) {
                return Err(MigrationError::InvalidRegistry(format!(
                    "lens {} -> {} does not connect adjacent versions",
                    lens.from, lens.to
                )));
            }
        }
        for pair in lenses.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(MigrationError::InvalidRegistry(format!(
                    "lens {} -> {} is followed by {} -> {}",
                    pair[0].from, pair[0].to, pair[1].from, pair[1].to
                )));
            }
        }
        Ok(LensRegistry { lenses })
    }

    /// The catalogue of released lenses.
    pub fn standard() -> Self {
        LensRegistry {
            lenses: standard_lenses(),
        }
    }

    pub fn lenses(&self) -> &[Lens] {
        &self.lenses
    }

    /// Every version reachable through the registry, oldest first.
    pub fn versions(&self) -> Vec<SchemaVersion> {
        let mut versions: Vec<SchemaVersion> = self.lenses.iter().map(|l| l.from).collect();
        if let Some(last) = self.lenses.last() {
            versions.push(last.to);
        }
        versions
    }

    /// The lenses taking a document from `from` to `to`, in application
    /// order. Empty when the versions are equal.
    pub fn resolve(&self, from: SchemaVersion, to: SchemaVersion) -> Result<&[Lens], MigrationError> {
        let versions = self.versions();
        let position = |v: SchemaVersion| {
            versions
                .iter()
                .position(|known| *known == v)
                .ok_or_else(|| MigrationError::UnknownVersion(v.to_string()))
        };
        let start = position(from)?;
        let end = position(to)?;
        if start > end {
            return Err(MigrationError::NoMigrationPath { from, to });
        }
        Ok(&self.lenses[start..end])
    }
}

impl Default for LensRegistry {
    fn default() -> Self {
        LensRegistry::standard()
    }
}
