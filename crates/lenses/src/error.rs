//! Errors raised by transforms, lenses and the migration driver.

use powercurve_schema::{SchemaError, SchemaVersion};

/// Failure of a single primitive transform.
///
/// Every variant names the transform that detected the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Proceeding would overwrite or lose data already in the document.
    #[error("{transform}: refusing to migrate '{field}': {message}")]
    PreconditionViolation {
        transform: &'static str,
        field: String,
        message: String,
    },

    /// The input does not have the shape the transform relies on.
    #[error("{transform}: structural mismatch: {message}")]
    StructuralMismatch {
        transform: &'static str,
        message: String,
    },
}

impl TransformError {
    /// Name of the transform that failed.
    pub fn transform(&self) -> &'static str {
        match self {
            TransformError::PreconditionViolation { transform, .. } => transform,
            TransformError::StructuralMismatch { transform, .. } => transform,
        }
    }
}

/// Errors surfaced to callers of the migration driver.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A version is not part of the registered lens chain.
    #[error("unknown schema version '{0}'")]
    UnknownVersion(String),

    /// Both versions are known but no forward chain connects them.
    #[error("no migration path from {from} to {to}")]
    NoMigrationPath {
        from: SchemaVersion,
        to: SchemaVersion,
    },

    /// A lens catalogue is not a strictly linear chain of adjacent versions.
    #[error("invalid lens registry: {0}")]
    InvalidRegistry(String),

    /// A lens was handed a document of a version other than its source.
    #[error("lens expects a {expected} document, got {found}")]
    VersionMismatch {
        expected: SchemaVersion,
        found: SchemaVersion,
    },

    /// A transform inside a lens failed.
    #[error("lens {from} -> {to} failed: {source}")]
    Lens {
        from: SchemaVersion,
        to: SchemaVersion,
        #[source]
        source: TransformError,
    },

    /// The document could not be read as, or written from, a typed record.
    #[error(transparent)]
    Schema(SchemaError),
}

impl From<SchemaError> for MigrationError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::UnknownVersion(tag) => MigrationError::UnknownVersion(tag),
            other => MigrationError::Schema(other),
        }
    }
}
