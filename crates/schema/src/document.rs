//! Version-tagged document envelope.

use serde_json::Value;

use crate::error::SchemaError;
use crate::version::SchemaVersion;
use crate::{alpha3, alpha4, alpha5, alpha6};

/// A document typed by the schema version its caller declared.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedDocument {
    Alpha3(alpha3::Document),
    Alpha4(alpha4::Document),
    Alpha5(alpha5::Document),
    Alpha6(alpha6::Document),
}

impl VersionedDocument {
    /// Interpret `value` as a document of `version`.
    ///
    /// The version is taken as given; it is never guessed from shape.
    pub fn from_value(version: SchemaVersion, value: Value) -> Result<Self, SchemaError> {
        let shape = |source| SchemaError::Shape { version, source };
        Ok(match version {
            SchemaVersion::Alpha3 => {
                VersionedDocument::Alpha3(serde_json::from_value(value).map_err(shape)?)
            }
            SchemaVersion::Alpha4 => {
                VersionedDocument::Alpha4(serde_json::from_value(value).map_err(shape)?)
            }
            SchemaVersion::Alpha5 => {
                VersionedDocument::Alpha5(serde_json::from_value(value).map_err(shape)?)
            }
            SchemaVersion::Alpha6 => {
                VersionedDocument::Alpha6(serde_json::from_value(value).map_err(shape)?)
            }
        })
    }

    pub fn version(&self) -> SchemaVersion {
        match self {
            VersionedDocument::Alpha3(_) => SchemaVersion::Alpha3,
            VersionedDocument::Alpha4(_) => SchemaVersion::Alpha4,
            VersionedDocument::Alpha5(_) => SchemaVersion::Alpha5,
            VersionedDocument::Alpha6(_) => SchemaVersion::Alpha6,
        }
    }

    /// Convert back into untyped JSON.
    pub fn into_value(self) -> Result<Value, SchemaError> {
        let version = self.version();
        let result = match self {
            VersionedDocument::Alpha3(doc) => serde_json::to_value(doc),
            VersionedDocument::Alpha4(doc) => serde_json::to_value(doc),
            VersionedDocument::Alpha5(doc) => serde_json::to_value(doc),
            VersionedDocument::Alpha6(doc) => serde_json::to_value(doc),
        };
        result.map_err(|source| SchemaError::Serialize { version, source })
    }
}

impl From<alpha3::Document> for VersionedDocument {
    fn from(doc: alpha3::Document) -> Self {
        VersionedDocument::Alpha3(doc)
    }
}

impl From<alpha4::Document> for VersionedDocument {
    fn from(doc: alpha4::Document) -> Self {
        VersionedDocument::Alpha4(doc)
    }
}

impl From<alpha5::Document> for VersionedDocument {
    fn from(doc: alpha5::Document) -> Self {
        VersionedDocument::Alpha5(doc)
    }
}

impl From<alpha6::Document> for VersionedDocument {
    fn from(doc: alpha6::Document) -> Self {
        VersionedDocument::Alpha6(doc)
    }
}
