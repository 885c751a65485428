use crate::version::SchemaVersion;

/// Errors converting between untyped JSON and versioned document records.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The version tag is not one of the released schema versions.
    #[error("unknown schema version '{0}'")]
    UnknownVersion(String),

    /// The JSON value does not have the record shape of the stated version.
    #[error("document does not match the {version} shape: {source}")]
    Shape {
        version: SchemaVersion,
        #[source]
        source: serde_json::Error,
    },

    /// A typed record could not be turned back into JSON.
    #[error("failed to serialize {version} document: {source}")]
    Serialize {
        version: SchemaVersion,
        #[source]
        source: serde_json::Error,
    },
}
