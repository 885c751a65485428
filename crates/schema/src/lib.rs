//! powercurve-schema: typed records for every released version of the
//! wind turbine power curve document schema.
//!
//! Each `alphaN` module describes the document shape of one schema
//! version. Fields that some version reshapes are typed; the rest of a
//! document is carried verbatim in flattened `extra` maps. A
//! [`VersionedDocument`] pairs a parsed record with the version its
//! caller declared, and is the unit the migration lenses operate on.

pub mod alpha3;
pub mod alpha4;
pub mod alpha5;
pub mod alpha6;
pub mod document;
pub mod error;
pub mod hub_heights;
pub mod table;
pub mod version;

pub use document::VersionedDocument;
pub use error::SchemaError;
pub use hub_heights::{
    AvailableHubHeights, HeightRange, HeightValues, HubHeightEntry, HubHeights, RangeEntry,
    ValuesEntry,
};
pub use table::Table;
pub use version::SchemaVersion;
