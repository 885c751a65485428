//! Primitive transforms.
//!
//! Each transform reshapes one structural aspect of a document and is
//! usable on its own. Transforms take ownership of the part they reshape
//! and hand back the upgraded part, or mutate a part of a record that
//! keeps its type. None of them retains a reference to its input.

pub mod add_field;
pub mod collapse;
pub mod group;
pub mod relocate;
pub mod rename;

pub use add_field::add_power_reference_location;
pub use collapse::collapse_singleton_axes;
pub use group::group_hub_heights_by_override;
pub use relocate::relocate_hub_height_override;
pub use rename::{rename_dimension_to_axis, rename_parameter_label, rename_term_to_term_name};
