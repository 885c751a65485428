//! N-dimensional numeric tables (`power`, `cp`, `thrust_coefficient`, `ct`).

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A nested numeric array indexed by a mode's axis parameters.
///
/// Axis 0 is the outermost array. Leaves keep their JSON number
/// representation so that integers written as integers stay integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Table {
    Nested(Vec<Table>),
    Value(Number),
}

impl Table {
    /// Number of nesting levels, measured along the first branch.
    ///
    /// A bare number has depth 0, `[1, 2]` has depth 1, `[[1, 2]]` depth 2.
    pub fn depth(&self) -> usize {
        match self {
            Table::Nested(items) => 1 + items.first().map_or(0, Table::depth),
            Table::Value(_) => 0,
        }
    }

    /// Length of the outermost array, or `None` for a bare number.
    pub fn len(&self) -> Option<usize> {
        match self {
            Table::Nested(items) => Some(items.len()),
            Table::Value(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}
