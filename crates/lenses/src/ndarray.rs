//! Recursive helpers for reshaping nested numeric tables.

use powercurve_schema::Table;

/// Remove the singleton dimension `axis` from `table`.
///
/// Descends `axis` levels into every branch and, at that depth, replaces
/// each one-element array with its sole element. Arrays of any other
/// length, and branches that bottom out in a number before reaching the
/// target depth, are left unchanged.
pub fn remove_axis(table: Table, axis: usize) -> Table {
    match table {
        Table::Nested(items) if axis == 0 => unwrap_singleton(items),
        Table::Nested(items) => Table::Nested(
            items
                .into_iter()
                .map(|item| remove_axis(item, axis - 1))
                .collect(),
        ),
        leaf @ Table::Value(_) => leaf,
    }
}

fn unwrap_singleton(mut items: Vec<Table>) -> Table {
    if items.len() == 1 {
        if let Some(only) = items.pop() {
            return only;
        }
    }
    Table::Nested(items)
}

/// Whether every array `axis` levels down has exactly one element.
///
/// A branch that bottoms out in a number before reaching `axis` does not
/// count as singleton.
pub fn is_singleton_axis(table: &Table, axis: usize) -> bool {
    match table {
        Table::Nested(items) if axis == 0 => items.len() == 1,
        Table::Nested(items) => items.iter().all(|item| is_singleton_axis(item, axis - 1)),
        Table::Value(_) => false,
    }
}

/// Length of each dimension, measured along the first branch.
pub fn shape(table: &Table) -> Vec<usize> {
    let mut dims = Vec::new();
    let mut current = table;
    while let Table::Nested(items) = current {
        dims.push(items.len());
        match items.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    dims
}
