//! Which operations are currently on offer.

use crate::error::BasketError;
use crate::list::ItemStore;
use crate::menu::operation::{catalog, Operation, OperationCode};

/// Operations the user may pick right now.
///
/// An empty list only offers exit and add; everything else needs an item to
/// act on. Catalog order is preserved.
pub fn selectable_operations(store: &ItemStore) -> Vec<Operation> {
    let has_items = !store.is_empty();
    catalog()
        .iter()
        .filter(|op| has_items || !op.code.requires_items())
        .copied()
        .collect()
}

/// Match raw menu input against the selectable set.
///
/// Surrounding whitespace is ignored; otherwise the input must be exactly the
/// decimal code of a selectable operation.
pub fn parse_selection(
    input: &str,
    selectable: &[Operation],
) -> Result<OperationCode, BasketError> {
    OperationCode::parse(input.trim())
        .filter(|code| selectable.iter().any(|op| op.code == *code))
        .ok_or_else(|| BasketError::InvalidSelection {
            input: input.to_string(),
        })
}
