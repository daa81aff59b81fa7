//! Menu model: the fixed operation catalog and the selectable-set rule.

mod model;
mod operation;

pub use model::{parse_selection, selectable_operations};
pub use operation::{catalog, operation, Operation, OperationCode};
