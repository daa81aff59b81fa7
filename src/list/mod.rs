//! Shopping-list domain: the item store, quantity grammar and plural forms.
//!
//! Pure logic, no terminal I/O.

pub mod plural;
pub mod quantity;
pub mod store;

pub use plural::{NounForms, PluralForm, POSITIONS};
pub use quantity::QuantityExpr;
pub use store::{Adjustment, Item, ItemStore};
