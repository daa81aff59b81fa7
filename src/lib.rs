//! Interactive shopping-list manager.
//!
//! ```text
//! Session ──→ menu (selectable set) ──→ Console input
//!    ↑                                        │
//!    └── ItemStore ←── OperationController ←──┘
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod list;
pub mod logging;
pub mod menu;
pub mod mvi;
pub mod session;

pub use error::{BasketError, BasketResult};
