//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Runner
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: where the session is in its cycle
//! - **Intent**: what just happened (a selection, an operation finishing, EOF)
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
