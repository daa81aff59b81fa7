//! Interactive session: state machine, operation handlers and the loop that
//! ties them to a [`Console`](crate::console::Console).

mod controller;
mod intent;
mod reducer;
mod runner;
mod state;
mod text;
mod view;

pub use controller::OperationController;
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use runner::Session;
pub use state::SessionState;
