use crate::menu::OperationCode;
use crate::mvi::State;

/// Where the session is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the menu and waiting for a code.
    ///
    /// `retry` is set after an invalid selection; the screen was already
    /// cleared for the notice, so the menu is redrawn below it.
    AwaitingSelection { retry: bool },
    /// Running the handler of the selected operation.
    Executing(OperationCode),
    /// Terminal state, no outgoing transitions.
    Terminated,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::AwaitingSelection { retry: false }
    }
}

impl State for SessionState {}

impl SessionState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}
