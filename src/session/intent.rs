use crate::menu::OperationCode;
use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIntent {
    /// User picked a selectable operation.
    Selected(OperationCode),
    /// Menu input did not match the selectable set.
    Rejected,
    /// The running operation finished, successfully or with a reported error.
    Completed,
    /// Input reached EOF. Treated as exit.
    InputClosed,
}

impl Intent for SessionIntent {}
