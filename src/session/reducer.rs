use crate::menu::OperationCode;
use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (SessionState::Terminated, _) => SessionState::Terminated,
            (_, SessionIntent::InputClosed) => SessionState::Terminated,
            (SessionState::AwaitingSelection { .. }, SessionIntent::Selected(code)) => {
                SessionState::Executing(code)
            }
            (SessionState::AwaitingSelection { .. }, SessionIntent::Rejected) => {
                SessionState::AwaitingSelection { retry: true }
            }
            (SessionState::Executing(OperationCode::Exit), SessionIntent::Completed) => {
                SessionState::Terminated
            }
            (SessionState::Executing(_), SessionIntent::Completed) => {
                SessionState::AwaitingSelection { retry: false }
            }
            // Intents that make no sense in the current state are ignored.
            (other, _) => other,
        }
    }
}
