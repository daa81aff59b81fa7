//! Session loop.
//!
//! Drives [`SessionReducer`] until the state is terminal. Each state asks the
//! console for input, turns the answer into an intent and lets the reducer
//! decide the next state.

use std::io;

use crate::config::DisplayConfig;
use crate::console::Console;
use crate::list::ItemStore;
use crate::menu::{operation, parse_selection, selectable_operations, OperationCode};
use crate::mvi::Reducer;
use crate::session::controller::OperationController;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::SessionState;
use crate::session::{text, view};

/// One interactive run: the console, the list and the current state.
pub struct Session<C: Console> {
    console: C,
    store: ItemStore,
    display: DisplayConfig,
    state: SessionState,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, display: DisplayConfig) -> Self {
        Self::with_store(console, display, ItemStore::new())
    }

    /// Start from a pre-filled list.
    pub fn with_store(console: C, display: DisplayConfig, store: ItemStore) -> Self {
        Self {
            console,
            store,
            display,
            state: SessionState::default(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run until exit is chosen or input ends.
    ///
    /// Only console I/O failures are returned; every domain error is reported
    /// to the user and recovered inside the loop.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("session started");
        while !self.state.is_terminated() {
            self.step()?;
        }
        self.console.write_line(text::FAREWELL)?;
        tracing::info!(items = self.store.len(), "session finished");
        Ok(())
    }

    /// Perform the work of the current state and apply the resulting
    /// transition. A no-op once terminated.
    pub fn step(&mut self) -> io::Result<SessionState> {
        let intent = match self.state {
            SessionState::AwaitingSelection { retry } => self.await_selection(retry)?,
            SessionState::Executing(code) => self.execute(code)?,
            SessionState::Terminated => return Ok(self.state),
        };

        let next = SessionReducer::reduce(self.state, intent);
        tracing::debug!(from = ?self.state, ?intent, to = ?next, "session transition");
        self.state = next;
        Ok(next)
    }

    fn await_selection(&mut self, retry: bool) -> io::Result<SessionIntent> {
        if !retry {
            self.console.clear_screen()?;
        }

        view::render_list(&mut self.console, &self.store)?;
        self.console.write_line("")?;

        let selectable = selectable_operations(&self.store);
        view::render_menu(&mut self.console, &selectable)?;

        let Some(input) = self.console.read_line()? else {
            // Finish the dangling prompt line.
            self.console.write_line("")?;
            return Ok(SessionIntent::InputClosed);
        };

        match parse_selection(&input, &selectable) {
            Ok(code) => Ok(SessionIntent::Selected(code)),
            Err(err) => {
                tracing::info!(error = %err, "menu selection rejected");
                self.console.clear_screen()?;
                self.console.write_line(&err.user_message())?;
                self.console.write_line("")?;
                Ok(SessionIntent::Rejected)
            }
        }
    }

    fn execute(&mut self, code: OperationCode) -> io::Result<SessionIntent> {
        let selected = operation(code);
        self.console
            .write_line(&format!("{} {}", text::SELECTED, selected.label))?;

        let intent = OperationController::new(&mut self.console, &mut self.store, &self.display)
            .execute(code)?;

        if intent == SessionIntent::Completed {
            self.console.write_line("")?;
            self.console.write_line(text::SEPARATOR)?;
        }
        Ok(intent)
    }
}
