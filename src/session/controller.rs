//! Operation handlers.
//!
//! Each handler asks for what it needs, calls the store once and reports the
//! result. A failed step ends the operation; nothing is re-prompted here.

use std::io;

use crate::config::DisplayConfig;
use crate::console::Console;
use crate::error::BasketError;
use crate::list::{Adjustment, ItemStore, QuantityExpr, POSITIONS};
use crate::menu::OperationCode;
use crate::session::intent::SessionIntent;
use crate::session::{text, view};

/// Bind a prompt answer, or end the operation on EOF.
macro_rules! answer_or_close {
    ($self:ident, $question:expr) => {
        match $self.prompt($question)? {
            Some(answer) => answer,
            None => return Ok(SessionIntent::InputClosed),
        }
    };
}

pub struct OperationController<'a, C: Console + ?Sized> {
    console: &'a mut C,
    store: &'a mut ItemStore,
    display: &'a DisplayConfig,
}

impl<'a, C: Console + ?Sized> OperationController<'a, C> {
    pub fn new(console: &'a mut C, store: &'a mut ItemStore, display: &'a DisplayConfig) -> Self {
        Self {
            console,
            store,
            display,
        }
    }

    /// Run one operation.
    ///
    /// Returns [`SessionIntent::Completed`] when the operation is over
    /// (whether or not it succeeded) and [`SessionIntent::InputClosed`] if
    /// input ended mid-way.
    pub fn execute(&mut self, code: OperationCode) -> io::Result<SessionIntent> {
        match code {
            OperationCode::Exit => Ok(SessionIntent::Completed),
            OperationCode::Add => self.add(),
            OperationCode::Delete => self.delete(),
            OperationCode::Print => self.print(),
            OperationCode::ChangeQuantity => self.change_quantity(),
            OperationCode::Rename => self.rename(),
        }
    }

    fn add(&mut self) -> io::Result<SessionIntent> {
        let answer = answer_or_close!(self, text::ADD_PROMPT);
        let name = answer.trim();

        match self.store.add(name) {
            Ok(quantity) => self.console.write_line(&text::added(name, quantity))?,
            Err(err) => self.report(err)?,
        }
        Ok(SessionIntent::Completed)
    }

    fn delete(&mut self) -> io::Result<SessionIntent> {
        self.console.write_line(text::CURRENT_LIST)?;
        view::render_items(&mut *self.console, self.store)?;

        let answer = answer_or_close!(self, text::DELETE_PROMPT);
        let name = answer.trim();

        match self.store.remove(name) {
            Ok(()) => self.console.write_line(&text::deleted(name))?,
            Err(err) => self.report(err)?,
        }
        Ok(SessionIntent::Completed)
    }

    fn print(&mut self) -> io::Result<SessionIntent> {
        view::render_list(&mut *self.console, self.store)?;
        let positions = POSITIONS.with_count(self.store.len() as u64);
        self.console.write_line(&text::total(&positions))?;

        if self.display.pause_after_print {
            self.console.write(text::PRESS_ENTER)?;
            if self.console.read_line()?.is_none() {
                return Ok(SessionIntent::InputClosed);
            }
        }
        Ok(SessionIntent::Completed)
    }

    fn change_quantity(&mut self) -> io::Result<SessionIntent> {
        let answer = answer_or_close!(self, text::CHANGE_NAME_PROMPT);
        let name = answer.trim();

        let Some(current) = self.store.get(name) else {
            self.report(BasketError::not_found(name))?;
            return Ok(SessionIntent::Completed);
        };
        self.console.write_line(&text::current_quantity(current))?;

        let raw = answer_or_close!(self, text::CHANGE_QUANTITY_PROMPT);
        let result = QuantityExpr::parse(&raw).and_then(|expr| self.store.adjust(name, expr));

        match result {
            Ok(Adjustment::Updated(quantity)) => self
                .console
                .write_line(&text::quantity_changed(name, quantity))?,
            Ok(Adjustment::Removed) => self.console.write_line(&text::deleted(name))?,
            Err(err) => self.report(err)?,
        }
        Ok(SessionIntent::Completed)
    }

    fn rename(&mut self) -> io::Result<SessionIntent> {
        let answer = answer_or_close!(self, text::RENAME_OLD_PROMPT);
        let old_name = answer.trim();

        if !self.store.contains(old_name) {
            self.report(BasketError::not_found(old_name))?;
            return Ok(SessionIntent::Completed);
        }

        let answer = answer_or_close!(self, text::RENAME_NEW_PROMPT);
        let new_name = answer.trim();

        match self.store.rename(old_name, new_name) {
            Ok(()) => self
                .console
                .write_line(&text::renamed(old_name, new_name))?,
            Err(err) => self.report(err)?,
        }
        Ok(SessionIntent::Completed)
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        self.console.write_line(question)?;
        self.console.write(text::PROMPT)?;
        self.console.read_line()
    }

    fn report(&mut self, err: BasketError) -> io::Result<()> {
        tracing::info!(error = %err, "operation rejected");
        self.console.write_line(&err.user_message())
    }
}
