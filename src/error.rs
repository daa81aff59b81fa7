//! Recoverable shopping-list errors.
//!
//! None of these end the session. Each one is reported to the user and the
//! session returns to the menu (or, for an invalid selection, re-prompts).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    /// Blank item name on add or rename.
    #[error("item name is empty")]
    EmptyName,

    /// Referenced item is not in the list.
    #[error("item '{name}' not found")]
    NotFound { name: String },

    /// Rename target already exists.
    #[error("item '{name}' already exists")]
    DuplicateName { name: String },

    /// Quantity expression could not be parsed, or parsed to zero.
    #[error("invalid quantity '{input}'")]
    InvalidQuantity { input: String },

    /// Menu input does not match any selectable operation.
    #[error("invalid selection '{input}'")]
    InvalidSelection { input: String },
}

impl BasketError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
        }
    }

    /// Localized message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyName => "!!! Название товара не может быть пустым.".to_string(),
            Self::NotFound { name } => format!("!!! Товар «{}» не найден в списке.", name),
            Self::DuplicateName { name } => {
                format!("!!! Товар «{}» уже есть в списке.", name)
            }
            Self::InvalidQuantity { input } => {
                format!("!!! Некорректное количество: «{}».", input)
            }
            Self::InvalidSelection { .. } => {
                "!!! Неизвестный номер операции, повторите попытку.".to_string()
            }
        }
    }
}

pub type BasketResult<T> = Result<T, BasketError>;
