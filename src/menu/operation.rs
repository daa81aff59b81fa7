//! Operation catalog: single source of truth for menu entries.

use std::fmt;

/// Numeric menu code of an operation.
///
/// The discriminant is what the user types. Once published, do not renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationCode {
    Exit = 0,
    Add = 1,
    Delete = 2,
    Print = 3,
    ChangeQuantity = 4,
    Rename = 5,
}

impl OperationCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// All codes in catalog order.
    pub fn all() -> &'static [OperationCode] {
        &[
            Self::Exit,
            Self::Add,
            Self::Delete,
            Self::Print,
            Self::ChangeQuantity,
            Self::Rename,
        ]
    }

    /// Parse the canonical decimal form ("0".."5"). No trimming, no leading
    /// zeros, no signs.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "0" => Some(Self::Exit),
            "1" => Some(Self::Add),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Print),
            "4" => Some(Self::ChangeQuantity),
            "5" => Some(Self::Rename),
            _ => None,
        }
    }

    /// Whether this operation needs at least one item to act on.
    pub fn requires_items(self) -> bool {
        !matches!(self, Self::Exit | Self::Add)
    }
}

impl fmt::Display for OperationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub code: OperationCode,
    pub label: &'static str,
}

impl Operation {
    /// Menu line, `"<code>. <label>"`.
    pub fn menu_line(&self) -> String {
        format!("{}. {}", self.code, self.label)
    }
}

const CATALOG: [Operation; 6] = [
    Operation {
        code: OperationCode::Exit,
        label: "Завершить программу.",
    },
    Operation {
        code: OperationCode::Add,
        label: "Добавить товар в список покупок.",
    },
    Operation {
        code: OperationCode::Delete,
        label: "Удалить товар из списка покупок.",
    },
    Operation {
        code: OperationCode::Print,
        label: "Отобразить список покупок.",
    },
    Operation {
        code: OperationCode::ChangeQuantity,
        label: "Изменить количество товара.",
    },
    Operation {
        code: OperationCode::Rename,
        label: "Переименовать товар.",
    },
];

/// The full catalog, ordered by code.
pub fn catalog() -> &'static [Operation] {
    &CATALOG
}

/// Catalog entry for `code`.
pub fn operation(code: OperationCode) -> Operation {
    CATALOG[code.as_u8() as usize]
}
