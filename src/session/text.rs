//! User-facing strings.

pub const LIST_HEADER: &str = "Ваш список покупок:";
pub const LIST_EMPTY: &str = "Ваш список покупок пуст";
pub const CURRENT_LIST: &str = "Текущий список покупок:";
pub const MENU_HEADER: &str = "Выберите операцию для выполнения:";
pub const PROMPT: &str = "> ";
pub const SELECTED: &str = "Выбрана операция:";
pub const SEPARATOR: &str = " ----- ";
pub const FAREWELL: &str = "Программа завершена";

pub const ADD_PROMPT: &str = "Введите название товара для добавления в список:";
pub const DELETE_PROMPT: &str = "Введите название товара для удаления из списка:";
pub const CHANGE_NAME_PROMPT: &str = "Введите название товара для изменения количества:";
pub const CHANGE_QUANTITY_PROMPT: &str =
    "Введите новое количество (N), изменение (+N или -N) или 0 для удаления:";
pub const RENAME_OLD_PROMPT: &str = "Введите название товара для переименования:";
pub const RENAME_NEW_PROMPT: &str = "Введите новое название товара:";
pub const PRESS_ENTER: &str = "Нажмите enter для продолжения";

pub fn item_line(name: &str, quantity: i64) -> String {
    format!("{} ({} шт.)", name, quantity)
}

pub fn added(name: &str, quantity: i64) -> String {
    format!("Товар «{}» добавлен, количество: {} шт.", name, quantity)
}

pub fn deleted(name: &str) -> String {
    format!("Товар «{}» удалён из списка.", name)
}

pub fn current_quantity(quantity: i64) -> String {
    format!("Текущее количество: {} шт.", quantity)
}

pub fn quantity_changed(name: &str, quantity: i64) -> String {
    format!("Количество товара «{}»: {} шт.", name, quantity)
}

pub fn renamed(old_name: &str, new_name: &str) -> String {
    format!("Товар «{}» переименован в «{}».", old_name, new_name)
}

pub fn total(positions: &str) -> String {
    format!("Всего {}.", positions)
}
