//! Rendering of the list and the menu.

use std::io;

use crate::console::Console;
use crate::list::ItemStore;
use crate::menu::Operation;
use crate::session::text;

/// Header plus one line per item, or the empty-list notice.
pub fn render_list<C: Console + ?Sized>(console: &mut C, store: &ItemStore) -> io::Result<()> {
    if store.is_empty() {
        return console.write_line(text::LIST_EMPTY);
    }
    console.write_line(text::LIST_HEADER)?;
    render_items(console, store)
}

pub fn render_items<C: Console + ?Sized>(console: &mut C, store: &ItemStore) -> io::Result<()> {
    for item in store.snapshot() {
        console.write_line(&text::item_line(&item.name, item.quantity))?;
    }
    Ok(())
}

/// Menu header, one `"<code>. <label>"` line per operation, then the prompt.
pub fn render_menu<C: Console + ?Sized>(
    console: &mut C,
    operations: &[Operation],
) -> io::Result<()> {
    console.write_line(text::MENU_HEADER)?;
    for op in operations {
        console.write_line(&op.menu_line())?;
    }
    console.write(text::PROMPT)
}
