//! Shared test utilities: a scripted console and store builders.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::io;

use basket::config::DisplayConfig;
use basket::console::Console;
use basket::list::ItemStore;

/// Marker written into the transcript on every `clear_screen` call.
pub const CLEAR: &str = "<<clear>>";

/// Console fed from a fixed list of input lines.
///
/// Everything written ends up in `transcript`; running out of input behaves
/// like EOF.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub transcript: String,
    pub clears: usize,
    pub reads: usize,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        Ok(self.input.pop_front())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.transcript.push_str(CLEAR);
        self.transcript.push('\n');
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }
}

/// Display settings without the print pause.
pub fn no_pause() -> DisplayConfig {
    DisplayConfig {
        clear_screen: true,
        pause_after_print: false,
    }
}

/// Store holding `items` with the given quantities, in order.
pub fn store_with(items: &[(&str, i64)]) -> ItemStore {
    let mut store = ItemStore::new();
    for (name, quantity) in items {
        for _ in 0..*quantity {
            store.add(name).expect("valid test item name");
        }
    }
    store
}
