//! Where the patterns send their status lines.
//!
//! Every component reports through a [`Notify`] instead of printing directly,
//! so the drivers write to the terminal while tests read the lines back.

use colored::Colorize;
use std::cell::RefCell;

pub trait Notify {
    fn line(&self, text: &str);

    fn heading(&self, title: &str) {
        self.line(&format!("=== {title} ==="));
    }
}

/// Prints to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    pub color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notify for Console {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn heading(&self, title: &str) {
        let heading = format!("=== {title} ===");
        if self.color {
            println!("{}", heading.bold().cyan());
        } else {
            println!("{heading}");
        }
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct Recorder {
    lines: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Notify for Recorder {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
