// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive menu over an `IndexedList<String>`.
//!
//! Generic over the input and output streams so the whole session can be
//! driven from memory in tests. End of input ends the session like `5`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use slotchain::IndexedList;

use super::display::{chain_view, logical_view};

enum Flow {
    Continue,
    Quit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    list: IndexedList<String>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            list: IndexedList::new(),
        }
    }

    pub fn list(&self) -> &IndexedList<String> {
        &self.list
    }

    /// Run until the user picks `5` or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nMenu:")?;
            writeln!(self.output, "1 - Insert")?;
            writeln!(self.output, "2 - Get")?;
            writeln!(self.output, "3 - Remove")?;
            writeln!(self.output, "4 - Show list")?;
            writeln!(self.output, "5 - Exit")?;

            let Some(choice) = self.prompt("Choose: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.insert()?,
                "2" => self.get()?,
                "3" => self.remove()?,
                "4" => {
                    self.show()?;
                    Flow::Continue
                }
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid choice")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn insert(&mut self) -> io::Result<Flow> {
        let Some(value) = self.prompt("Value to insert: ")? else {
            return Ok(Flow::Quit);
        };
        let len = self.list.len();
        writeln!(
            self.output,
            "Valid indices: 0 to {} (use {} to append)",
            len, len
        )?;
        let Some(raw) = self.prompt("Insert at index: ")? else {
            return Ok(Flow::Quit);
        };
        let index = match parse_index(&raw) {
            Ok(index) => index,
            Err(err) => return self.error(err),
        };
        match self.list.insert_at(index, value.clone()) {
            Ok(()) => writeln!(self.output, "Inserted '{}' at index {}", value, index)?,
            Err(err) => return self.error(err),
        }
        Ok(Flow::Continue)
    }

    fn get(&mut self) -> io::Result<Flow> {
        if self.list.is_empty() {
            writeln!(self.output, "List is empty")?;
            return Ok(Flow::Continue);
        }
        let prompt = format!("Index to get (0-{}): ", self.list.len() - 1);
        let Some(raw) = self.prompt(&prompt)? else {
            return Ok(Flow::Quit);
        };
        let index = match parse_index(&raw) {
            Ok(index) => index,
            Err(err) => return self.error(err),
        };
        match self.list.get(index) {
            Ok(value) => writeln!(self.output, "Value: {}", value)?,
            Err(err) => return self.error(err),
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        if self.list.is_empty() {
            writeln!(self.output, "List is empty")?;
            return Ok(Flow::Continue);
        }
        let prompt = format!("Index to remove (0-{}): ", self.list.len() - 1);
        let Some(raw) = self.prompt(&prompt)? else {
            return Ok(Flow::Quit);
        };
        let index = match parse_index(&raw) {
            Ok(index) => index,
            Err(err) => return self.error(err),
        };
        match self.list.remove_at(index) {
            Ok(value) => writeln!(self.output, "Removed '{}'", value)?,
            Err(err) => return self.error(err),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(self.output, "Array view:  {}", logical_view(&self.list))?;
        writeln!(self.output, "Linked list: {}", chain_view(&self.list))
    }

    fn error(&mut self, err: impl Display) -> io::Result<Flow> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(Flow::Continue)
    }

    /// Print `text`, then read one line without its line terminator.
    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Positions are `usize`; negative or non-numeric input stops here.
fn parse_index(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid index '{}': expected a non-negative integer", raw.trim()))
}
