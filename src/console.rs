// Line-oriented output shared by every demo.
// Demos never call println! directly; they write through a Console so the
// same code can print to a terminal or be captured in tests.

use colored::Colorize;
use std::io::{self, Write};

enum Sink {
    Stdout,
    Memory(Vec<String>),
}

/// Destination for demo output, one line at a time.
pub struct Console {
    sink: Sink,
    color: bool,
}

impl Console {
    /// Console printing to standard output.
    pub fn stdout(color: bool) -> Self {
        Self {
            sink: Sink::Stdout,
            color,
        }
    }

    /// Console recording every line in memory, never colored.
    pub fn memory() -> Self {
        Self {
            sink: Sink::Memory(Vec::new()),
            color: false,
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        let text = text.as_ref();
        match &mut self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{text}")
            }
            Sink::Memory(lines) => {
                lines.push(text.to_string());
                Ok(())
            }
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let text = format!("=== {title} ===");
        if self.color {
            self.line(text.bold().cyan().to_string())
        } else {
            self.line(text)
        }
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            self.line(text.yellow().to_string())
        } else {
            self.line(text)
        }
    }

    /// Lines recorded so far. Always empty for a stdout console.
    pub fn transcript(&self) -> &[String] {
        match &self.sink {
            Sink::Stdout => &[],
            Sink::Memory(lines) => lines,
        }
    }

    /// Drops the recorded lines, keeping the console usable.
    pub fn clear(&mut self) {
        if let Sink::Memory(lines) = &mut self.sink {
            lines.clear();
        }
    }
}
