//! Terminal rendering for markdown output
//!
//! Rich mode styles markdown with termimad; plain mode (`--no-color`) prints
//! the markdown untouched so output stays stable for scripts and tests.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    ///
    /// Fails when stdout cannot be written, e.g. a closed pipe.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes visible so days stand out from activities
                    writeln!(out, "\x1b[36m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Print text verbatim, bypassing markdown styling (e.g. JSON)
    pub fn print_raw(&self, text: &str) {
        println!("{text}");
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
