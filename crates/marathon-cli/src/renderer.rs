//! Terminal rendering of markdown output.
//!
//! Plans, summaries and status lines are markdown. With color enabled they
//! go through a termimad skin; `--no-color` writes the markdown as is, which
//! is also what scripts and tests read.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Writes markdown either styled by termimad or unchanged
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // week headers in blue, plan metadata keys in yellow
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Renders `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.render_to(&mut stdout, markdown)
            .and_then(|()| stdout.flush())
            .context("Failed to write to terminal")
    }

    /// Renders `markdown` to any writer.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if self.rich_enabled {
            write!(out, "{}", self.skin.term_text(markdown))
        } else {
            out.write_all(markdown.as_bytes())
        }
    }
}
