//! Terminal rendering for markdown output
//!
//! Rich output goes through termimad, which also lays out the report tables.
//! Status lines from write commands get their own colour. With `--no-color`
//! the markdown is printed as-is.

use anyhow::Result;
use termimad::{
    crossterm::style::{Attribute, Color},
    MadSkin,
};

/// Prints markdown either styled for a terminal or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    success_skin: MadSkin,
    error_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.add_attr(Attribute::Italic);
        skin.inline_code.set_fg(Color::Green);

        let mut success_skin = MadSkin::default();
        success_skin.paragraph.set_fg(Color::Green);
        let mut error_skin = MadSkin::default();
        error_skin.paragraph.set_fg(Color::Red);

        Self {
            rich_enabled,
            skin,
            success_skin,
            error_skin,
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let skin = self.skin_for(markdown);
        print!("{}", skin.term_text(markdown));
        Ok(())
    }

    /// Render any displayable value as markdown
    pub fn render_display(&self, value: &impl std::fmt::Display) -> Result<()> {
        self.render(&value.to_string())
    }

    /// Status lines are coloured by outcome; everything else uses the main skin.
    fn skin_for(&self, markdown: &str) -> &MadSkin {
        if markdown.starts_with("Success:") {
            &self.success_skin
        } else if markdown.starts_with("Error:") {
            &self.error_skin
        } else {
            &self.skin
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
