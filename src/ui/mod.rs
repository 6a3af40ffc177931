//! Terminal rendering for the demo front end.
//!
//! The screen is a prompt line at the top, empty space, and a status line
//! at the bottom. [`markup`] is independent of ratatui and serves front
//! ends that style text with inline tags instead.

pub mod markup;
pub mod prompt;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::LineBuffer;
use crate::scheme::KeyScheme;
use crate::theme::Theme;
use status_line::StatusInfo;

/// Main UI structure that draws the prompt and status line.
///
/// # Example
///
/// ```
/// use linequill::editor::LineBuffer;
/// use linequill::scheme::{new_scheme, SchemeKind};
/// use linequill::theme::get_builtin_theme;
/// use linequill::ui::UI;
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
///
/// let ui = UI::new(get_builtin_theme("default-dark").unwrap(), "> ");
/// let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
/// let buffer = LineBuffer::with_text("hello", 0);
/// let scheme = new_scheme(SchemeKind::Vim);
/// ui.render(&mut terminal, &buffer, scheme.as_ref()).unwrap();
/// ```
pub struct UI {
    theme: Theme,
    prompt: String,
}

impl UI {
    /// Creates a new UI with the given theme and prompt string.
    pub fn new(theme: Theme, prompt: impl Into<String>) -> Self {
        Self {
            theme,
            prompt: prompt.into(),
        }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        buffer: &LineBuffer,
        scheme: &dyn KeyScheme,
    ) -> Result<()> {
        let insert_mode = scheme.in_insert_mode();
        let info = StatusInfo {
            mode_label: scheme.mode_label(),
            scheme_name: scheme.name(),
            insert_mode,
            cursor: buffer.cursor(),
            len: buffer.len(),
        };

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Prompt
                    Constraint::Min(0),    // Spacer
                    Constraint::Length(1), // Status line
                ])
                .split(f.area());

            prompt::render_prompt(
                f,
                chunks[0],
                buffer,
                &self.prompt,
                insert_mode,
                &self.theme.colors,
            );
            status_line::render_status_line(f, chunks[2], &info, &self.theme.colors);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{new_scheme, SchemeKind};
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_draws_prompt_and_status() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap(), "> ");
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let buffer = LineBuffer::with_text("hello", 0);
        let scheme = new_scheme(SchemeKind::Emacs);

        ui.render(&mut terminal, &buffer, scheme.as_ref()).unwrap();

        let rows: Vec<String> = terminal
            .backend()
            .buffer()
            .content()
            .chunks(30)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();
        assert!(rows[0].starts_with("> hello"));
        assert!(rows[2].contains("INSERT"));
        assert!(rows[2].contains("emacs"));
    }

    #[test]
    fn test_set_theme() {
        let mut ui = UI::new(get_builtin_theme("default-dark").unwrap(), "> ");
        assert!(ui.set_theme("nord"));
        assert_eq!(ui.theme_name(), "nord");
        assert!(!ui.set_theme("missing"));
    }
}
