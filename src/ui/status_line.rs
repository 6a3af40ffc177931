//! Status line widget.
//!
//! Shows the mode badge, the scheme name and the cursor offset:
//!
//! ```text
//!  NORMAL  vim                                         3/11
//! ```

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status line displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    pub mode_label: String,
    pub scheme_name: &'a str,
    pub insert_mode: bool,
    pub cursor: usize,
    pub len: usize,
}

/// Builds the status line, padded to `width` so the cursor offset sits at
/// the right edge.
pub fn status_line<'a>(info: &StatusInfo<'a>, width: usize, colors: &ThemeColors) -> Line<'a> {
    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let mode_color = if info.insert_mode {
        colors.mode_insert
    } else {
        colors.mode_normal
    };
    let mode_style = Style::default()
        .fg(colors.status_line_bg)
        .bg(mode_color)
        .add_modifier(Modifier::BOLD);

    let badge = format!(" {} ", info.mode_label);
    let scheme = format!(" {}", info.scheme_name);
    let position = format!("{}/{} ", info.cursor, info.len);

    let left_len = badge.len() + scheme.len();
    // Ensure we don't overflow
    let padding = if left_len + position.len() < width {
        width - left_len - position.len()
    } else {
        1
    };

    Line::from(vec![
        Span::styled(badge, mode_style),
        Span::styled(scheme, default_style),
        Span::styled(" ".repeat(padding), default_style),
        Span::styled(position, default_style),
    ])
}

/// Renders the status line into `area`.
pub fn render_status_line(f: &mut Frame, area: Rect, info: &StatusInfo<'_>, colors: &ThemeColors) {
    let line = status_line(info, area.width as usize, colors);
    f.render_widget(Paragraph::new(line), area);
}
