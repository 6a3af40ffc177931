//! The one-line edit prompt.

use crate::editor::LineBuffer;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Builds the prompt line: prompt string, text before the cursor, the
/// cursor cell, and the text after it.
///
/// In Normal mode the cursor cell is a block (inverted colors); in Insert
/// mode it is underlined in the insert cursor color. At the end of the text
/// the cursor cell is a space.
pub fn prompt_line<'a>(
    buffer: &LineBuffer,
    prompt: &'a str,
    insert_mode: bool,
    colors: &ThemeColors,
) -> Line<'a> {
    let text_style = Style::default().fg(colors.foreground).bg(colors.background);
    let bytes = buffer.as_bytes();
    let cursor = buffer.cursor();

    let at_cursor = match bytes.get(cursor) {
        Some(&b) => String::from_utf8_lossy(&[b]).into_owned(),
        None => " ".to_string(),
    };
    let after = bytes
        .get(cursor + 1..)
        .map(|rest| String::from_utf8_lossy(rest).into_owned())
        .unwrap_or_default();

    let cursor_style = if insert_mode {
        text_style
            .fg(colors.cursor_insert)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(colors.background)
            .bg(colors.cursor_normal)
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(colors.prompt)
                .bg(colors.background)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer.text_before_cursor(), text_style),
        Span::styled(at_cursor, cursor_style),
    ];

    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }

    Line::from(spans)
}

/// Renders the prompt into `area`.
pub fn render_prompt(
    f: &mut Frame,
    area: Rect,
    buffer: &LineBuffer,
    prompt: &str,
    insert_mode: bool,
    colors: &ThemeColors,
) {
    let line = prompt_line(buffer, prompt, insert_mode, colors);
    let widget = Paragraph::new(line).style(Style::default().bg(colors.background));
    f.render_widget(widget, area);
}
