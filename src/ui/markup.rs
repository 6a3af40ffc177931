//! Tag-markup rendering of a buffer with its cursor.
//!
//! Front ends that draw through a tag-styled text widget take the buffer as
//! a single string in which the cursor cell is wrapped in `[tag]...[-]`.
//! The tag names are supplied by the caller, usually from
//! `normal_cursor_tag` / `insert_cursor_tag` in the config.
//!
//! A literal `[` in the text is written as `[[` so it can never open a tag.
//!
//! # Example
//!
//! ```
//! use linequill::editor::LineBuffer;
//! use linequill::ui::markup::{render_markup, CursorStyle};
//!
//! let mut buffer = LineBuffer::with_text("abc", 0);
//! buffer.set_cursor(1);
//! assert_eq!(render_markup(&buffer, "reverse", CursorStyle::Block), "a[reverse]b[-]c");
//! ```

use crate::config::Config;
use crate::editor::LineBuffer;
use crate::scheme::KeyScheme;

/// Glyph drawn where there is no character to highlight.
pub const PLACEHOLDER: char = ' ';

/// Glyph drawn between characters by the bar cursor.
pub const BAR_GLYPH: char = '▏';

/// How the cursor is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// Highlights the character under the cursor (Normal mode).
    Block,
    /// Draws a glyph in the gap before the character under the cursor
    /// (Insert mode).
    Bar,
}

fn escape(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('[', "[[")
}

fn tagged(tag: &str, body: &str) -> String {
    format!("[{}]{}[-]", tag, body)
}

/// Renders `buffer` with its cursor wrapped in `tag`.
///
/// - An empty buffer renders a lone placeholder cursor.
/// - [`CursorStyle::Block`] wraps the character under the cursor, or a
///   trailing placeholder at the end of the text.
/// - [`CursorStyle::Bar`] inserts [`BAR_GLYPH`] between the characters;
///   at the end of the text it trails the text.
pub fn render_markup(buffer: &LineBuffer, tag: &str, style: CursorStyle) -> String {
    let bytes = buffer.as_bytes();
    let cursor = buffer.cursor();

    if bytes.is_empty() {
        let glyph = match style {
            CursorStyle::Block => PLACEHOLDER,
            CursorStyle::Bar => BAR_GLYPH,
        };
        return tagged(tag, &glyph.to_string());
    }

    let before = escape(&bytes[..cursor]);
    match style {
        CursorStyle::Block => match buffer.char_at_cursor() {
            Some(b) => format!(
                "{}{}{}",
                before,
                tagged(tag, &escape(&[b])),
                escape(&bytes[cursor + 1..])
            ),
            None => format!("{}{}", before, tagged(tag, &PLACEHOLDER.to_string())),
        },
        CursorStyle::Bar => format!(
            "{}{}{}",
            before,
            tagged(tag, &BAR_GLYPH.to_string()),
            escape(&bytes[cursor..])
        ),
    }
}

/// Renders `buffer` the way `scheme` currently wants its cursor drawn.
///
/// Insert mode uses a bar cursor tagged with `insert_cursor_tag`; otherwise
/// a block cursor tagged with `normal_cursor_tag`.
pub fn render_for(buffer: &LineBuffer, scheme: &dyn KeyScheme, config: &Config) -> String {
    if scheme.in_insert_mode() {
        render_markup(buffer, &config.insert_cursor_tag, CursorStyle::Bar)
    } else {
        render_markup(buffer, &config.normal_cursor_tag, CursorStyle::Block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(text: &str, cursor: usize) -> LineBuffer {
        let mut buffer = LineBuffer::with_text(text, 0);
        buffer.set_cursor(cursor);
        buffer
    }

    #[test]
    fn test_empty_buffer_placeholder() {
        let buffer = LineBuffer::new(0);
        assert_eq!(render_markup(&buffer, "reverse", CursorStyle::Block), "[reverse] [-]");
        assert_eq!(render_markup(&buffer, "underline", CursorStyle::Bar), "[underline]▏[-]");
    }

    #[test]
    fn test_block_cursor_at_end_uses_placeholder() {
        let buffer = buffer_at("abc", 3);
        assert_eq!(render_markup(&buffer, "r", CursorStyle::Block), "abc[r] [-]");
    }

    #[test]
    fn test_bar_cursor_between_characters() {
        let buffer = buffer_at("abc", 1);
        assert_eq!(render_markup(&buffer, "u", CursorStyle::Bar), "a[u]▏[-]bc");

        let buffer = buffer_at("abc", 3);
        assert_eq!(render_markup(&buffer, "u", CursorStyle::Bar), "abc[u]▏[-]");
    }

    #[test]
    fn test_brackets_are_escaped() {
        let buffer = buffer_at("[x]", 0);
        assert_eq!(render_markup(&buffer, "r", CursorStyle::Block), "[r][[[-]x]");
    }

    #[test]
    fn test_render_for_uses_configured_tags() {
        use crate::scheme::{EmacsScheme, VimScheme};

        let config = Config {
            normal_cursor_tag: "nc".to_string(),
            insert_cursor_tag: "ic".to_string(),
            ..Config::default()
        };
        let buffer = buffer_at("ab", 1);

        assert_eq!(render_for(&buffer, &VimScheme::new(), &config), "a[nc]b[-]");
        assert_eq!(render_for(&buffer, &EmacsScheme::new(), &config), "a[ic]▏[-]b");
    }
}
