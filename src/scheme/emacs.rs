//! Emacs-style (readline-like) key scheme.
//!
//! There is no mode: printable keys are always inserted and control keys
//! run fixed editing commands. Every command that changes the text saves
//! an undo snapshot first, so undo walks back one command at a time.

use super::{Event, KeyScheme};
use crate::editor::LineBuffer;
use crate::input::keys::Key;
use crate::motion::word;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What Ctrl-Y does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtrlYAction {
    #[default]
    Redo,
    Undo,
}

/// Linear editing scheme.
#[derive(Debug, Clone, Default)]
pub struct EmacsScheme {
    ctrl_y: CtrlYAction,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// End of the next word (Alt-f): skip non-word bytes, then word bytes.
fn forward_word(text: &[u8], pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while p < text.len() && !is_word_byte(text[p]) {
        p += 1;
    }
    while p < text.len() && is_word_byte(text[p]) {
        p += 1;
    }
    p
}

/// Start of the previous word (Alt-b).
fn backward_word(text: &[u8], pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while p > 0 && !is_word_byte(text[p - 1]) {
        p -= 1;
    }
    while p > 0 && is_word_byte(text[p - 1]) {
        p -= 1;
    }
    p
}

/// Deletes `[start, end)` after saving a snapshot; no-op for empty ranges.
fn delete_span(buffer: &mut LineBuffer, start: usize, end: usize) -> Event {
    let end = end.min(buffer.len());
    if start >= end {
        return Event::consumed();
    }
    buffer.save_state();
    buffer.delete_range(start, end);
    Event::changed()
}

fn transpose(buffer: &mut LineBuffer) -> Event {
    let len = buffer.len();
    let cursor = buffer.cursor();
    if len < 2 || cursor == 0 {
        return Event::consumed();
    }

    let (left, new_cursor) = if cursor >= len {
        (len - 2, len)
    } else {
        (cursor - 1, cursor + 1)
    };

    let mut content = buffer.as_bytes().to_vec();
    content.swap(left, left + 1);

    buffer.save_state();
    buffer.set_bytes(content);
    buffer.set_cursor(new_cursor);
    Event::changed()
}

impl EmacsScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scheme with the given Ctrl-Y binding.
    pub fn with_ctrl_y(ctrl_y: CtrlYAction) -> Self {
        Self { ctrl_y }
    }

    pub fn ctrl_y(&self) -> CtrlYAction {
        self.ctrl_y
    }
}

impl KeyScheme for EmacsScheme {
    fn name(&self) -> &'static str {
        "emacs"
    }

    fn in_insert_mode(&self) -> bool {
        true
    }

    fn handle_key(&mut self, buffer: &mut LineBuffer, bytes: &[u8]) -> Event {
        let key = Key::parse(bytes);
        let cursor = buffer.cursor();

        match key {
            Key::Char(ch) => {
                buffer.save_state();
                buffer.insert(ch);
                Event::changed()
            }
            Key::Enter => Event::submit(),
            Key::Esc => Event::cancel(),

            Key::Left | Key::Ctrl(b'b') => {
                buffer.left();
                Event::consumed()
            }
            Key::Right | Key::Ctrl(b'f') => {
                buffer.right();
                Event::consumed()
            }
            Key::Home | Key::Ctrl(b'a') => {
                buffer.home();
                Event::consumed()
            }
            Key::End | Key::Ctrl(b'e') => {
                buffer.end();
                Event::consumed()
            }
            Key::Alt(b'b') => {
                buffer.set_cursor(backward_word(buffer.as_bytes(), cursor));
                Event::consumed()
            }
            Key::Alt(b'f') => {
                buffer.set_cursor(forward_word(buffer.as_bytes(), cursor));
                Event::consumed()
            }

            Key::Backspace => delete_span(buffer, cursor.saturating_sub(1), cursor),
            Key::Ctrl(b'd') => delete_span(buffer, cursor, cursor + 1),
            Key::Ctrl(b'w') => {
                let start = word::prev_word_start(buffer.as_bytes(), cursor, true);
                delete_span(buffer, start, cursor)
            }
            Key::Alt(b'd') => {
                let end = forward_word(buffer.as_bytes(), cursor);
                delete_span(buffer, cursor, end)
            }
            Key::Ctrl(b'k') => {
                let len = buffer.len();
                delete_span(buffer, cursor, len)
            }
            Key::Ctrl(b'u') => {
                if cursor == 0 {
                    return Event::consumed();
                }
                buffer.save_state();
                Event::handled(buffer.kill_to_start())
            }
            Key::Ctrl(b't') => transpose(buffer),

            Key::Ctrl(b'z') | Key::Ctrl(b'_') => Event::handled(buffer.undo()),
            Key::Ctrl(b'y') => match self.ctrl_y {
                CtrlYAction::Redo => Event::handled(buffer.redo()),
                CtrlYAction::Undo => Event::handled(buffer.undo()),
            },

            other => {
                trace!(?other, "emacs scheme ignored key");
                Event::ignored()
            }
        }
    }
}
