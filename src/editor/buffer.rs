//! Single-line text buffer with cursor and snapshot history.
//!
//! `LineBuffer` owns the text being edited and the cursor offset into it.
//! Content is stored as raw bytes: editing is ASCII-oriented and anything
//! outside ASCII is carried through untouched as opaque bytes.
//!
//! The cursor invariant `0 <= cursor <= len` holds after every operation.
//! All primitives are total; boundary conditions report `false` or do
//! nothing rather than failing.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::LineBuffer;
//!
//! let mut buffer = LineBuffer::new(0);
//! buffer.insert_str("hello");
//! assert_eq!(buffer.text(), "hello");
//! assert_eq!(buffer.cursor(), 5);
//!
//! buffer.save_state();
//! buffer.delete_backward();
//! assert_eq!(buffer.text(), "hell");
//!
//! assert!(buffer.undo());
//! assert_eq!(buffer.text(), "hello");
//! ```

use super::undo::{History, Snapshot};

/// A single-line editable buffer.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    content: Vec<u8>,
    cursor: usize,
    history: History,
}

impl LineBuffer {
    /// Creates an empty buffer.
    ///
    /// # Arguments
    ///
    /// * `history_limit` - Maximum number of undo snapshots (0 = unbounded)
    pub fn new(history_limit: usize) -> Self {
        Self {
            content: Vec::new(),
            cursor: 0,
            history: History::new(history_limit),
        }
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    ///
    /// No undo snapshot is recorded for the initial text.
    pub fn with_text(text: &str, history_limit: usize) -> Self {
        let content = text.as_bytes().to_vec();
        let cursor = content.len();
        Self {
            content,
            cursor,
            history: History::new(history_limit),
        }
    }

    /// Returns the content as text. Invalid UTF-8 is replaced lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Returns the raw content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamping to the content length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.content.len());
    }

    /// Returns the byte under the cursor, if any.
    pub fn char_at_cursor(&self) -> Option<u8> {
        self.content.get(self.cursor).copied()
    }

    /// Text before the cursor.
    pub fn text_before_cursor(&self) -> String {
        String::from_utf8_lossy(&self.content[..self.cursor]).into_owned()
    }

    /// Text from the cursor to the end.
    pub fn text_after_cursor(&self) -> String {
        String::from_utf8_lossy(&self.content[self.cursor..]).into_owned()
    }

    /// Read access to the undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Splices `ch` at the cursor and advances past it.
    pub fn insert(&mut self, ch: u8) {
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Inserts each byte of `s` in order.
    pub fn insert_str(&mut self, s: &str) {
        self.insert_bytes(s.as_bytes());
    }

    /// Inserts raw bytes at the cursor and advances past them.
    pub fn insert_bytes(&mut self, bytes: &[u8]) {
        let tail = self.content.split_off(self.cursor);
        self.content.extend_from_slice(bytes);
        self.content.extend_from_slice(&tail);
        self.cursor += bytes.len();
    }

    /// Removes the character before the cursor.
    ///
    /// Returns false at the start of the buffer.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);
        true
    }

    /// Removes the character under the cursor.
    ///
    /// Returns false at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    /// Moves the cursor one position left. Returns whether it moved.
    pub fn left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor one position right. Returns whether it moved.
    pub fn right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Replaces the entire content and moves the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.set_bytes(text.as_bytes().to_vec());
    }

    /// Byte-level form of [`LineBuffer::set`].
    pub fn set_bytes(&mut self, content: Vec<u8>) {
        self.content = content;
        self.cursor = self.content.len();
    }

    /// Removes `[start, end)` and places the cursor at `start`.
    ///
    /// The range is clamped to the content; returns false if nothing was
    /// removed.
    pub fn delete_range(&mut self, start: usize, end: usize) -> bool {
        let end = end.min(self.content.len());
        let start = start.min(end);
        if start == end {
            self.cursor = start.min(self.content.len());
            return false;
        }

        let mut next = self.content[..start].to_vec();
        next.extend_from_slice(&self.content[end..]);
        self.set_bytes(next);
        self.cursor = start;
        true
    }

    /// Overwrites the byte at `pos`. Returns false if `pos` is out of range.
    pub fn replace_at(&mut self, pos: usize, ch: u8) -> bool {
        match self.content.get_mut(pos) {
            Some(slot) => {
                *slot = ch;
                true
            }
            None => false,
        }
    }

    /// Deletes from the cursor to the end. Returns whether anything was removed.
    pub fn kill_to_end(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.truncate(self.cursor);
        true
    }

    /// Deletes from the start to the cursor. Returns whether anything was removed.
    pub fn kill_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.content.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    /// Empties the buffer. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.content.is_empty();
        self.content.clear();
        self.cursor = 0;
        had_content
    }

    /// Records the current state for undo and clears the redo stack.
    ///
    /// Callers invoke this immediately before mutating.
    pub fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.save(snapshot);
    }

    /// Restores the most recently saved state. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Reapplies the most recently undone state. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.content.clone(), self.cursor)
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.content = snapshot.content;
        self.cursor = snapshot.cursor.min(self.content.len());
    }
}
