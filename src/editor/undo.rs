//! Undo/redo history built from whole-buffer snapshots.
//!
//! Every mutating command pushes the state it is about to replace onto the
//! undo stack. Undo and redo shuttle snapshots between the two stacks, so
//! any sequence of undos can be walked back with redos until a fresh edit
//! clears the redo side.
//!
//! # Architecture
//!
//! - `Snapshot`: Captures buffer content and cursor at a point in time
//! - `History`: Owns the undo and redo stacks and enforces the size limit

/// Snapshot of buffer state at a specific point in time.
///
/// Contains only the state needed to restore the buffer to this point:
/// - The raw content bytes
/// - The cursor offset into that content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub content: Vec<u8>,
    pub cursor: usize,
}

impl Snapshot {
    /// Creates a new snapshot.
    pub fn new(content: Vec<u8>, cursor: usize) -> Self {
        Self { content, cursor }
    }
}

/// Linear undo/redo history.
///
/// The undo stack holds states older than the current one, newest last.
/// The redo stack holds states that were undone, most recently undone last.
///
/// # Example
///
/// ```text
///   undo: [s0, s1, s2]   current: s3   redo: []
///   undo()  ->  undo: [s0, s1]   current: s2   redo: [s3]
///   redo()  ->  undo: [s0, s1, s2]   current: s3   redo: []
/// ```
#[derive(Debug, Clone)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    limit: usize,
}

impl History {
    /// Creates an empty history.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of undo snapshots to keep (0 = unbounded)
    pub fn new(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Returns the snapshot limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of snapshots available to redo.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Records the state that is about to be modified.
    ///
    /// A snapshot identical to the top of the undo stack is dropped. The
    /// redo stack is always cleared, since a new edit forks away from any
    /// undone future.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.redo.clear();

        if self.undo.last() == Some(&snapshot) {
            return;
        }

        self.undo.push(snapshot);

        if self.limit > 0 && self.undo.len() > self.limit {
            let excess = self.undo.len() - self.limit;
            self.undo.drain(..excess);
        }
    }

    /// Steps back one snapshot.
    ///
    /// `current` is the state being left; it becomes redoable. Returns the
    /// snapshot to restore, or None if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Steps forward one snapshot.
    ///
    /// `current` is the state being left; it becomes undoable again without
    /// clearing the rest of the redo stack. Returns the snapshot to restore,
    /// or None if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(0)
    }
}
