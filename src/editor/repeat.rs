//! Repeatable command tracking for the '.' key.

use crate::motion::{FindKind, Motion, TextObject};

/// Operators that act on a range produced by a motion, text object or find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `d`
    Delete,
    /// `c`
    Change,
    /// `y` (no register is written; only the cursor moves)
    Yank,
}

impl Operator {
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'd' => Some(Operator::Delete),
            b'c' => Some(Operator::Change),
            b'y' => Some(Operator::Yank),
            _ => None,
        }
    }

    pub fn key(self) -> u8 {
        match self {
            Operator::Delete => b'd',
            Operator::Change => b'c',
            Operator::Yank => b'y',
        }
    }
}

/// Single-key changes that need no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    /// `x`
    DeleteChar,
    /// `X`
    DeleteCharBefore,
    /// `D`
    DeleteToEnd,
    /// `~`
    ToggleCase,
    /// `dd`
    DeleteLine,
}

/// Commands that enter insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertEntry {
    /// `i`
    Insert,
    /// `a`
    Append,
    /// `I`
    InsertAtStart,
    /// `A`
    AppendAtEnd,
    /// `s`
    Substitute,
    /// `S` and `cc`
    SubstituteLine,
    /// `C`
    ChangeToEnd,
}

impl InsertEntry {
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'i' => Some(InsertEntry::Insert),
            b'a' => Some(InsertEntry::Append),
            b'I' => Some(InsertEntry::InsertAtStart),
            b'A' => Some(InsertEntry::AppendAtEnd),
            b's' => Some(InsertEntry::Substitute),
            b'S' => Some(InsertEntry::SubstituteLine),
            b'C' => Some(InsertEntry::ChangeToEnd),
            _ => None,
        }
    }

    /// Entries whose count repeats the typed text on leaving insert mode.
    pub fn repeats_text(self) -> bool {
        matches!(
            self,
            InsertEntry::Insert
                | InsertEntry::Append
                | InsertEntry::InsertAtStart
                | InsertEntry::AppendAtEnd
        )
    }
}

/// Represents the most recent change that can be replayed with '.'.
///
/// Each variant captures what is needed to recompute the change against
/// whatever the buffer and cursor look like at replay time. `typed` holds
/// the text entered in the insert session that followed a change
/// operator; it is empty for delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastChange {
    /// `x`, `X`, `D`, `~`, `dd`
    Simple { command: SimpleCommand, count: usize },

    /// Operator plus motion (`dw`, `c3e`, `d$`)
    Motion {
        operator: Operator,
        motion: Motion,
        count: usize,
        typed: String,
    },

    /// Operator plus text object (`diw`, `ca"`)
    TextObject {
        operator: Operator,
        object: TextObject,
        inner: bool,
        count: usize,
        typed: String,
    },

    /// Operator plus character find (`dfx`, `ct,`)
    Find {
        operator: Operator,
        kind: FindKind,
        target: u8,
        count: usize,
        typed: String,
    },

    /// `r<char>`
    Replace { ch: u8, count: usize },

    /// Insert session entered with `i a I A s S C` or `cc`
    Insert {
        entry: InsertEntry,
        count: usize,
        typed: String,
    },
}

impl LastChange {
    /// The count the change was recorded with.
    pub fn count(&self) -> usize {
        match self {
            LastChange::Simple { count, .. }
            | LastChange::Motion { count, .. }
            | LastChange::TextObject { count, .. }
            | LastChange::Find { count, .. }
            | LastChange::Replace { count, .. }
            | LastChange::Insert { count, .. } => *count,
        }
    }

    /// Returns the change with its count replaced.
    pub fn with_count(mut self, new_count: usize) -> Self {
        match &mut self {
            LastChange::Simple { count, .. }
            | LastChange::Motion { count, .. }
            | LastChange::TextObject { count, .. }
            | LastChange::Find { count, .. }
            | LastChange::Replace { count, .. }
            | LastChange::Insert { count, .. } => *count = new_count,
        }
        self
    }

    /// Returns the change with the insert-session text attached. Variants
    /// without an insert session are returned unchanged.
    pub fn with_typed(mut self, text: String) -> Self {
        match &mut self {
            LastChange::Motion { typed, .. }
            | LastChange::TextObject { typed, .. }
            | LastChange::Find { typed, .. }
            | LastChange::Insert { typed, .. } => *typed = text,
            LastChange::Simple { .. } | LastChange::Replace { .. } => {}
        }
        self
    }
}
