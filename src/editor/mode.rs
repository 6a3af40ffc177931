//! Vim scheme mode management.
//!
//! This module provides the `VimMode` enum that represents the current state
//! of the modal interpreter. Following vim-style modal editing, keystrokes are
//! interpreted differently depending on the mode.
//!
//! # Modes
//!
//! - **Normal**: The default mode for motions and commands
//! - **Insert**: Typed characters are inserted into the buffer
//! - **OperatorPending**: An operator (`d`, `c`, `y`) waits for its target
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::VimMode;
//!
//! let mode = VimMode::default();
//! assert_eq!(mode, VimMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current mode of the vim key scheme.
///
/// `OperatorPending` is only ever entered from `Normal` and always leaves
/// after a single target keystroke (or Escape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VimMode {
    /// Normal mode for motions and commands.
    #[default]
    Normal,
    /// Insert mode for typing text.
    Insert,
    /// An operator is waiting for a motion, text object or find.
    OperatorPending,
}

impl fmt::Display for VimMode {
    /// Formats the mode as an uppercase string suitable for a status line.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::editor::mode::VimMode;
    ///
    /// assert_eq!(format!("{}", VimMode::Insert), "INSERT");
    /// assert_eq!(format!("{}", VimMode::OperatorPending), "O-PENDING");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VimMode::Normal => write!(f, "NORMAL"),
            VimMode::Insert => write!(f, "INSERT"),
            VimMode::OperatorPending => write!(f, "O-PENDING"),
        }
    }
}
