//! Buffer, history and modal bookkeeping shared by the key schemes.
//!
//! # Modules
//!
//! - `buffer`: The single-line text buffer and its edit primitives
//! - `undo`: Snapshot-based undo/redo history
//! - `mode`: Vim scheme mode enumeration
//! - `repeat`: Records of repeatable changes for the '.' key
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::VimMode;
//!
//! // The vim scheme starts in Normal mode
//! let mode = VimMode::default();
//! assert_eq!(mode, VimMode::Normal);
//! ```

pub mod buffer;
pub mod mode;
pub mod repeat;
pub mod undo;

pub use buffer::LineBuffer;
