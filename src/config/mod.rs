//! Configuration system for linequill.
//!
//! Settings live in a TOML file at `~/.config/linequill/config.toml`. Every
//! field has a default, so a partial file (or none at all) is fine.
//! Command-line flags are applied on top by the binary.
//!
//! # Example
//!
//! ```
//! use linequill::config::Config;
//! use linequill::scheme::SchemeKind;
//!
//! let config = Config::default();
//! assert_eq!(config.scheme, SchemeKind::Vim);
//! assert_eq!(config.undo_limit, 50);
//!
//! let custom = Config {
//!     scheme: SchemeKind::Emacs,
//!     ..Config::default()
//! };
//! assert_eq!(custom.prompt, "> ");
//! ```

use crate::scheme::emacs::CtrlYAction;
use crate::scheme::{EmacsScheme, KeyScheme, SchemeKind, VimScheme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the linequill application.
///
/// # Fields
///
/// * `scheme` - Active key scheme (default: vim)
/// * `undo_limit` - Maximum undo snapshots, 0 for unbounded (default: 50)
/// * `theme` - Color scheme name (default: "default-dark")
/// * `prompt` - Prompt string drawn before the text (default: "> ")
/// * `normal_cursor_tag` - Markup tag for the Normal mode cursor (default: "reverse")
/// * `insert_cursor_tag` - Markup tag for the Insert mode cursor (default: "underline")
/// * `emacs_ctrl_y` - What Ctrl-Y does in the Emacs scheme (default: redo)
/// * `log_file` - Where tracing output goes (default: none)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Active key scheme
    #[serde(default)]
    pub scheme: SchemeKind,

    /// Maximum number of undo snapshots to keep
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,

    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Markup tag for the block cursor
    #[serde(default = "default_normal_cursor_tag")]
    pub normal_cursor_tag: String,

    /// Markup tag for the bar cursor
    #[serde(default = "default_insert_cursor_tag")]
    pub insert_cursor_tag: String,

    /// Ctrl-Y binding in the Emacs scheme
    #[serde(default)]
    pub emacs_ctrl_y: CtrlYAction,

    /// Tracing output file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Returns the default undo limit.
fn default_undo_limit() -> usize {
    50
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_normal_cursor_tag() -> String {
    "reverse".to_string()
}

fn default_insert_cursor_tag() -> String {
    "underline".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::default(),
            undo_limit: default_undo_limit(),
            theme: default_theme(),
            prompt: default_prompt(),
            normal_cursor_tag: default_normal_cursor_tag(),
            insert_cursor_tag: default_insert_cursor_tag(),
            emacs_ctrl_y: CtrlYAction::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/linequill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("linequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Builds the configured key scheme.
    pub fn build_scheme(&self) -> Box<dyn KeyScheme> {
        match self.scheme {
            SchemeKind::Emacs => Box::new(EmacsScheme::with_ctrl_y(self.emacs_ctrl_y)),
            SchemeKind::Vim => Box::new(VimScheme::new()),
        }
    }
}
