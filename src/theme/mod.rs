//! Theme system for linequill.
//!
//! This module provides:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors that follow the terminal palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Warm, earthy tones
//! - `"nord"`: Arctic, north-bluish palette
//! - `"dracula"`: Vibrant purples and pinks
//!
//! # Examples
//!
//! ```
//! use linequill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the prompt UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name.
///
/// # Returns
///
/// - `Some(Theme)` if the theme name is recognized
/// - `None` if the theme name is not found
///
/// # Examples
///
/// ```
/// use linequill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("nord").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a list of all available built-in theme names, sorted.
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "dracula".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
    ];
    themes.sort();
    themes
}
