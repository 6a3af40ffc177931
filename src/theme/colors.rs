//! Color definitions for linequill themes.
//!
//! [`ThemeColors`] holds every color the prompt and status line use. The
//! two cursor colors let Normal and Insert mode read differently at a
//! glance.

use ratatui::style::Color;

/// Defines all colors used in a linequill theme.
///
/// # Examples
///
/// ```
/// use linequill::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let dark = ThemeColors::default_dark();
/// assert_eq!(dark.background, Color::Reset);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Main background color.
    pub background: Color,
    /// Color of the edited text.
    pub foreground: Color,
    /// Color of the prompt string in front of the text.
    pub prompt: Color,
    /// Block cursor color in Normal mode.
    pub cursor_normal: Color,
    /// Bar cursor color in Insert mode.
    pub cursor_insert: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Mode badge color for Normal and operator-pending.
    pub mode_normal: Color,
    /// Mode badge color for Insert.
    pub mode_insert: Color,
    /// Color of hints shown when the buffer is empty.
    pub placeholder: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses plain ANSI colors so the terminal's own palette shows through.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            prompt: Color::LightBlue,
            cursor_normal: Color::LightBlue,
            cursor_insert: Color::Green,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            mode_normal: Color::Blue,
            mode_insert: Color::Green,
            placeholder: Color::DarkGray,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            prompt: Color::Rgb(166, 38, 164),
            cursor_normal: Color::Rgb(82, 139, 255),
            cursor_insert: Color::Rgb(80, 161, 79),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            mode_normal: Color::Rgb(1, 132, 188),
            mode_insert: Color::Rgb(80, 161, 79),
            placeholder: Color::Rgb(160, 161, 167),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            prompt: Color::Rgb(251, 184, 108),     // orange
            cursor_normal: Color::Rgb(251, 184, 108),
            cursor_insert: Color::Rgb(184, 187, 38), // green
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            mode_normal: Color::Rgb(131, 165, 152), // aqua
            mode_insert: Color::Rgb(184, 187, 38),
            placeholder: Color::Rgb(146, 131, 116), // gray
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            prompt: Color::Rgb(136, 192, 208),      // frost cyan
            cursor_normal: Color::Rgb(136, 192, 208),
            cursor_insert: Color::Rgb(163, 190, 140), // aurora green
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),
            mode_normal: Color::Rgb(129, 161, 193),
            mode_insert: Color::Rgb(163, 190, 140),
            placeholder: Color::Rgb(76, 86, 106),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            prompt: Color::Rgb(255, 121, 198),      // pink
            cursor_normal: Color::Rgb(189, 147, 249), // purple
            cursor_insert: Color::Rgb(80, 250, 123),  // green
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),
            mode_normal: Color::Rgb(189, 147, 249),
            mode_insert: Color::Rgb(80, 250, 123),
            placeholder: Color::Rgb(98, 114, 164),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::default_dark()
    }
}
