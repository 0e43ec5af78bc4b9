//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes for the terminal front, supporting the two built-in Drip
//! City palettes and custom themes loaded from TOML files. Also provides the
//! helpers that turn hex colors into 24-bit ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `dripcity-dark`: gold on black, the marketplace's house style (default)
//! - `dripcity-light`: the same accents on a light background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#eab308"
//! selection_fg = "#000000"
//! selection_bg = "#eab308"
//! text_normal = "#d1d5db"
//! text_dim = "#6b7280"
//! border = "#1f2937"
//! search_bar_border = "#eab308"
//! match_highlight_fg = "#000000"
//! match_highlight_bg = "#facc15"
//! empty_state_fg = "#9ca3af"
//! verified_fg = "#eab308"
//! error_fg = "#fca5a5"
//! ```

use crate::domain::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#eab308"). Optional fields default to
/// `None`, letting themes opt out of background styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Verified-vendor marker color.
    pub verified_fg: String,

    /// Error banner color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `dripcity-dark`, `dripcity-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```
    /// use dripcity::ui::Theme;
    ///
    /// let theme = Theme::from_name("dripcity-dark").unwrap();
    /// assert_eq!(theme.name, "dripcity-dark");
    /// assert!(Theme::from_name("no-such-theme").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dripcity-dark" => include_str!("../../themes/dripcity-dark.toml"),
            "dripcity-light" => include_str!("../../themes/dripcity-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MarketError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| MarketError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and falls back to white on any parse
    /// problem, keeping rendering alive with a bad theme file.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`dripcity-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme fails to parse, which would be a
    /// build defect rather than a runtime condition.
    fn default() -> Self {
        Self::from_name("dripcity-dark").expect("built-in dripcity-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_builtin_themes_parse() {
        assert_eq!(Theme::from_name("dripcity-dark").unwrap().name, "dripcity-dark");
        assert_eq!(Theme::from_name("dripcity-light").unwrap().name, "dripcity-light");
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nonsense"), Theme::fg("#ffffff"));
    }

    #[test]
    fn from_file_reports_theme_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            Theme::from_file(&path),
            Err(MarketError::Theme(_))
        ));
    }
}
