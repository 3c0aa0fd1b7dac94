//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in (`catppuccin-mocha`, the
//! default, and `catppuccin-latte`); a custom file can be supplied through the
//! `theme_file` option.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#f5c2e7"
//! chip_fg = "#bac2de"
//! chip_active_fg = "#1e1e2e"
//! chip_active_bg = "#89b4fa"
//! card_fg = "#cdd6f4"
//! detail_border = "#f5c2e7"
//! link_fg = "#89dceb"
//! status_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! tier_label_fg = "#1e1e2e"
//!
//! [colors.tiers]
//! s = "#f38ba8"
//! a = "#fab387"
//! b = "#f9e2af"
//! c = "#a6e3a1"
//! d = "#89b4fa"
//! ```

use crate::domain::error::{Result, TierListError};
use crate::domain::Tier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, all hex strings such as `"#cdd6f4"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text (footer, labels in the detail panel).
    pub text_dim: String,
    pub border: String,

    /// Card under the keyboard cursor.
    pub cursor_fg: String,
    pub cursor_bg: String,

    /// Inactive filter chips.
    pub chip_fg: String,
    pub chip_active_fg: String,
    pub chip_active_bg: String,

    pub card_fg: String,

    pub detail_border: String,
    /// Background of the detail panel. Terminal default when unset.
    #[serde(default)]
    pub detail_bg: Option<String>,

    pub link_fg: String,
    /// Loading notice.
    pub status_fg: String,
    /// Load failure notice.
    pub error_fg: String,

    /// Text drawn on top of the tier label blocks.
    pub tier_label_fg: String,
    pub tiers: TierColors,
}

/// Background colors of the tier label blocks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TierColors {
    pub s: String,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl TierColors {
    /// Color for one tier.
    #[must_use]
    pub fn for_tier(&self, tier: Tier) -> &str {
        match tier {
            Tier::S => &self.s,
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
            Tier::D => &self.d,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tierlist::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TierListError::Theme`] if the file cannot be read or is not a
    /// valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TierListError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| TierListError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
