//! Configuration file support for enchant
//!
//! Config file location: `~/.config/enchant/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [text]
//! color = "#FF000000"
//! size = 18.0
//! fade_in = false
//! gravity = "center_horizontal|center_vertical"
//! interpolator = "bounce"
//! typeface = "/usr/share/fonts/TTF/Inter.ttf"
//!
//! [playback]
//! animation_steps = 50
//! autoplay = false
//! speed = 1000
//! tick = 16
//!
//! [ui]
//! background = "#FFFFFFFF"
//! padding = 1
//! fill_width = false
//! words = ["January", "February", "March"]
//! ```

use enchant_core::{
    Argb, Gravity, Interpolator, DEFAULT_ANIMATION_STEPS, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Words cycled through when none are given
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Text appearance
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// ARGB color, `#AARRGGBB`, `#RRGGBB` or a color name
    pub color: Argb,
    /// Text size; 18 is one terminal cell per column
    pub size: f32,
    /// Fade in characters that have no counterpart in the previous word
    pub fade_in: bool,
    /// Placement inside the box, e.g. "end|bottom"
    pub gravity: Gravity,
    /// Motion curve for shifting characters
    pub interpolator: Interpolator,
    /// Typeface asset; falls back to the default when it can't be loaded
    pub typeface: Option<PathBuf>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_TEXT_COLOR,
            size: DEFAULT_TEXT_SIZE,
            fade_in: false,
            gravity: Gravity::default(),
            interpolator: Interpolator::default(),
            typeface: None,
        }
    }
}

/// Playback configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Frames per transition (at least 2)
    pub animation_steps: u32,
    /// Start with autoplay enabled
    pub autoplay: bool,
    /// Autoplay delay between words in milliseconds
    pub speed: u64,
    /// Frame tick in milliseconds
    pub tick: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            animation_steps: DEFAULT_ANIMATION_STEPS,
            autoplay: false,
            speed: 1000,
            tick: 16,
        }
    }
}

/// UI configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Box background the text color is blended over
    pub background: Argb,
    /// Cells of padding left and right of the text
    pub padding: u16,
    /// Stretch the box over the full width so gravity has room to act
    pub fill_width: bool,
    /// Words to cycle through
    pub words: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background: Argb::WHITE,
            padding: 1,
            fill_width: false,
            words: MONTHS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Root configuration
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub text: TextConfig,
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("enchant").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("enchant").join("config.toml"));
        }

        // Platform-specific config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("enchant").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from the first existing config path.
    /// Returns default config if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        tracing::debug!("loading config from {}", path.display());
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                // Runs before the terminal is taken over, so stderr is still visible
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                eprintln!("Warning: Failed to parse config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchant_core::{HorizontalGravity, VerticalGravity};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.text.color, Argb::BLACK);
        assert_eq!(config.text.size, 18.0);
        assert!(!config.text.fade_in);
        assert_eq!(config.text.gravity, Gravity::default());
        assert_eq!(config.playback.animation_steps, 50);
        assert_eq!(config.ui.words.len(), 12);
        assert_eq!(config.ui.words[0], "January");
    }

    #[test]
    fn test_parse_sections() {
        let config = Config::parse(
            r##"
            [text]
            color = "#80FF0000"
            gravity = "end|bottom"
            interpolator = "bounce"
            fade_in = true

            [playback]
            animation_steps = 12
            autoplay = true

            [ui]
            words = ["one", "two"]
            "##,
        )
        .unwrap();

        assert_eq!(config.text.color, Argb(0x80FF_0000));
        assert_eq!(
            config.text.gravity,
            Gravity::new(HorizontalGravity::End, VerticalGravity::Bottom)
        );
        assert_eq!(config.text.interpolator, Interpolator::Bounce);
        assert!(config.text.fade_in);
        assert_eq!(config.playback.animation_steps, 12);
        assert!(config.playback.autoplay);
        assert_eq!(config.playback.speed, 1000);
        assert_eq!(config.ui.words, vec!["one", "two"]);
        assert_eq!(config.ui.background, Argb::WHITE);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::parse("[text]\ngravity = \"sideways\"").is_err());
        assert!(Config::parse("[text]\ninterpolator = \"wobble\"").is_err());
    }

    #[test]
    fn test_parse_error_names_the_bad_value() {
        let err = Config::parse("[text]\ncolor = \"#GG0000\"\nfade_in = true").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("color"), "{message}");
        assert!(message.contains("#GG0000"), "{message}");
    }
}
