//! Packed ARGB colors for text paints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color '{0}': expected #RRGGBB, #AARRGGBB or a color name")]
    Format(String),
}

/// 32-bit color packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB channels with the alpha channel replaced
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Scale the alpha channel by `percentage`, rounding to the nearest step.
    /// RGB channels are left untouched.
    pub fn faded(self, percentage: f32) -> Self {
        let p = percentage.clamp(0.0, 1.0);
        let alpha = (self.alpha() as f32 * p).round() as u8;
        self.with_alpha(alpha)
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }
}

impl Default for Argb {
    fn default() -> Self {
        Argb::BLACK
    }
}

/// Named colors accepted alongside hex notation
fn named_color(name: &str) -> Option<Argb> {
    let normalized = name
        .to_ascii_lowercase()
        .replace(|c: char| c == '-' || c == '_', "");
    let color = match normalized.as_str() {
        "black" => Argb::BLACK,
        "white" => Argb::WHITE,
        "transparent" => Argb::TRANSPARENT,
        "red" => Argb::from_rgb(0xFF, 0x00, 0x00),
        "green" => Argb::from_rgb(0x00, 0xFF, 0x00),
        "blue" => Argb::from_rgb(0x00, 0x00, 0xFF),
        "yellow" => Argb::from_rgb(0xFF, 0xFF, 0x00),
        "cyan" => Argb::from_rgb(0x00, 0xFF, 0xFF),
        "magenta" => Argb::from_rgb(0xFF, 0x00, 0xFF),
        "gray" | "grey" => Argb::from_rgb(0x88, 0x88, 0x88),
        "lightgray" | "lightgrey" => Argb::from_rgb(0xCC, 0xCC, 0xCC),
        "darkgray" | "darkgrey" => Argb::from_rgb(0x44, 0x44, 0x44),
        _ => return None,
    };
    Some(color)
}

/// Parse `#RRGGBB`, `#AARRGGBB` or a basic color name
pub fn parse_color(s: &str) -> Result<Argb, ColorError> {
    let trimmed = s.trim();
    let Some(hex) = trimmed.strip_prefix('#') else {
        return named_color(trimmed).ok_or_else(|| ColorError::Format(s.to_string()));
    };

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::Format(s.to_string()));
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| ColorError::Format(s.to_string()))?;
    match hex.len() {
        6 => Ok(Argb(0xFF00_0000 | value)),
        8 => Ok(Argb(value)),
        _ => Err(ColorError::Format(s.to_string())),
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
