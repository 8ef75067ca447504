//! Text measurement and glyph metrics
//!
//! The engine never shapes text itself. Everything it knows about glyph
//! advances and line metrics comes through a [`FontBackend`].

use crate::color::Argb;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Typeface not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read typeface {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to a typeface registered with a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypefaceId(pub u32);

impl TypefaceId {
    /// The platform default typeface
    pub const DEFAULT: TypefaceId = TypefaceId(0);
}

/// Vertical glyph metrics relative to the baseline (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph (negative)
    pub top: f32,
    /// Distance from the baseline to the bottom of the lowest glyph
    pub bottom: f32,
}

impl FontMetrics {
    pub fn line_height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Paint state the backend measures against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Argb,
    pub size: f32,
    pub typeface: TypefaceId,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Argb::BLACK,
            size: DEFAULT_TEXT_SIZE,
            typeface: TypefaceId::DEFAULT,
        }
    }
}

pub const DEFAULT_TEXT_SIZE: f32 = 18.0;

/// Text shaping collaborator.
///
/// Results must be deterministic for a fixed paint so that offsets stay
/// stable for the whole duration of a transition.
pub trait FontBackend {
    /// Advance width of a single character
    fn measure_char(&self, paint: &Paint, c: char) -> f32;

    /// Advance width of a whole string
    fn measure(&self, paint: &Paint, text: &str) -> f32 {
        text.chars().map(|c| self.measure_char(paint, c)).sum()
    }

    fn metrics(&self, paint: &Paint) -> FontMetrics;

    /// Register a typeface asset, returning its handle
    fn load_typeface(&mut self, path: &Path) -> Result<TypefaceId, FontError>;
}

/// Terminal cell font: every glyph is as wide as its column count.
///
/// `base_size` is the text size that maps to exactly one cell per column.
/// Larger sizes spread glyphs apart horizontally; a line is always one row.
#[derive(Debug, Clone)]
pub struct CellFont {
    base_size: f32,
    typefaces: Vec<PathBuf>,
}

impl CellFont {
    pub fn new(base_size: f32) -> Self {
        Self {
            base_size: if base_size > 0.0 { base_size } else { DEFAULT_TEXT_SIZE },
            typefaces: Vec::new(),
        }
    }

    pub fn typeface_path(&self, id: TypefaceId) -> Option<&Path> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.typefaces.get(index).map(PathBuf::as_path)
    }

    fn scale(&self, paint: &Paint) -> f32 {
        paint.size / self.base_size
    }
}

impl Default for CellFont {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_SIZE)
    }
}

impl FontBackend for CellFont {
    fn measure_char(&self, paint: &Paint, c: char) -> f32 {
        c.width().unwrap_or(0) as f32 * self.scale(paint)
    }

    fn metrics(&self, _paint: &Paint) -> FontMetrics {
        FontMetrics {
            top: -1.0,
            bottom: 0.0,
        }
    }

    fn load_typeface(&mut self, path: &Path) -> Result<TypefaceId, FontError> {
        if !path.is_file() {
            return Err(FontError::NotFound(path.to_path_buf()));
        }
        std::fs::File::open(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(pos) = self.typefaces.iter().position(|p| p == path) {
            return Ok(TypefaceId(pos as u32 + 1));
        }
        self.typefaces.push(path.to_path_buf());
        Ok(TypefaceId(self.typefaces.len() as u32))
    }
}
