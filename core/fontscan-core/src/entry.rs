//! Font records derived from discovered files.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::normalize::{
    normalize_size_scale, normalize_stretch, normalize_weight_by_keyword, parse_stretch_from_text,
    parse_style_from_text, parse_weight_from_text, FontStyle,
};

/// A property held either as a CSS keyword or as its numeric form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue<N> {
    Number(N),
    Keyword(String),
}

impl<N> PropValue<N> {
    pub fn keyword(k: &str) -> Self {
        PropValue::Keyword(k.to_string())
    }
}

/// Descriptive properties of one discovered font face.
///
/// Every field has a value; anything unknown holds its CSS default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontEntry {
    pub path: PathBuf,
    pub family_name: String,
    pub style: FontStyle,
    pub variant: String,
    pub weight: PropValue<u16>,
    pub stretch: PropValue<u16>,
    pub size: PropValue<f64>,
}

impl Default for FontEntry {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            family_name: String::new(),
            style: FontStyle::Normal,
            variant: "normal".to_string(),
            weight: PropValue::keyword("normal"),
            stretch: PropValue::keyword("normal"),
            size: PropValue::keyword("medium"),
        }
    }
}

impl FontEntry {
    /// Derive an entry from a PostScript-ish file name such as
    /// `DejaVuSans-BoldOblique.ttf` or `Open_Sans_Condensed.otf`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (family, style_text) = split_stem(&stem);

        let mut entry = FontEntry {
            path: path.to_path_buf(),
            family_name: family.replace('_', " ").trim().to_string(),
            ..FontEntry::default()
        };
        entry.apply_style_text(&style_text.to_lowercase());
        entry
    }

    /// Fill weight, stretch and style from a lower-cased style name.
    /// Fields without a hint keep their current value.
    pub(crate) fn apply_style_text(&mut self, style_text: &str) {
        if style_text.is_empty() {
            return;
        }
        if let Ok(weight) = parse_weight_from_text(style_text) {
            self.weight = PropValue::Number(weight);
        }
        if let Some(stretch) = parse_stretch_from_text(style_text) {
            self.stretch = PropValue::Number(stretch);
        }
        self.style = parse_style_from_text(style_text);
    }

    /// Numeric weight, resolving keywords through the weight table.
    pub fn weight_value(&self) -> Result<u16, NormalizeError> {
        match &self.weight {
            PropValue::Number(n) => Ok(*n),
            PropValue::Keyword(k) => normalize_weight_by_keyword(k),
        }
    }

    /// Numeric stretch, resolving keywords through the stretch table.
    pub fn stretch_value(&self) -> Result<u16, NormalizeError> {
        match &self.stretch {
            PropValue::Number(n) => Ok(*n),
            PropValue::Keyword(k) => normalize_stretch(k),
        }
    }

    /// Size as a scale factor relative to `medium`.
    pub fn size_scale(&self) -> Result<f64, NormalizeError> {
        match &self.size {
            PropValue::Number(n) => Ok(*n),
            PropValue::Keyword(k) => normalize_size_scale(Some(k)),
        }
    }
}

/// Split a file stem into family and style parts.
///
/// `Family-Style` is split at the first hyphen. Otherwise the word after the
/// last underscore or space is the style only if it names a weight, stretch
/// or slant; `Times New Roman` stays whole.
fn split_stem(stem: &str) -> (&str, &str) {
    if let Some((family, style)) = stem.split_once('-') {
        return (family, style);
    }
    match stem.rfind(['_', ' ']) {
        Some(idx) if has_style_hint(&stem[idx + 1..].to_lowercase()) => {
            (&stem[..idx], &stem[idx + 1..])
        }
        _ => (stem, ""),
    }
}

fn has_style_hint(word: &str) -> bool {
    parse_weight_from_text(word).is_ok()
        || parse_stretch_from_text(word).is_some()
        || parse_style_from_text(word) != FontStyle::Normal
}

/// Build entries for many paths in parallel, keeping input order.
pub fn describe_fonts(paths: &[PathBuf]) -> Vec<FontEntry> {
    paths.par_iter().map(FontEntry::from_path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_stem_variants() {
        assert_eq!(split_stem("DejaVuSans-BoldOblique"), ("DejaVuSans", "BoldOblique"));
        assert_eq!(split_stem("Open_Sans_Bold"), ("Open_Sans", "Bold"));
        assert_eq!(split_stem("Noto Serif Light"), ("Noto Serif", "Light"));
        assert_eq!(split_stem("Inter"), ("Inter", ""));
        assert_eq!(split_stem("Times New Roman"), ("Times New Roman", ""));
        assert_eq!(split_stem("Lato_Italic"), ("Lato", "Italic"));
    }

    #[test]
    fn stem_without_style_keeps_defaults() {
        let entry = FontEntry::from_path("/fonts/Inter.ttf");
        assert_eq!(entry.family_name, "Inter");
        assert_eq!(entry.weight, PropValue::keyword("normal"));
        assert_eq!(entry.weight_value(), Ok(400));
    }
}
