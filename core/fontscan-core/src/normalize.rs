//! Property normalization: free-form style tokens to canonical values.
//!
//! Every function here is a pure read over [`crate::tables`]; none of them
//! fold case. Style names pulled from file names should be lower-cased by the
//! caller before using the `*_from_text` parsers.

use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, Table};
use crate::tables::{
    EXTENSION_SYNONYMS, FONT_SCALINGS, GENERIC_FAMILIES, STRETCH_KEYWORDS, STRETCH_PATTERNS,
    WEIGHT_KEYWORDS, WEIGHT_PATTERNS,
};

/// Weight substituted when a name carries no weight hint.
pub const DEFAULT_WEIGHT: u16 = 400;

/// Slant category of a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

/// Exact lookup of a CSS weight keyword such as `"semibold"` or `"extra bold"`.
pub fn normalize_weight_by_keyword(token: &str) -> Result<u16, NormalizeError> {
    lookup(WEIGHT_KEYWORDS, token).ok_or_else(|| NormalizeError::unknown(Table::Weight, token))
}

/// Infer a weight from an unstructured name like `"dejavu sans extralight"`.
///
/// The first entry of [`WEIGHT_PATTERNS`] found in `text` decides the result.
pub fn parse_weight_from_text(text: &str) -> Result<u16, NormalizeError> {
    WEIGHT_PATTERNS
        .first_match(text)
        .map(|p| p.value)
        .ok_or_else(|| NormalizeError::NoWeightMatch(text.to_string()))
}

/// Like [`parse_weight_from_text`], falling back to [`DEFAULT_WEIGHT`].
pub fn weight_from_text_or_default(text: &str) -> u16 {
    parse_weight_from_text(text).unwrap_or(DEFAULT_WEIGHT)
}

/// Exact lookup of a CSS stretch keyword such as `"semi-condensed"`.
pub fn normalize_stretch(token: &str) -> Result<u16, NormalizeError> {
    lookup(STRETCH_KEYWORDS, token).ok_or_else(|| NormalizeError::unknown(Table::Stretch, token))
}

/// Stretch hint in a file-style name (`"ultracondensed"`), if any.
pub fn parse_stretch_from_text(text: &str) -> Option<u16> {
    STRETCH_PATTERNS.first_match(text).map(|p| p.value)
}

/// Scale factor for a CSS size keyword; `None` means no size was given.
pub fn normalize_size_scale(token: Option<&str>) -> Result<f64, NormalizeError> {
    FONT_SCALINGS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| NormalizeError::unknown(Table::Size, token.unwrap_or_default()))
}

/// Whether `name` is a generic family placeholder rather than a real font name.
pub fn is_generic_family(name: &str) -> bool {
    GENERIC_FAMILIES.contains(&name)
}

/// Extensions that should be searched when `ext` is requested.
pub fn list_font_extension_synonyms(ext: &str) -> Result<&'static [&'static str], NormalizeError> {
    EXTENSION_SYNONYMS
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, synonyms)| *synonyms)
        .ok_or_else(|| NormalizeError::UnknownExtension(ext.to_string()))
}

/// Slant named in a style string; `oblique` wins over `italic` if both appear.
pub fn parse_style_from_text(text: &str) -> FontStyle {
    if text.contains("oblique") {
        FontStyle::Oblique
    } else if text.contains("italic") {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    }
}

fn lookup(table: &[(&str, u16)], token: &str) -> Option<u16> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
}
