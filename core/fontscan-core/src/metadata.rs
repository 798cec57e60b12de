//! Font entries read from the font's own `name` and `OS/2` tables.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use read_fonts::tables::name::NameId;
use read_fonts::{FontRef, TableProvider};

use crate::entry::{FontEntry, PropValue};

const FAMILY_IDS: &[NameId] = &[NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME];
const SUBFAMILY_IDS: &[NameId] = &[
    NameId::TYPOGRAPHIC_SUBFAMILY_NAME,
    NameId::SUBFAMILY_NAME,
];

/// One entry per face in `path` (collections yield several).
///
/// Fields the tables do not provide fall back to what the file name says.
pub fn entries_from_font_file(path: &Path) -> Result<Vec<FontEntry>> {
    let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let fallback = FontEntry::from_path(path);

    let mut entries = Vec::new();
    for font in FontRef::fonts(&data) {
        let font = font.with_context(|| format!("parsing font {}", path.display()))?;
        entries.push(entry_from_face(&font, &fallback));
    }

    if entries.is_empty() {
        bail!("no font faces in {}", path.display());
    }
    Ok(entries)
}

fn entry_from_face(font: &FontRef, fallback: &FontEntry) -> FontEntry {
    let mut entry = fallback.clone();

    if let Some(family) = first_name(font, FAMILY_IDS) {
        entry.family_name = family;
    }
    if let Some(subfamily) = first_name(font, SUBFAMILY_IDS) {
        entry.apply_style_text(&subfamily.to_lowercase());
    }

    if let Ok(os2) = font.os2() {
        let weight = os2.us_weight_class();
        if (1..=1000).contains(&weight) {
            entry.weight = PropValue::Number(weight);
        }
        let width = os2.us_width_class();
        if (1..=9).contains(&width) {
            entry.stretch = PropValue::Number(width * 100);
        }
    } else {
        log::debug!("no OS/2 table in {}", fallback.path.display());
    }

    entry
}

/// First non-empty Unicode name record, trying `ids` in order.
fn first_name(font: &FontRef, ids: &[NameId]) -> Option<String> {
    let name_table = font.name().ok()?;
    let data = name_table.string_data();

    ids.iter().find_map(|id| {
        name_table
            .name_record()
            .iter()
            .filter(|record| record.is_unicode() && record.name_id() == *id)
            .filter_map(|record| record.string(data).ok())
            .map(|entry| entry.to_string().trim().to_string())
            .find(|rendered| !rendered.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempdir().expect("tempdir");
        let err = entries_from_font_file(&tmp.path().join("absent.ttf")).unwrap_err();
        assert!(err.to_string().contains("reading font"));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("Broken-Bold.ttf");
        fs::write(&path, b"definitely not a font").expect("write");

        assert!(entries_from_font_file(&path).is_err());
    }
}
