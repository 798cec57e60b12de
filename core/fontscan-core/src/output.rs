//! Streaming output helpers for font entries.

use std::io::Write;

use anyhow::Result;

use crate::entry::FontEntry;

/// Write entries as a prettified JSON array.
pub fn write_json_pretty(entries: &[FontEntry], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write entries as newline-delimited JSON (NDJSON).
pub fn write_ndjson(entries: &[FontEntry], mut w: impl Write) -> Result<()> {
    for item in entries {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PropValue;

    #[test]
    fn ndjson_writes_one_line_per_entry() {
        let entries = vec![
            FontEntry::from_path("/fonts/A-Bold.ttf"),
            FontEntry::from_path("/fonts/B.ttf"),
        ];
        let mut buf = Vec::new();

        write_ndjson(&entries, &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: FontEntry = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(parsed.family_name, "A");
        assert_eq!(parsed.weight, PropValue::Number(700));
    }
}
