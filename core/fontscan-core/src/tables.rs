//! Constant classification tables for font properties.
//!
//! These mirror the CSS keyword scales and the fontconfig style heuristics.
//! They are compiled into the binary and never mutated, so every lookup is a
//! plain read of `'static` data.

use std::sync::OnceLock;

use regex::Regex;

/// CSS font-size keywords and their multiplicative scale. `None` stands for
/// "no size given".
pub const FONT_SCALINGS: &[(Option<&str>, f64)] = &[
    (Some("xx-small"), 0.579),
    (Some("x-small"), 0.694),
    (Some("small"), 0.833),
    (Some("medium"), 1.0),
    (Some("large"), 1.200),
    (Some("x-large"), 1.440),
    (Some("xx-large"), 1.728),
    (Some("larger"), 1.2),
    (Some("smaller"), 0.833),
    (None, 1.0),
];

/// CSS font-stretch keywords on a 100..=900 scale.
pub const STRETCH_KEYWORDS: &[(&str, u16)] = &[
    ("ultra-condensed", 100),
    ("extra-condensed", 200),
    ("condensed", 300),
    ("semi-condensed", 400),
    ("normal", 500),
    ("semi-expanded", 600),
    ("semi-extended", 600),
    ("expanded", 700),
    ("extended", 700),
    ("extra-expanded", 800),
    ("extra-extended", 800),
    ("ultra-expanded", 900),
    ("ultra-extended", 900),
];

/// Exact weight keywords. Deliberately not the same scale as
/// [`WEIGHT_PATTERNS`]: `light` is 200 here and 300 there.
pub const WEIGHT_KEYWORDS: &[(&str, u16)] = &[
    ("ultralight", 100),
    ("light", 200),
    ("normal", 400),
    ("regular", 400),
    ("book", 400),
    ("medium", 500),
    ("roman", 500),
    ("semibold", 600),
    ("demibold", 600),
    ("demi", 600),
    ("bold", 700),
    ("heavy", 800),
    ("extra bold", 800),
    ("black", 900),
];

/// Generic CSS family placeholders, resolved by a matcher rather than by name.
pub const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "sans serif",
    "cursive",
    "fantasy",
    "monospace",
    "sans",
];

const TRUETYPE_FAMILY: &[&str] = &["otf", "ttc", "ttf"];

/// Extensions that are searched together. OpenType, TrueType and TrueType
/// collections share one list; AFM stands alone.
pub const EXTENSION_SYNONYMS: &[(&str, &[&str])] = &[
    ("afm", &["afm"]),
    ("otf", TRUETYPE_FAMILY),
    ("ttc", TRUETYPE_FAMILY),
    ("ttf", TRUETYPE_FAMILY),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Plain substring test.
    Substring,
    /// Regular expression, searched anywhere in the text.
    Regex,
}

/// One entry of an ordered pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub pattern: &'static str,
    pub kind: PatternKind,
    pub value: u16,
}

const fn lit(pattern: &'static str, value: u16) -> Pattern {
    Pattern {
        pattern,
        kind: PatternKind::Substring,
        value,
    }
}

const fn re(pattern: &'static str, value: u16) -> Pattern {
    Pattern {
        pattern,
        kind: PatternKind::Regex,
        value,
    }
}

/// An ordered list of patterns where the first match wins.
///
/// Order carries meaning: a pattern must come before any shorter pattern it
/// contains (`demilight` before `light`, `ultrabold` before `bold`), otherwise
/// the shorter one shadows it. [`PatternTable::position`] exists so tests can
/// pin those relationships down.
#[derive(Debug)]
pub struct PatternTable {
    entries: &'static [Pattern],
    regexes: OnceLock<Vec<Option<Regex>>>,
}

impl PatternTable {
    pub const fn new(entries: &'static [Pattern]) -> Self {
        Self {
            entries,
            regexes: OnceLock::new(),
        }
    }

    pub fn entries(&self) -> &'static [Pattern] {
        self.entries
    }

    /// Index of `pattern` in the table, if present.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.entries.iter().position(|p| p.pattern == pattern)
    }

    /// First entry, in table order, that matches `text`.
    pub fn first_match(&self, text: &str) -> Option<&'static Pattern> {
        let regexes = self.regexes();
        self.entries
            .iter()
            .zip(regexes)
            .find(|(entry, compiled)| match (entry.kind, compiled) {
                (PatternKind::Substring, _) => text.contains(entry.pattern),
                (PatternKind::Regex, Some(re)) => re.is_match(text),
                (PatternKind::Regex, None) => false,
            })
            .map(|(entry, _)| entry)
    }

    fn regexes(&self) -> &[Option<Regex>] {
        self.regexes.get_or_init(|| {
            self.entries
                .iter()
                .map(|entry| match entry.kind {
                    PatternKind::Substring => None,
                    PatternKind::Regex => Some(
                        Regex::new(entry.pattern).expect("built-in pattern is a valid regex"),
                    ),
                })
                .collect()
        })
    }
}

/// Weight hints found in free-form style names, after fontconfig's
/// `FcFreeTypeQueryFaceInternal`.
pub static WEIGHT_PATTERNS: PatternTable = PatternTable::new(&[
    lit("thin", 100),
    lit("extralight", 200),
    lit("ultralight", 200),
    lit("demilight", 350),
    lit("semilight", 350),
    lit("light", 300),
    lit("book", 380),
    lit("regular", 400),
    lit("normal", 400),
    lit("medium", 500),
    lit("demibold", 600),
    lit("demi", 600),
    lit("semibold", 600),
    lit("extrabold", 800),
    lit("superbold", 800),
    lit("ultrabold", 800),
    lit("bold", 700),
    lit("ultrablack", 1000),
    lit("superblack", 1000),
    lit("extrablack", 1000),
    re(r"\bultra", 1000),
    lit("black", 900),
    lit("heavy", 900),
]);

/// Stretch hints as they are spelled inside file names (no hyphens).
pub static STRETCH_PATTERNS: PatternTable = PatternTable::new(&[
    lit("ultracondensed", 100),
    lit("extracondensed", 200),
    lit("semicondensed", 400),
    lit("condensed", 300),
    lit("semiexpanded", 600),
    lit("semiextended", 600),
    lit("ultraexpanded", 900),
    lit("ultraextended", 900),
    lit("extraexpanded", 800),
    lit("extraextended", 800),
    lit("expanded", 700),
    lit("extended", 700),
]);
