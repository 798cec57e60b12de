//! Error taxonomy for font property normalization.

use std::fmt;

use thiserror::Error;

/// Which constant table an exact-match lookup was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Weight,
    Stretch,
    Size,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Weight => "weight",
            Table::Stretch => "stretch",
            Table::Size => "size",
        };
        f.write_str(name)
    }
}

/// Failures raised by the pure lookup functions in [`crate::normalize`].
///
/// `UnknownKeyword` and `UnknownExtension` indicate a caller passing a token
/// outside the fixed tables. `NoWeightMatch` is the expected outcome for names
/// that carry no weight hint at all; see
/// [`crate::normalize::weight_from_text_or_default`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unknown {table} keyword: {keyword:?}")]
    UnknownKeyword { table: Table, keyword: String },

    #[error("unknown font extension: {0:?} (expected one of afm, otf, ttc, ttf)")]
    UnknownExtension(String),

    #[error("no weight pattern matches {0:?}")]
    NoWeightMatch(String),
}

impl NormalizeError {
    pub(crate) fn unknown(table: Table, keyword: &str) -> Self {
        NormalizeError::UnknownKeyword {
            table,
            keyword: keyword.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_table_and_token() {
        let err = NormalizeError::unknown(Table::Stretch, "squashed");
        assert_eq!(err.to_string(), "unknown stretch keyword: \"squashed\"");

        let err = NormalizeError::NoWeightMatch("foo".into());
        assert_eq!(err.to_string(), "no weight pattern matches \"foo\"");
    }
}
