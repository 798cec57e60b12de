//! fontscan-core: knows where the fonts live and what their names mean
//!
//! Font files announce themselves with names like `DejaVuSans-BoldOblique.ttf`
//! or subfamilies like "Extra Condensed Semibold". This crate turns those
//! hints into numbers a layout engine can compare, and finds the files in the
//! first place.
//!
//! ## Two Halves
//!
//! **Normalization**: pure lookups over constant tables
//! - CSS weight, stretch and size keywords to their numeric scales
//! - Ordered fontconfig-style patterns for free-form style names
//! - Generic family placeholders (`serif`, `monospace`, ...)
//! - Extension families (`ttf`, `otf` and `ttc` travel together)
//!
//! **Discovery**: the platform glue around it
//! - Per-platform system and user font directories
//! - Recursive walks that collect one extension family
//! - [`FontEntry`](entry::FontEntry) records derived from file names, or from
//!   the font's own tables with the `fontations` feature
//!
//! ## A Quick Look
//!
//! ```rust
//! use fontscan_core::normalize::{parse_weight_from_text, normalize_stretch, is_generic_family};
//! use fontscan_core::entry::FontEntry;
//!
//! assert_eq!(parse_weight_from_text("semibold")?, 600);
//! assert_eq!(normalize_stretch("extra-condensed")?, 200);
//! assert!(is_generic_family("sans-serif"));
//!
//! let entry = FontEntry::from_path("/fonts/DejaVuSans-BoldOblique.ttf");
//! assert_eq!(entry.family_name, "DejaVuSans");
//! assert_eq!(entry.weight_value()?, 700);
//! #
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ```rust,no_run
//! use fontscan_core::discovery::{find_system_fonts, SearchOptions};
//! use fontscan_core::platform::PathResolver;
//!
//! let resolver = PathResolver::detect();
//! let fonts = find_system_fonts(None, "ttf", &resolver, &SearchOptions::default())?;
//! println!("{} TrueType/OpenType files installed", fonts.len());
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The tables never change at runtime, so every normalization call is safe
//! to make from any thread without coordination.

pub mod discovery;
pub mod entry;
pub mod error;
#[cfg(feature = "fontations")]
pub mod metadata;
pub mod normalize;
pub mod output;
pub mod platform;
pub mod tables;
