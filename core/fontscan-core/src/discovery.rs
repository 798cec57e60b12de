//! Font file discovery for fontscan-core

use std::collections::BTreeSet;
use std::path::{self, Path, PathBuf};

use anyhow::{anyhow, Result};
use walkdir::WalkDir;

use crate::normalize::list_font_extension_synonyms;
use crate::platform::FontDirectories;

/// Path to a candidate font file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSourceRef {
    pub path: PathBuf,
}

/// Trait for enumerating fonts from some backing store (filesystem, registry dump, etc.).
pub trait FontDiscovery {
    fn discover(&self) -> Result<Vec<FontSourceRef>>;
}

/// Recursive filesystem walker that collects one extension family.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    extensions: &'static [&'static str],
    follow_symlinks: bool,
    lenient: bool,
}

impl PathDiscovery {
    /// Walk `roots` for TrueType/OpenType files.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            extensions: &["otf", "ttc", "ttf"],
            follow_symlinks: false,
            lenient: false,
        }
    }

    /// Search the extension family of `ext` (`afm`, `otf`, `ttc` or `ttf`).
    pub fn extension(mut self, ext: &str) -> Result<Self> {
        self.extensions = list_font_extension_synonyms(ext)?;
        Ok(self)
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Skip missing roots and unreadable entries instead of failing.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    fn wants(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(true, |n| n.starts_with('.'));
        if hidden {
            return false;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_ascii_lowercase();
                self.extensions.contains(&ext.as_str())
            }
            None => false,
        }
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<FontSourceRef>> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                if self.lenient {
                    log::debug!("skipping missing font root {}", root.display());
                    continue;
                }
                return Err(anyhow!("root path does not exist: {}", root.display()));
            }

            for entry in WalkDir::new(root).follow_links(self.follow_symlinks) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) if self.lenient => {
                        log::warn!("skipping unreadable entry under {}: {err}", root.display());
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                if entry.file_type().is_file() && self.wants(entry.path()) {
                    found.push(FontSourceRef {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        log::debug!("discovered {} font files", found.len());
        Ok(found)
    }
}

/// Knobs for [`find_system_fonts`].
#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    pub follow_symlinks: bool,
}

/// Collect the font files of extension family `fontext`.
///
/// With no `roots`, the resolver's system and user directories are searched.
/// Missing directories are skipped either way. The result holds absolute
/// paths, sorted and free of duplicates, and only lists files that exist.
pub fn find_system_fonts(
    roots: Option<&[PathBuf]>,
    fontext: &str,
    resolver: &impl FontDirectories,
    opts: &SearchOptions,
) -> Result<Vec<PathBuf>> {
    let roots = match roots {
        Some(roots) => roots.to_vec(),
        None => resolver.all_font_directories(),
    };

    let discovery = PathDiscovery::new(roots)
        .extension(fontext)?
        .follow_symlinks(opts.follow_symlinks)
        .lenient(true);
    let unique: BTreeSet<PathBuf> = discovery
        .discover()?
        .into_iter()
        .map(|f| path::absolute(&f.path).unwrap_or(f.path))
        .filter(|p| p.exists())
        .collect();

    Ok(unique.into_iter().collect())
}

/// File stems of `paths`, the names fonts are usually listed under.
pub fn font_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FontDiscovery, PathDiscovery};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn recognises_font_extensions() {
        let discovery = PathDiscovery::new(Vec::<&Path>::new());
        assert!(discovery.wants("/A/B/font.ttf".as_ref()));
        assert!(discovery.wants("/A/B/font.OTF".as_ref()));
        assert!(discovery.wants("/A/B/font.ttc".as_ref()));
        assert!(!discovery.wants("/A/B/font.afm".as_ref()));
        assert!(!discovery.wants("/A/B/font.txt".as_ref()));
        assert!(!discovery.wants("/A/B/font".as_ref()));
        assert!(!discovery.wants("/A/B/.hidden.ttf".as_ref()));
    }

    #[test]
    fn afm_family_only_matches_afm() {
        let discovery = PathDiscovery::new(Vec::<&Path>::new())
            .extension("afm")
            .expect("afm is known");
        assert!(discovery.wants("/fonts/ptmr8a.afm".as_ref()));
        assert!(!discovery.wants("/fonts/Times.ttf".as_ref()));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = PathDiscovery::new(Vec::<&Path>::new()).extension("woff");
        assert!(result.is_err());
    }

    #[test]
    fn discovers_nested_fonts() {
        let tmp = tempdir().expect("tempdir");
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).expect("mkdir");
        let font_path = nested.join("sample.ttf");
        fs::write(&font_path, b"").expect("touch font");

        let discovery = PathDiscovery::new([tmp.path()]);
        let fonts = discovery.discover().expect("discover");

        assert!(fonts.iter().any(|f| f.path == font_path));
    }

    #[test]
    fn lenient_mode_skips_missing_roots() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("a.otf"), b"").expect("touch font");
        let missing = tmp.path().join("missing");

        let strict = PathDiscovery::new([missing, tmp.path().to_path_buf()]);
        assert!(strict.discover().is_err());

        let lenient = strict.lenient(true);
        let fonts = lenient.discover().expect("discover");
        assert_eq!(fonts.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_when_enabled() {
        use std::os::unix::fs::symlink;

        let tmp = tempdir().expect("tempdir");
        let real_dir = tmp.path().join("real");
        let link_dir = tmp.path().join("link");
        fs::create_dir_all(&real_dir).expect("mkdir real");
        let font_path = real_dir.join("linked.otf");
        fs::write(&font_path, b"").expect("touch font");
        symlink(&real_dir, &link_dir).expect("symlink");

        let discovery = PathDiscovery::new([&link_dir]).follow_symlinks(true);
        let fonts = discovery.discover().expect("discover");

        assert!(fonts.iter().any(|f| f.path.ends_with("linked.otf")));
    }
}
