use std::fs;
use std::path::{Path, PathBuf};

use fontscan_core::discovery::{
    find_system_fonts, font_names, FontDiscovery, PathDiscovery, SearchOptions,
};
use fontscan_core::platform::FontDirectories;

struct FixedDirs {
    system: Vec<PathBuf>,
    user: Vec<PathBuf>,
}

impl FontDirectories for FixedDirs {
    fn system_font_directories(&self) -> Vec<PathBuf> {
        self.system.clone()
    }

    fn user_font_directories(&self) -> Vec<PathBuf> {
        self.user.clone()
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"\0\0font").unwrap();
}

#[test]
fn discovers_common_font_extensions_recursively() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    let font1 = root.join("a.ttf");
    let font2 = root.join("nested").join("b.otf");
    let font3 = root.join("nested").join("deeper").join("c.TTC");
    touch(&font1);
    touch(&font2);
    touch(&font3);

    let discovery = PathDiscovery::new([PathBuf::from(root)]);
    let fonts = discovery.discover().expect("discover");

    let paths: Vec<PathBuf> = fonts.into_iter().map(|f| f.path).collect();
    assert!(paths.contains(&font1));
    assert!(paths.contains(&font2));
    assert!(paths.contains(&font3));
}

#[test]
fn ignores_non_font_extensions() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join("readme.txt"), b"hello").unwrap();
    fs::write(root.join(".DS_Store.ttf"), b"").unwrap();

    let discovery = PathDiscovery::new([root.to_path_buf()]);
    let fonts = discovery.discover().expect("discover");

    assert!(fonts.is_empty());
}

#[test]
fn returns_error_for_missing_root() {
    let missing = PathBuf::from("/nonexistent/fontscan-fonts");
    let discovery = PathDiscovery::new([missing]);
    let result = discovery.discover();

    assert!(result.is_err());
}

#[test]
fn find_system_fonts_uses_resolver_directories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let system = temp.path().join("system");
    let user = temp.path().join("user");
    touch(&system.join("Serif-Regular.ttf"));
    touch(&system.join("Serif-Regular.afm"));
    touch(&user.join("Mono.otf"));

    let dirs = FixedDirs {
        system: vec![system.clone(), temp.path().join("not-there")],
        user: vec![user.clone(), system.clone()],
    };

    let fonts = find_system_fonts(None, "ttf", &dirs, &SearchOptions::default()).expect("find");
    assert_eq!(
        fonts,
        vec![system.join("Serif-Regular.ttf"), user.join("Mono.otf")]
    );

    let afm =
        find_system_fonts(None, "afm", &dirs, &SearchOptions::default()).expect("find afm");
    assert_eq!(afm, vec![system.join("Serif-Regular.afm")]);
}

#[test]
fn find_system_fonts_prefers_explicit_roots() {
    let temp = tempfile::tempdir().expect("tempdir");
    let explicit = temp.path().join("explicit");
    let ignored = temp.path().join("ignored");
    touch(&explicit.join("A.ttf"));
    touch(&ignored.join("B.ttf"));

    let dirs = FixedDirs {
        system: vec![ignored],
        user: Vec::new(),
    };

    let roots = [explicit.clone()];
    let fonts =
        find_system_fonts(Some(&roots[..]), "otf", &dirs, &SearchOptions::default()).expect("find");
    assert_eq!(fonts, vec![explicit.join("A.ttf")]);
    assert_eq!(font_names(&fonts), vec!["A".to_string()]);
}

#[test]
fn relative_and_absolute_roots_list_each_font_once() {
    // Test binaries run from the package root, so a directory made here is
    // reachable by a relative path.
    let temp = tempfile::tempdir_in(env!("CARGO_MANIFEST_DIR")).expect("tempdir");
    touch(&temp.path().join("A.ttf"));
    let relative = PathBuf::from(temp.path().file_name().expect("dir name"));
    assert!(relative.is_relative());

    let dirs = FixedDirs {
        system: Vec::new(),
        user: Vec::new(),
    };
    let roots = [relative, temp.path().to_path_buf()];
    let fonts =
        find_system_fonts(Some(&roots[..]), "ttf", &dirs, &SearchOptions::default()).expect("find");

    assert_eq!(fonts.len(), 1);
    assert!(fonts[0].is_absolute());
    assert!(fonts[0].ends_with("A.ttf"));
}

#[test]
fn find_system_fonts_rejects_unknown_extension() {
    let dirs = FixedDirs {
        system: Vec::new(),
        user: Vec::new(),
    };
    assert!(find_system_fonts(None, "pfb", &dirs, &SearchOptions::default()).is_err());
}
