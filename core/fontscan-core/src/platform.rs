//! Where each operating system keeps its fonts.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Error};

/// Registry key that records the per-user shell folders, including `Fonts`.
pub const MS_SHELL_FOLDERS_KEY: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Explorer\Shell Folders";

/// Registry keys listing installed fonts, under both HKLM and HKCU.
pub const MS_FONT_REGISTRY_KEYS: &[&str] = &[
    r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts",
    r"SOFTWARE\Microsoft\Windows\CurrentVersion\Fonts",
];

const X11_SYSTEM_DIRS: &[&str] = &[
    // an old standard installation point
    "/usr/X11R6/lib/X11/fonts/TTF/",
    "/usr/X11/lib/X11/fonts",
    "/usr/share/fonts/",
    "/usr/local/share/fonts/",
    "/usr/lib/openoffice/share/fonts/truetype/",
];

const OSX_SYSTEM_DIRS: &[&str] = &[
    "/Library/Fonts/",
    "/Network/Library/Fonts/",
    "/System/Library/Fonts/",
    // MacPorts
    "/opt/local/share/fonts",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Classify a platform identifier the way `sys.platform`-style strings
    /// look: `win32`, `linux`, `darwin`, ...
    pub fn from_identifier(id: &str) -> Self {
        let id = id.to_ascii_lowercase();
        if id.starts_with('w') {
            Platform::Windows
        } else if id.starts_with('l') {
            Platform::Linux
        } else if id.starts_with('d') || id.starts_with("mac") {
            Platform::MacOS
        } else {
            Platform::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(anyhow!("empty platform identifier"));
        }
        Ok(Platform::from_identifier(s.trim()))
    }
}

/// System-wide or per-user font locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    System,
    User,
}

/// Host environment values the directory lists depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    pub home: PathBuf,
    pub xdg_data_home: Option<PathBuf>,
    pub windir: Option<PathBuf>,
}

impl HostEnv {
    /// Snapshot the current process environment.
    ///
    /// An unknown home directory becomes the null device, a path with no
    /// children, so user directories simply come up empty.
    pub fn from_env() -> Self {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(null_device);

        Self {
            home,
            xdg_data_home: non_empty(env::var_os("XDG_DATA_HOME")),
            windir: non_empty(env::var_os("WINDIR")),
        }
    }

    fn user_data_fonts(&self) -> PathBuf {
        self.xdg_data_home
            .clone()
            .unwrap_or_else(|| self.home.join(".local/share"))
            .join("fonts")
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn null_device() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("NUL")
    } else {
        PathBuf::from("/dev/null")
    }
}

/// Capability to list where fonts live.
pub trait FontDirectories {
    fn system_font_directories(&self) -> Vec<PathBuf>;
    fn user_font_directories(&self) -> Vec<PathBuf>;

    fn font_directories(&self, scope: Scope) -> Vec<PathBuf> {
        match scope {
            Scope::System => self.system_font_directories(),
            Scope::User => self.user_font_directories(),
        }
    }

    /// System directories followed by user directories.
    fn all_font_directories(&self) -> Vec<PathBuf> {
        let mut dirs = self.system_font_directories();
        dirs.extend(self.user_font_directories());
        dirs
    }
}

/// Resolves font directories for one platform and host environment.
#[derive(Debug, Clone)]
pub struct PathResolver {
    platform: Platform,
    env: HostEnv,
}

impl PathResolver {
    pub fn new(platform: Platform, env: HostEnv) -> Self {
        Self { platform, env }
    }

    /// Resolver for the running host.
    pub fn detect() -> Self {
        let resolver = Self::new(Platform::current(), HostEnv::from_env());
        log::debug!("resolved font platform: {}", resolver.platform);
        resolver
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Registry keys enumerating installed fonts; empty off Windows.
    pub fn registry_keys(&self) -> &'static [&'static str] {
        match self.platform {
            Platform::Windows => MS_FONT_REGISTRY_KEYS,
            _ => &[],
        }
    }

    fn x11_user_dirs(&self) -> Vec<PathBuf> {
        vec![self.env.user_data_fonts(), self.env.home.join(".fonts")]
    }
}

impl FontDirectories for PathResolver {
    fn system_font_directories(&self) -> Vec<PathBuf> {
        match self.platform {
            Platform::Windows => {
                let windir = self
                    .env
                    .windir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
                vec![windir.join("Fonts")]
            }
            Platform::Linux => X11_SYSTEM_DIRS.iter().map(PathBuf::from).collect(),
            Platform::MacOS => X11_SYSTEM_DIRS
                .iter()
                .chain(OSX_SYSTEM_DIRS)
                .map(PathBuf::from)
                .collect(),
            Platform::Other => Vec::new(),
        }
    }

    fn user_font_directories(&self) -> Vec<PathBuf> {
        match self.platform {
            Platform::Windows => vec![
                self.env.home.join("AppData/Local/Microsoft/Windows/Fonts"),
                self.env.home.join("AppData/Roaming/Microsoft/Windows/Fonts"),
            ],
            Platform::Linux => self.x11_user_dirs(),
            Platform::MacOS => {
                let mut dirs = self.x11_user_dirs();
                dirs.push(self.env.home.join("Library/Fonts"));
                dirs
            }
            Platform::Other => Vec::new(),
        }
    }
}
