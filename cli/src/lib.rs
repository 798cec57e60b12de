//! fontscan CLI

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use log::LevelFilter;

use fontscan_core::discovery::{find_system_fonts, font_names, SearchOptions};
use fontscan_core::entry::{describe_fonts, FontEntry, PropValue};
use fontscan_core::normalize::{
    is_generic_family, list_font_extension_synonyms, normalize_size_scale, normalize_stretch,
    normalize_weight_by_keyword, parse_weight_from_text, weight_from_text_or_default,
};
use fontscan_core::output::{write_json_pretty, write_ndjson};
use fontscan_core::platform::{FontDirectories, HostEnv, PathResolver, Platform, Scope};

/// Environment variable overriding the system font roots (`:` or `;` separated).
pub const FONT_DIRS_ENV: &str = "FONTSCAN_FONT_DIRS";

/// CLI entrypoint for fontscan.
#[derive(Debug, Parser)]
#[command(
    name = "fontscan",
    about = "Find installed fonts and normalize their style properties"
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG also works
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the font directories for a platform
    Dirs(DirsArgs),
    /// Walk font directories and list what is installed
    Find(FindArgs),
    /// Map a style keyword or name to its normalized value
    Normalize(NormalizeArgs),
}

#[derive(Debug, Args)]
struct DirsArgs {
    /// Per-user directories instead of system-wide ones
    #[arg(long = "user", action = ArgAction::SetTrue, conflicts_with = "all")]
    user: bool,

    /// System and user directories
    #[arg(long = "all", action = ArgAction::SetTrue)]
    all: bool,

    /// Platform identifier (win32, linux, darwin, ...); defaults to the host
    #[arg(long = "platform")]
    platform: Option<Platform>,

    /// Only print directories that exist
    #[arg(long = "existing", action = ArgAction::SetTrue)]
    existing: bool,
}

#[derive(Debug, Args)]
struct FindArgs {
    /// Paths to search (directories or files)
    #[arg(value_hint = ValueHint::DirPath, required_unless_present = "system_fonts")]
    paths: Vec<PathBuf>,

    /// Include the platform's system and user font directories
    #[arg(long = "system-fonts", action = ArgAction::SetTrue)]
    system_fonts: bool,

    /// Extension family to collect (afm, otf, ttc, ttf)
    #[arg(short = 'e', long = "ext", default_value = "ttf")]
    ext: String,

    /// Follow symlinks while walking paths
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Print font names (file stems) instead of paths
    #[arg(long = "names", action = ArgAction::SetTrue, conflicts_with_all = ["describe", "json", "ndjson"])]
    names: bool,

    /// Print family, weight, stretch and style for each font
    #[arg(short = 'd', long = "describe", action = ArgAction::SetTrue)]
    describe: bool,

    /// Read properties from the font tables rather than the file name
    #[arg(long = "from-tables", action = ArgAction::SetTrue)]
    from_tables: bool,

    /// Emit a single JSON array of font entries
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON font entries
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Args)]
struct NormalizeArgs {
    /// Which table to consult
    #[arg(value_enum)]
    property: Property,

    /// Keyword, style name or extension; omit for the default size
    value: Option<String>,

    /// With parse-weight, fall back to 400 when nothing matches
    #[arg(long = "or-default", action = ArgAction::SetTrue)]
    or_default: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Property {
    /// Exact CSS weight keyword
    Weight,
    /// Exact CSS stretch keyword
    Stretch,
    /// CSS size keyword scale factor
    Size,
    /// Weight hint inside a free-form style name
    ParseWeight,
    /// Whether a family name is a generic placeholder
    Generic,
    /// Extensions searched together with the given one
    Extensions,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Dirs(args) => run_dirs(args, &mut handle),
        Command::Find(args) => run_find(args, &mut handle),
        Command::Normalize(args) => {
            let rendered = normalize_value(&args)?;
            writeln!(handle, "{rendered}")?;
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.try_init().ok();
}

fn run_dirs(args: DirsArgs, mut w: impl Write) -> Result<()> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let resolver = PathResolver::new(platform, HostEnv::from_env());

    let scope = if args.user { Scope::User } else { Scope::System };
    let mut dirs = if args.all {
        resolver.all_font_directories()
    } else {
        resolver.font_directories(scope)
    };
    if args.existing {
        dirs.retain(|d| d.exists());
    }

    for dir in &dirs {
        writeln!(w, "{}", dir.display())?;
    }

    let hives: &[&str] = match (args.all, scope) {
        (true, _) => &["HKEY_LOCAL_MACHINE", "HKEY_CURRENT_USER"],
        (false, Scope::System) => &["HKEY_LOCAL_MACHINE"],
        (false, Scope::User) => &["HKEY_CURRENT_USER"],
    };
    for hive in hives {
        for key in resolver.registry_keys() {
            writeln!(w, "{hive}\\{key}")?;
        }
    }

    Ok(())
}

fn run_find(args: FindArgs, mut w: impl Write) -> Result<()> {
    let resolver = PathResolver::detect();
    let roots = gather_roots(&args.paths, args.system_fonts, &resolver)?;
    let opts = SearchOptions {
        follow_symlinks: args.follow_symlinks,
    };
    let files = find_system_fonts(Some(roots.as_slice()), &args.ext, &resolver, &opts)?;
    log::info!("found {} font files under {} roots", files.len(), roots.len());

    if args.names {
        for name in font_names(&files) {
            writeln!(w, "{name}")?;
        }
        return Ok(());
    }

    if !(args.describe || args.json || args.ndjson) {
        for path in &files {
            writeln!(w, "{}", path.display())?;
        }
        return Ok(());
    }

    let entries = build_entries(&files, args.from_tables)?;
    if args.ndjson {
        write_ndjson(&entries, &mut w)?;
    } else if args.json {
        write_json_pretty(&entries, &mut w)?;
    } else {
        let use_color = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        write_columns(&entries, &mut w, use_color)?;
    }

    Ok(())
}

#[cfg(feature = "fontations")]
fn build_entries(files: &[PathBuf], from_tables: bool) -> Result<Vec<FontEntry>> {
    use fontscan_core::metadata::entries_from_font_file;

    if !from_tables {
        return Ok(describe_fonts(files));
    }

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        match entries_from_font_file(path) {
            Ok(faces) => entries.extend(faces),
            Err(err) => {
                log::warn!("{err:#}; falling back to the file name");
                entries.push(FontEntry::from_path(path));
            }
        }
    }
    Ok(entries)
}

#[cfg(not(feature = "fontations"))]
fn build_entries(files: &[PathBuf], from_tables: bool) -> Result<Vec<FontEntry>> {
    if from_tables {
        return Err(anyhow!(
            "--from-tables needs fontscan built with the `fontations` feature"
        ));
    }
    Ok(describe_fonts(files))
}

fn gather_roots(
    raw_paths: &[PathBuf],
    include_system: bool,
    resolver: &PathResolver,
) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();

    for path in raw_paths {
        if !path.exists() {
            return Err(anyhow!("path does not exist: {}", path.display()));
        }
        roots.push(path.clone());
    }

    if include_system {
        roots.extend(system_font_roots(env::var(FONT_DIRS_ENV).ok(), resolver)?);
    }

    if roots.is_empty() {
        return Err(anyhow!("no search paths provided"));
    }

    Ok(roots)
}

fn system_font_roots(overrides: Option<String>, resolver: &PathResolver) -> Result<Vec<PathBuf>> {
    if let Some(raw) = overrides {
        let mut dirs: Vec<PathBuf> = raw
            .split([':', ';'])
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect();

        dirs.sort();
        dirs.dedup();

        return if dirs.is_empty() {
            Err(anyhow!("{FONT_DIRS_ENV} is set but no paths exist"))
        } else {
            Ok(dirs)
        };
    }

    let mut candidates = resolver.all_font_directories();
    candidates.retain(|p| p.exists());
    candidates.sort();
    candidates.dedup();

    if candidates.is_empty() {
        return Err(anyhow!(
            "no font directories found for platform {}",
            resolver.platform()
        ));
    }

    Ok(candidates)
}

fn normalize_value(args: &NormalizeArgs) -> Result<String> {
    let value = args.value.as_deref();
    let required = || value.ok_or_else(|| anyhow!("a value is required for {:?}", args.property));

    let rendered = match args.property {
        Property::Weight => normalize_weight_by_keyword(required()?)?.to_string(),
        Property::Stretch => normalize_stretch(required()?)?.to_string(),
        Property::Size => normalize_size_scale(value)?.to_string(),
        Property::ParseWeight => {
            let text = required()?.to_lowercase();
            if args.or_default {
                weight_from_text_or_default(&text).to_string()
            } else {
                parse_weight_from_text(&text)?.to_string()
            }
        }
        Property::Generic => is_generic_family(required()?).to_string(),
        Property::Extensions => list_font_extension_synonyms(required()?)?.join(","),
    };

    Ok(rendered)
}

fn write_columns(entries: &[FontEntry], mut w: impl Write, color: bool) -> Result<()> {
    let rows: Vec<(String, String, String)> = entries
        .iter()
        .map(|e| {
            let family = if e.family_name.is_empty() {
                "(unnamed)".to_string()
            } else {
                e.family_name.clone()
            };
            let props = format!(
                "weight:{:<7} stretch:{:<7} {}",
                render_prop(&e.weight),
                render_prop(&e.stretch),
                e.style.as_str(),
            );
            (e.path.display().to_string(), family, props)
        })
        .collect();

    let path_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).min(120);
    let family_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).min(60);

    for (path, family, props) in rows {
        let padded_path = format!("{path:<path_width$}");
        let padded_family = format!("{family:<family_width$}");
        let rendered_path = apply_color(&padded_path, color, AnsiColor::Cyan);
        let rendered_family = apply_color(&padded_family, color, AnsiColor::Yellow);
        let rendered_props = apply_color(&props, color, AnsiColor::Green);

        writeln!(w, "{rendered_path}  {rendered_family}  {rendered_props}")?;
    }

    Ok(())
}

fn render_prop(value: &PropValue<u16>) -> String {
    match value {
        PropValue::Number(n) => n.to_string(),
        PropValue::Keyword(k) => k.clone(),
    }
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
