use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flashcards_core::{AssetRoot, WordEntry};
use services::FlashcardServices;
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://flashcards.sqlite3";
const DB_URL_ENV: &str = "FLASHCARDS_DB_URL";
const ASSET_ROOT_ENV: &str = "FLASHCARDS_ASSET_ROOT";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidWordsFile { path: String, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidWordsFile { path, reason } => {
                write!(f, "invalid --words file {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: FlashcardServices,
    asset_root: AssetRoot,
}

impl UiApp for DesktopApp {
    fn services(&self) -> FlashcardServices {
        self.services.clone()
    }

    fn asset_root(&self) -> AssetRoot {
        self.asset_root.clone()
    }
}

struct Args {
    db_url: String,
    asset_root: AssetRoot,
    words_file: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--assets <dir>]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>] [--words <file.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --assets <empty>  (media paths are used as-is)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, {ASSET_ROOT_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = match std::env::var(DB_URL_ENV) {
            Ok(raw) => sqlite_url(&raw)?,
            Err(_) => DEFAULT_DB_URL.to_string(),
        };
        let mut asset_root = std::env::var(ASSET_ROOT_ENV)
            .map(AssetRoot::new)
            .unwrap_or_default();
        let mut words_file = None;

        while let Some(arg) = args.next() {
            match (cmd, arg.as_str()) {
                (_, "--db") => {
                    db_url = sqlite_url(&require_value(args, "--db")?)?;
                }
                (Command::Ui, "--assets") => {
                    asset_root = AssetRoot::new(require_value(args, "--assets")?);
                }
                (Command::Seed, "--words") => {
                    words_file = Some(require_value(args, "--words")?);
                }
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            asset_root,
            words_file,
        })
    }
}

fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

/// Turn a `--db` value (URL or bare path) into an absolute `sqlite://` URL.
fn sqlite_url(raw: &str) -> Result<String, ArgsError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: raw.to_string() });
    }
    if raw.starts_with("sqlite://") || is_memory_url(raw) {
        return Ok(raw.to_string());
    }

    let path = PathBuf::from(raw.strip_prefix("sqlite:").unwrap_or(raw));
    let path = if path.is_relative() {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    } else {
        path
    };
    Ok(format!("sqlite://{}", path.display()))
}

/// The database file behind `url`, or `None` for in-memory databases.
fn db_file_path(url: &str) -> Result<Option<&Path>, ArgsError> {
    if is_memory_url(url) {
        return Ok(None);
    }
    let invalid = || ArgsError::InvalidDbUrl { raw: url.to_string() };
    let rest = url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let file = rest.split_once('?').map_or(rest, |(file, _)| file);
    if file.is_empty() {
        return Err(invalid());
    }
    Ok(Some(Path::new(file)))
}

fn read_words_file(path: &str) -> Result<Vec<WordEntry>, ArgsError> {
    let invalid = |reason: String| ArgsError::InvalidWordsFile {
        path: path.to_string(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|err| invalid(err.to_string()))?;
    serde_json::from_str(&raw).map_err(|err| invalid(err.to_string()))
}

fn init_tracing_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    ensure_db_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let services = FlashcardServices::from_storage(&storage);
    tracing::info!(db = %parsed.db_url, "storage ready");

    match cmd {
        Command::Ui => {
            let app = DesktopApp {
                services,
                asset_root: parsed.asset_root,
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Flashcards")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            let word_bank = services.word_bank();
            match parsed.words_file {
                Some(path) => {
                    let entries = read_words_file(&path)?;
                    word_bank.replace(&entries).await?;
                    eprintln!("seed: stored {} words from {path}", entries.len());
                }
                None => {
                    if word_bank.seed_default_if_missing().await? {
                        eprintln!("seed: installed the default word bank");
                    } else {
                        eprintln!("seed: word bank already present, nothing to do");
                    }
                }
            }
            Ok(())
        }
    }
}

/// `sqlx` refuses to open a missing file, so create it (and its directory) up front.
fn ensure_db_file(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = db_file_path(url)? else {
        return Ok(());
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing_subscriber();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
