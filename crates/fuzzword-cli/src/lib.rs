// fuzzword-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use fuzzword_suggest::{EngineConfig, SpellChecker};
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up in each search directory.
const DICT_FILE: &str = "dictionary.txt";

/// Per-user directory under `$HOME`.
const USER_DIR: &str = ".fuzzword";

/// Environment variable naming a dictionary file or directory.
const DICT_ENV: &str = "FUZZWORD_DICT";

/// Environment variable naming a JSON engine configuration file.
const CONFIG_ENV: &str = "FUZZWORD_CONFIG";

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "FUZZWORD_LOG";

/// Install the stderr log subscriber, filtered by `FUZZWORD_LOG`
/// (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the engine configuration and dictionary, and create a SpellChecker.
///
/// Configuration comes from `config_path`, else `FUZZWORD_CONFIG`, else
/// the built-in defaults.
pub fn load_checker(
    dict_path: Option<&str>,
    config_path: Option<&str>,
) -> Result<SpellChecker, String> {
    let config = load_config(config_path)?;
    let dict_file = find_dictionary(dict_path)?;

    let mut checker = SpellChecker::new(config).map_err(|e| e.to_string())?;
    let file = File::open(&dict_file)
        .map_err(|e| format!("failed to open {}: {}", dict_file.display(), e))?;
    let stats = checker
        .load_reader(BufReader::new(file))
        .map_err(|e| format!("{}: {}", dict_file.display(), e))?;

    tracing::info!(
        path = %dict_file.display(),
        words = stats.words,
        duplicates = stats.duplicates,
        "dictionary ready"
    );
    Ok(checker)
}

/// Read an `EngineConfig` from JSON, falling back to defaults when no file
/// is named.
pub fn load_config(config_path: Option<&str>) -> Result<EngineConfig, String> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => match std::env::var(CONFIG_ENV) {
            Ok(p) if !p.is_empty() => PathBuf::from(p),
            _ => return Ok(EngineConfig::default()),
        },
    };
    read_config_file(&path)
}

fn read_config_file(path: &Path) -> Result<EngineConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_config(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Parse and validate a JSON engine configuration.
pub fn parse_config(text: &str) -> Result<EngineConfig, String> {
    let config: EngineConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Locate the dictionary file.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `FUZZWORD_DICT` environment variable
/// 3. `~/.fuzzword/dictionary.txt`
/// 4. `dictionary.txt` in the current working directory
///
/// Each candidate may name the file itself or a directory holding
/// `dictionary.txt`.
pub fn find_dictionary(dict_path: Option<&str>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
        let nested = candidate.join(DICT_FILE);
        if nested.is_file() {
            return Ok(nested);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of places to look for the dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        if !env_path.is_empty() {
            paths.push(PathBuf::from(env_path));
        }
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Extract a valued option given as `--long=VALUE`, `--long VALUE` or
/// `-s VALUE`.
///
/// Returns `(value, remaining_args)`. A missing value is an error.
pub fn take_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let inline = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&inline) {
            value = Some(val.to_string());
        } else if arg == long || Some(arg.as_str()) == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", Some("-d")).unwrap_or_else(|e| fatal(&e))
}

/// Parse a `--config=PATH` or `--config PATH` argument.
pub fn parse_config_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--config", None).unwrap_or_else(|e| fatal(&e))
}

/// Default for `-n`/`--max-suggestions`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Parse `-n N`, `--max-suggestions N` or `--max-suggestions=N`.
///
/// Returns `(max_suggestions, remaining_args)`, falling back to
/// [`DEFAULT_MAX_SUGGESTIONS`] when the option is absent.
pub fn take_max_suggestions(args: &[String]) -> Result<(usize, Vec<String>), String> {
    let (value, remaining) = take_option(args, "--max-suggestions", Some("-n"))?;
    let max_suggestions = match value {
        Some(n) => n
            .parse()
            .map_err(|_| format!("invalid number for --max-suggestions: {n}"))?,
        None => DEFAULT_MAX_SUGGESTIONS,
    };
    Ok((max_suggestions, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
