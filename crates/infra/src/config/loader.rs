//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the explicit config file, else the first probed file, else
//!    [`Config::default`]
//! 2. Apply environment overrides on top, so a key exported in the shell is
//!    used even when a file exists
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MINDSET_DB_PATH`: Database file path
//! - `MINDSET_DB_POOL_SIZE`: Connection pool size
//! - `MINDSET_STORAGE_BACKEND`: `sqlite` or `memory`
//! - `GEMINI_API_KEY` / `MINDSET_API_KEY`: Quote generation API key
//! - `MINDSET_GEMINI_MODEL`: Model name
//! - `MINDSET_GEMINI_API_URL`: API base URL
//! - `MINDSET_HTTP_TIMEOUT_SECS`: Per-request timeout
//! - `MINDSET_HTTP_MAX_ATTEMPTS`: Attempts per generation request
//! - `MINDSET_JOURNALS_PER_REWARD`: Journal milestone threshold
//! - `MINDSET_SAVES_PER_REWARD`: Favorite milestone threshold
//! - `MINDSET_BIRTHDAY`: Birthday as `MM-DD`
//!
//! All of them are optional. Unset or blank variables leave the base value.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` and `./mindset.{json,toml}` (working directory)
//! 2. `../config.{json,toml}` and `../../config.{json,toml}`
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mindset_domain::{Config, MindsetError, Result, StorageBackend};

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "mindset.json", "mindset.toml"];

/// Load configuration from the first probed file (or defaults) plus
/// environment overrides.
///
/// # Errors
/// Returns `MindsetError::Config` if a found file is malformed or an
/// environment variable has an invalid value.
pub fn load() -> Result<Config> {
    load_with(None)
}

/// Load configuration from `path` (or probed locations when `None`), then
/// apply environment overrides.
///
/// An explicit `path` must exist. Without one, a missing file means defaults.
///
/// # Errors
/// Returns `MindsetError::Config` if the explicit file is missing, a file is
/// malformed, or an environment variable has an invalid value.
pub fn load_with(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, starting from defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from environment variables over [`Config::default`]
///
/// # Errors
/// Returns `MindsetError::Config` if any set variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overwrite fields of `config` with every environment variable that is set.
///
/// # Errors
/// Returns `MindsetError::Config` if a variable cannot be parsed.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(path) = env_opt("MINDSET_DB_PATH") {
        config.storage.path = path;
    }
    if let Some(pool_size) = env_parse::<u32>("MINDSET_DB_POOL_SIZE", "pool size")? {
        config.storage.pool_size = pool_size;
    }
    if let Some(backend) = env_opt("MINDSET_STORAGE_BACKEND") {
        config.storage.backend = StorageBackend::from_str(&backend)
            .map_err(|_| MindsetError::Config(format!("Invalid storage backend: {backend}")))?;
    }

    if let Some(key) = env_opt("GEMINI_API_KEY").or_else(|| env_opt("MINDSET_API_KEY")) {
        config.generation.api_key = Some(key);
    }
    if let Some(model) = env_opt("MINDSET_GEMINI_MODEL") {
        config.generation.model = model;
    }
    if let Some(url) = env_opt("MINDSET_GEMINI_API_URL") {
        config.generation.api_url = url;
    }
    if let Some(timeout) = env_parse::<u64>("MINDSET_HTTP_TIMEOUT_SECS", "HTTP timeout")? {
        config.generation.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse::<usize>("MINDSET_HTTP_MAX_ATTEMPTS", "max attempts")? {
        config.generation.max_attempts = attempts;
    }

    if let Some(journals) =
        env_parse::<u32>("MINDSET_JOURNALS_PER_REWARD", "journals per reward")?
    {
        config.milestones.journals_required = journals;
    }
    if let Some(saves) = env_parse::<u32>("MINDSET_SAVES_PER_REWARD", "saves per reward")? {
        config.milestones.saves_required = saves;
    }

    if let Some(birthday) = env_opt("MINDSET_BIRTHDAY") {
        config.profile.birthday = Some(birthday);
    }

    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MindsetError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MindsetError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MindsetError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MindsetError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MindsetError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MindsetError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MindsetError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).collect();
    for parent in ["..", "../.."] {
        paths.push(dir.join(parent).join("config.json"));
        paths.push(dir.join(parent).join("config.toml"));
    }
    paths
}

/// Optional variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| MindsetError::Config(format!("Invalid {what}: {e}")))
        })
        .transpose()
}
