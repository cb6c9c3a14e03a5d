//! Office configuration loader
//!
//! [`load`] reads the environment when `AGENDAR_WHATSAPP_NUMBER` is set.
//! Otherwise it looks for a JSON or TOML file (see [`probe_config_paths`])
//! and, failing that, runs on [`Config::default`].
//!
//! | Variable | Field |
//! |---|---|
//! | `AGENDAR_WHATSAPP_NUMBER` | office WhatsApp number (required) |
//! | `AGENDAR_OFFICE_LOCATION` | calendar event location |
//! | `AGENDAR_TIMEZONE` | IANA zone for booking dates, host zone if unset |
//! | `AGENDAR_EVENT_DURATION_MINUTES` | calendar event length |
//! | `AGENDAR_AREAS` | comma-separated service areas |
//! | `AGENDAR_FORM_POLICY` | `permissive` or `strict` |
//! | `AGENDAR_LOG_LEVEL` | log filter used when `RUST_LOG` is unset |
//! | `AGENDAR_LOG_JSON` | JSON log lines |

use std::path::{Path, PathBuf};

use agendar_domain::{AgendarError, Config, FormPolicy, Result};

use crate::errors::InfraError;

const FILE_STEMS: [&str; 2] = ["config", "agendar"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];
const WHATSAPP_NUMBER_VAR: &str = "AGENDAR_WHATSAPP_NUMBER";

/// Environment, then file, then defaults
///
/// The environment is the source whenever `AGENDAR_WHATSAPP_NUMBER` is set.
/// The file and the defaults are only consulted when it is not.
///
/// # Errors
/// Returns `AgendarError::Config` when the chosen source is malformed or
/// names an unknown time zone.
pub fn load() -> Result<Config> {
    if env_opt(WHATSAPP_NUMBER_VAR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!(var = WHATSAPP_NUMBER_VAR, "Variable not set, looking for a config file");
    let Some(path) = probe_config_paths() else {
        tracing::warn!("No configuration file found; using built-in defaults");
        return Ok(Config::default());
    };
    load_from_file(Some(path))
}

/// Build a [`Config`] from `AGENDAR_*` variables over the defaults
///
/// # Errors
/// Returns `AgendarError::Config` when `AGENDAR_WHATSAPP_NUMBER` is missing
/// or any value does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.office.whatsapp_number = env_var(WHATSAPP_NUMBER_VAR)?;
    if let Some(location) = env_opt("AGENDAR_OFFICE_LOCATION") {
        config.office.location = location;
    }

    config.calendar.timezone = env_opt("AGENDAR_TIMEZONE");
    if let Some(minutes) = env_opt("AGENDAR_EVENT_DURATION_MINUTES") {
        config.calendar.event_duration_minutes = minutes
            .parse()
            .map_err(|e| AgendarError::Config(format!("Invalid event duration '{minutes}': {e}")))?;
    }

    if let Some(areas) = env_opt("AGENDAR_AREAS") {
        config.form.areas = parse_list(&areas);
    }
    if let Some(policy) = env_opt("AGENDAR_FORM_POLICY") {
        config.form.policy = policy.parse::<FormPolicy>().map_err(AgendarError::Config)?;
    }

    if let Some(level) = env_opt("AGENDAR_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("AGENDAR_LOG_JSON", config.logging.json);

    config.timezone()?;
    Ok(config)
}

/// Read a config file, probing the standard locations when `path` is `None`
///
/// The extension picks the format. Sections and fields left out of the
/// file keep their defaults.
///
/// # Errors
/// Returns `AgendarError::Config` when the file is missing or unreadable,
/// does not parse, or names an unknown time zone.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) if path.exists() => path,
        Some(path) => {
            return Err(AgendarError::Config(format!("Config file not found: {}", path.display())))
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendarError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&path).map_err(InfraError::from)?;
    let config = parse_config(&contents, &path)?;
    config.timezone()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("json") {
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        other => Err(AgendarError::Config(format!("Unsupported config format: {other}"))),
    }
}

/// First existing config file
///
/// Looks in the working directory and then next to the executable. In each
/// base directory `config.*` and `agendar.*` are tried, followed by
/// `config.*` one and two levels up.
pub fn probe_config_paths() -> Option<PathBuf> {
    let bases = [
        std::env::current_dir().ok(),
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)),
    ];

    bases.iter().flatten().flat_map(|dir| candidates_in(dir)).find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    let here = FILE_STEMS.iter().map(|stem| dir.join(stem));
    let above = ["..", "../.."].iter().map(|up| dir.join(up).join("config"));

    here.chain(above)
        .flat_map(|base| FILE_EXTENSIONS.iter().map(move |ext| base.with_extension(ext)))
        .collect()
}

/// Required variable; blank counts as missing
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        AgendarError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// `1`, `true`, `yes` and `on` in any case are true; anything else set is false
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}
