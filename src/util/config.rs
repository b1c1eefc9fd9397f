//! Layered application settings: defaults, optional `config.json`, then environment.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;
use thiserror::Error;
use url::Url;

use crate::domain::Location;

const APP_QUALIFIER: &str = "uk.co";
const APP_ORG: &str = "SkipSelector";
const APP_NAME: &str = "SkipSelector";

pub const DEFAULT_API_URL: &str = "https://app.wewantwaste.co.uk/api";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "SKIP_HIRE_API_URL";
pub const ENV_MODE: &str = "SKIP_HIRE_MODE";
pub const ENV_POSTCODE: &str = "SKIP_HIRE_POSTCODE";
pub const ENV_AREA: &str = "SKIP_HIRE_AREA";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_filters: bool,
    pub show_best_value: bool,
    pub debug_mode: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_filters: true,
            show_best_value: true,
            debug_mode: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub mode: Mode,
    pub location: Location,
    pub features: FeatureFlags,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            mode: Mode::default(),
            location: Location::default(),
            features: FeatureFlags::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Contents of `config.json`; every key is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub enable_filters: Option<bool>,
    #[serde(default)]
    pub show_best_value: Option<bool>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Layers the file over defaults, then the environment over both.
    /// Empty environment values count as unset.
    pub fn resolve<F>(file: ConfigFile, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = env(ENV_API_URL).or(file.api_url) {
            config.api_base_url = Url::parse(raw.trim())?;
        }
        if let Some(raw) = env(ENV_MODE).or(file.mode) {
            config.mode = raw.parse()?;
        }
        if let Some(postcode) = env(ENV_POSTCODE).or(file.postcode) {
            config.location.postcode = postcode;
        }
        if let Some(area) = env(ENV_AREA).or(file.area) {
            config.location.area = area;
        }
        if let Some(enabled) = file.enable_filters {
            config.features.enable_filters = enabled;
        }
        if let Some(enabled) = file.show_best_value {
            config.features.show_best_value = enabled;
        }
        match file.request_timeout_secs {
            Some(0) => return Err(ConfigError::InvalidTimeout),
            Some(secs) => config.request_timeout = Duration::from_secs(secs),
            None => {}
        }
        config.features.debug_mode = config.mode == Mode::Development;

        Ok(config)
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Where the file layer of the configuration came from; logged once tracing is up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    NoConfigDir,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Missing(path) => write!(f, "defaults ({} not found)", path.display()),
            ConfigSource::NoConfigDir => f.write_str("defaults (no config directory)"),
        }
    }
}

/// Reads `config.json` if present. A missing file is not an error.
pub fn load_config_file() -> Result<(ConfigFile, ConfigSource), ConfigError> {
    match config_file() {
        Some(path) => read_config_file(path),
        None => Ok((ConfigFile::default(), ConfigSource::NoConfigDir)),
    }
}

fn read_config_file(path: PathBuf) -> Result<(ConfigFile, ConfigSource), ConfigError> {
    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok((ConfigFile::default(), ConfigSource::Missing(path)));
        }
        Err(err) => return Err(err.into()),
    };
    let file = serde_json::from_str(&data)?;
    Ok((file, ConfigSource::File(path)))
}

/// Resolves the configuration without logging; `main` logs the source after
/// installing the subscriber.
pub fn load_config() -> Result<(AppConfig, ConfigSource), ConfigError> {
    let (file, source) = load_config_file()?;
    let config = AppConfig::resolve(file, |key| std::env::var(key).ok())?;
    Ok((config, source))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unknown mode {0:?}, expected development or production")]
    InvalidMode(String),
    #[error("request_timeout_secs must be greater than zero")]
    InvalidTimeout,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
