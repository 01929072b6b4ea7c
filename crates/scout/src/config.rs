//! Configuration management for scout
//!
//! Handles the endpoint location, the query-parameter naming scheme, form
//! defaults and display options. Everything has a default so an empty or
//! missing config file is valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "SCOUT_CONFIG";
pub const ENDPOINT_ENV: &str = "SCOUT_ENDPOINT";
pub const TIMEOUT_ENV: &str = "SCOUT_TIMEOUT_SECS";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub endpoint: EndpointConfig,
  #[serde(default)]
  pub query: QueryParams,
  #[serde(default)]
  pub form: FormDefaults,
  #[serde(default)]
  pub display: DisplayConfig,
}

/// Where the leads service lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Appended to `base_url`; may be empty when `base_url` is already the full endpoint
  #[serde(default = "default_path")]
  pub path: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

/// Query-string names sent to the service.
///
/// The v1 API takes `country`, `city`, `category` and `limit`. The older
/// `/imprese-senza-sito` service wants `paese`, `città`, `keywords` and `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
  #[serde(default = "default_country_param")]
  pub country: String,
  #[serde(default = "default_city_param")]
  pub city: String,
  #[serde(default = "default_category_param")]
  pub category: String,
  #[serde(default = "default_limit_param")]
  pub limit: String,
  #[serde(default = "default_keyword_separator")]
  pub keyword_separator: String,
}

/// How duplicate keyword tags are detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordDedup {
  #[default]
  CaseSensitive,
  CaseInsensitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
  #[serde(default = "default_country")]
  pub country: String,
  #[serde(default = "default_city")]
  pub city: String,
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub dedup: KeywordDedup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
  #[default]
  Cyber,
  Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
  #[serde(default)]
  pub theme: ThemeName,
  /// Emit OSC 8 hyperlinks for websites
  #[serde(default = "default_true")]
  pub hyperlinks: bool,
  /// Fixed wrap width; the terminal width is used when unset
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub width: Option<usize>,
}

// Defaults
fn default_base_url() -> String {
  "https://imprese.onrender.com".to_string()
}
fn default_path() -> String {
  "/api/v1/leads".to_string()
}
fn default_timeout_secs() -> u64 {
  60
}
fn default_country_param() -> String {
  "country".to_string()
}
fn default_city_param() -> String {
  "city".to_string()
}
fn default_category_param() -> String {
  "category".to_string()
}
fn default_limit_param() -> String {
  "limit".to_string()
}
fn default_keyword_separator() -> String {
  ",".to_string()
}
fn default_country() -> String {
  "Italia".to_string()
}
fn default_city() -> String {
  "Milano".to_string()
}
fn default_limit() -> u32 {
  10
}
fn default_true() -> bool {
  true
}

impl Default for EndpointConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      path: default_path(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

impl Default for QueryParams {
  fn default() -> Self {
    Self {
      country: default_country_param(),
      city: default_city_param(),
      category: default_category_param(),
      limit: default_limit_param(),
      keyword_separator: default_keyword_separator(),
    }
  }
}

impl Default for FormDefaults {
  fn default() -> Self {
    Self {
      country: default_country(),
      city: default_city(),
      limit: default_limit(),
      dedup: KeywordDedup::default(),
    }
  }
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self { theme: ThemeName::default(), hyperlinks: true, width: None }
  }
}

impl EndpointConfig {
  /// Full endpoint URL, joining base and path with exactly one slash
  pub fn url(&self) -> String {
    let base = self.base_url.trim_end_matches('/');
    let path = self.path.trim_start_matches('/');
    if path.is_empty() {
      base.to_string()
    } else {
      format!("{base}/{path}")
    }
  }
}

/// Default config location: `<config dir>/scout/config.json`
pub fn default_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("scout").join("config.json"))
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: display.clone(), source })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path: display, source })
  }

  /// Resolve and load the effective configuration.
  ///
  /// An explicit path or `$SCOUT_CONFIG` must exist. The default location is
  /// optional. Environment overrides are applied last.
  pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
    let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);

    let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
      Some(path) => Self::load_from_file(path)?,
      None => match default_config_path() {
        Some(path) if path.exists() => Self::load_from_file(path)?,
        _ => Self::default(),
      },
    };

    config.apply_env_overrides()?;
    Ok(config)
  }

  /// Apply `SCOUT_ENDPOINT` and `SCOUT_TIMEOUT_SECS`
  pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
    if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
      if !endpoint.trim().is_empty() {
        self.endpoint.base_url = endpoint.trim().to_string();
        self.endpoint.path = String::new();
      }
    }

    if let Ok(raw) = env::var(TIMEOUT_ENV) {
      self.endpoint.timeout_secs = match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => return Err(ConfigError::InvalidOverride { key: TIMEOUT_ENV.to_string(), value: raw }),
      };
    }

    Ok(())
  }
}
