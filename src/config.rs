use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_ENV, DEFAULT_ASSETS_DIR, DEFAULT_TICK_MS, DEFAULT_TIMEOUT_SECS};
use crate::models::Source;

/// On-disk shape of `config.yaml`. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tick_ms: Option<u64>,
    source: Option<SourceFile>,
    request_timeout_secs: Option<u64>,
}

/// `source:` block, exactly one of `dir: <path>` or `http: <url>`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SourceFile {
    dir: Option<PathBuf>,
    http: Option<String>,
}

impl SourceFile {
    fn into_source(self) -> Result<Source> {
        match (self.dir, self.http) {
            (Some(root), None) => Ok(Source::Dir { root }),
            (None, Some(base_url)) => Ok(Source::Http {
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
            (Some(_), Some(_)) => anyhow::bail!("source must set only one of `dir` or `http`"),
            (None, None) => anyhow::bail!("source must set `dir` or `http`"),
        }
    }
}

/// Runtime configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub tick_period: Duration,
    pub source: Source,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
            source: Source::Dir {
                root: PathBuf::from(DEFAULT_ASSETS_DIR),
            },
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load from `$TICKFETCH_CONFIG` or `~/.tickfetch/config.yaml`.
    ///
    /// A missing file yields defaults; an unreadable one is logged and ignored.
    pub fn load() -> Self {
        Config::load_at(&config_path())
    }

    /// Same as [`Config::load`] for an explicit path
    pub fn load_at(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match Config::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Config::default()
            }
        }
    }

    /// Parse a config file at an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Config::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content).context("parsing config yaml")?
        };

        let defaults = Config::default();

        let tick_period = match file.tick_ms {
            Some(0) => anyhow::bail!("tick_ms must be greater than zero"),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tick_period,
        };

        let source = match file.source {
            Some(source) => source.into_source()?,
            None => defaults.source,
        };

        let request_timeout = match file.request_timeout_secs {
            Some(0) => anyhow::bail!("request_timeout_secs must be greater than zero"),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.request_timeout,
        };

        Ok(Config {
            tick_period,
            source,
            request_timeout,
        })
    }
}

fn config_path() -> PathBuf {
    config_path_from(std::env::var_os(CONFIG_ENV))
}

fn config_path_from(env_override: Option<OsString>) -> PathBuf {
    if let Some(path) = env_override {
        return PathBuf::from(path);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tickfetch")
        .join("config.yaml")
}
