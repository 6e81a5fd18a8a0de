//! Client configuration: `$PAGERDUTY_HOME/config.toml` overlaid with
//! environment variables and command-line overrides.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::client::AuthScheme;
use crate::client::DEFAULT_BASE_URL;
use crate::error::Error;
use crate::error::Result;

const CONFIG_TOML_FILE: &str = "config.toml";

pub const PAGERDUTY_HOME_ENV_VAR: &str = "PAGERDUTY_HOME";
pub const PAGERDUTY_TOKEN_ENV_VAR: &str = "PAGERDUTY_TOKEN";
pub const PAGERDUTY_BASE_URL_ENV_VAR: &str = "PAGERDUTY_BASE_URL";
pub const PAGERDUTY_FROM_ENV_VAR: &str = "PAGERDUTY_FROM";

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigToml {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub auth_scheme: Option<AuthScheme>,
    pub user_agent: Option<String>,
    pub from: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

/// Values that take precedence over `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub from: Option<String>,
}

impl ConfigOverrides {
    pub fn from_env() -> Self {
        Self {
            base_url: non_empty_env(PAGERDUTY_BASE_URL_ENV_VAR),
            token: non_empty_env(PAGERDUTY_TOKEN_ENV_VAR),
            from: non_empty_env(PAGERDUTY_FROM_ENV_VAR),
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: ConfigOverrides) -> Self {
        Self {
            base_url: self.base_url.or(fallback.base_url),
            token: self.token.or(fallback.token),
            from: self.from.or(fallback.from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub auth_scheme: AuthScheme,
    pub user_agent: Option<String>,
    pub from: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(ConfigToml::default(), ConfigOverrides::default())
    }
}

impl Config {
    /// Load `config.toml` from `pagerduty_home` (a missing file means
    /// defaults) and apply `overrides` on top.
    pub fn load(pagerduty_home: &Path, overrides: ConfigOverrides) -> Result<Self> {
        let cfg = load_config_toml(pagerduty_home)?;
        Ok(Self::from_toml(cfg, overrides))
    }

    pub fn from_toml(cfg: ConfigToml, overrides: ConfigOverrides) -> Self {
        let base_url = overrides
            .base_url
            .or(cfg.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            token: overrides.token.or(cfg.token),
            auth_scheme: cfg.auth_scheme.unwrap_or_default(),
            user_agent: cfg.user_agent,
            from: overrides.from.or(cfg.from),
            request_timeout: cfg.request_timeout_ms.map(Duration::from_millis),
        }
    }
}

fn load_config_toml(pagerduty_home: &Path) -> Result<ConfigToml> {
    let path = pagerduty_home.join(CONFIG_TOML_FILE);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(ConfigToml::default());
        }
        Err(err) => {
            return Err(Error::Config(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };
    toml::from_str(&contents).map_err(|err| {
        tracing::error!("Failed to parse {}: {err}", path.display());
        Error::Config(format!("failed to parse {}: {err}", path.display()))
    })
}

/// `$PAGERDUTY_HOME` when set, otherwise `~/.pagerduty`. The directory is
/// not required to exist.
pub fn find_pagerduty_home() -> io::Result<PathBuf> {
    if let Some(home) = non_empty_env(PAGERDUTY_HOME_ENV_VAR) {
        return Ok(PathBuf::from(home));
    }
    let mut home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not find home directory")
    })?;
    home.push(".pagerduty");
    Ok(home)
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
