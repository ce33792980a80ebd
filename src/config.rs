//! Application-level configuration loading: database location, port and game page.

use std::{env, fs, io, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "POKER_LEAGUE_CONFIG_PATH";
/// Environment variable that overrides the database path.
const DB_PATH_ENV: &str = "POKER_LEAGUE_DB_PATH";
/// Environment variable that overrides the listening port.
const PORT_ENV: &str = "PORT";
/// League snapshot file used when nothing else is configured.
const DEFAULT_DB_PATH: &str = "game.db.json";
const DEFAULT_PORT: u16 = 5000;
/// Session page shipped with the binary.
const DEFAULT_GAME_PAGE: &str = include_str!("../assets/game.html");

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    database_path: PathBuf,
    port: u16,
    game_page: Option<PathBuf>,
}

impl AppConfig {
    /// Load the configuration from disk and the environment, falling back to built-in defaults.
    pub fn load() -> Self {
        Self::load_file().with_overrides(|key| env::var(key).ok())
    }

    fn load_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply environment overrides looked up through `lookup`.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(DB_PATH_ENV).filter(|value| !value.is_empty()) {
            self.database_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(PORT_ENV) {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(%value, error = %err, "ignoring invalid port override"),
            }
        }

        self
    }

    /// Path of the league snapshot file.
    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }

    /// Port the HTTP server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// HTML of the session page: the configured file, or the embedded page.
    pub fn load_game_page(&self) -> io::Result<String> {
        match &self.game_page {
            Some(path) => {
                let page = fs::read_to_string(path)?;
                info!(path = %path.display(), "loaded game page");
                Ok(page)
            }
            None => Ok(DEFAULT_GAME_PAGE.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            port: DEFAULT_PORT,
            game_page: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    database_path: Option<PathBuf>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    game_page: Option<PathBuf>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            database_path: value.database_path.unwrap_or(defaults.database_path),
            port: value.port.unwrap_or(defaults.port),
            game_page: value.game_page,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_fills_missing_fields_with_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.port(), 8080);
        assert_eq!(config.database_path(), &PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default().with_overrides(|key| match key {
            DB_PATH_ENV => Some("/tmp/league.json".into()),
            PORT_ENV => Some("6000".into()),
            _ => None,
        });

        assert_eq!(config.database_path(), &PathBuf::from("/tmp/league.json"));
        assert_eq!(config.port(), 6000);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = AppConfig::default().with_overrides(|key| {
            (key == PORT_ENV).then(|| "not-a-port".to_string())
        });
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[test]
    fn embedded_game_page_is_used_by_default() {
        let page = AppConfig::default().load_game_page().unwrap();
        assert!(page.contains("/ws"));
    }

    #[test]
    fn missing_game_page_is_an_error() {
        let config = AppConfig {
            game_page: Some(PathBuf::from("/definitely/not/here/game.html")),
            ..AppConfig::default()
        };
        assert!(config.load_game_page().is_err());
    }
}
