use crate::error::{PortfolioError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const MIN_TICK_RATE_MS: u64 = 16;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub account: String,
    pub tagline: String,
    pub api_base_url: String,
    pub github_token: Option<String>,
    pub tick_rate_ms: u64,
    pub show_scene: bool,
    pub log_file: Option<PathBuf>,
    /// Set when a layer failed to parse and defaults were used instead;
    /// logged once the subscriber is up.
    #[serde(skip)]
    pub load_warning: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("tagline", &self.tagline)
            .field("api_base_url", &self.api_base_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("tick_rate_ms", &self.tick_rate_ms)
            .field("show_scene", &self.show_scene)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: "Founder-OSS".to_string(),
            tagline: "Systems Engineering \u{2022} Automation \u{2022} 3D Web".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            github_token: None,
            tick_rate_ms: 50,
            show_scene: true,
            log_file: None,
            load_warning: None,
        }
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub account: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Result<Self> {
        let config_file = match overrides.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(PortfolioError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => config_dir().join("foundry").join("config.toml"),
        };

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("FOUNDRY_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(account) = overrides.account {
            figment = figment.merge(Serialized::default("account", account));
        }
        if let Some(path) = overrides.log_file {
            figment = figment.merge(Serialized::default("log_file", path));
        }

        let mut config: Config = match figment.extract() {
            Ok(config) => config,
            Err(e) => Config {
                load_warning: Some(format!("config parse error, using defaults: {e}")),
                ..Config::default()
            },
        };
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.account = self.account.trim().to_string();
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self.tick_rate_ms = self.tick_rate_ms.max(MIN_TICK_RATE_MS);
        if self.github_token.as_deref().is_some_and(str::is_empty) {
            self.github_token = None;
        }
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [
            "FOUNDRY_ACCOUNT",
            "FOUNDRY_TICK_RATE_MS",
            "GITHUB_TOKEN",
            "XDG_CONFIG_HOME",
        ] {
            std::env::remove_var(key);
        }
    }

    fn isolated() -> tempfile::TempDir {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        dir
    }

    #[test]
    #[serial]
    fn defaults_without_any_layer() {
        let _dir = isolated();
        let config = Config::load(Overrides::default()).unwrap();
        assert_eq!(config.account, "Founder-OSS");
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(config.github_token.is_none());
        assert!(config.show_scene);
        clear_env();
    }

    #[test]
    #[serial]
    fn file_then_env_then_cli() {
        let dir = isolated();
        let path = dir.path().join("custom.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "account = \"from-file\"").unwrap();
        writeln!(f, "api_base_url = \"http://localhost:9000/\"").unwrap();
        writeln!(f, "tick_rate_ms = 100").unwrap();

        std::env::set_var("FOUNDRY_TICK_RATE_MS", "5");
        std::env::set_var("GITHUB_TOKEN", "ghp_secret");

        let config = Config::load(Overrides {
            config_file: Some(path),
            account: Some("from-cli".to_string()),
            log_file: None,
        })
        .unwrap();

        assert_eq!(config.account, "from-cli");
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.tick_rate_ms, MIN_TICK_RATE_MS);
        assert_eq!(config.github_token.as_deref(), Some("ghp_secret"));
        clear_env();
    }

    #[test]
    #[serial]
    fn missing_explicit_config_file_is_an_error() {
        let dir = isolated();
        let result = Config::load(Overrides {
            config_file: Some(dir.path().join("nope.toml")),
            ..Default::default()
        });
        assert!(matches!(result, Err(PortfolioError::Config(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn bad_file_falls_back_to_defaults_with_warning() {
        let dir = isolated();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        let config = Config::load(Overrides {
            config_file: Some(path),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert!(config.load_warning.is_some());
        clear_env();
    }

    #[test]
    #[serial]
    fn empty_token_is_treated_as_absent() {
        let _dir = isolated();
        std::env::set_var("GITHUB_TOKEN", "");
        let config = Config::load(Overrides::default()).unwrap();
        assert!(config.github_token.is_none());
        clear_env();
    }

    #[test]
    fn debug_redacts_token() {
        let config = Config {
            github_token: Some("ghp_secret".to_string()),
            ..Config::default()
        };
        let shown = format!("{config:?}");
        assert!(shown.contains("[REDACTED]"));
        assert!(!shown.contains("ghp_secret"));
    }
}
