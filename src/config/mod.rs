//! Configuration management

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::app::api::NavSettings;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding the computed route (defaults to route.json in the config dir)
    #[serde(default)]
    pub route_file: Option<PathBuf>,

    #[serde(default)]
    pub nav: NavSettings,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Resolved route file path
    pub fn route_path(&self) -> PathBuf {
        self.route_file
            .clone()
            .unwrap_or_else(|| get_config_dir().join("route.json"))
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("EXILE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/exile-leveling");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("exile-leveling");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/exile-leveling");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("exile-leveling");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();
    let defaults = NavSettings::default();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("nav.act_count", defaults.act_count as i64)?
        .set_default("nav.feedback_url", defaults.feedback_url)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (EXILE_PORT, EXILE_NAV__ACT_COUNT, etc.)
        .add_source(
            ::config::Environment::with_prefix("EXILE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: EXILE_PORT > PORT > config > default
    if std::env::var("EXILE_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.nav.act_count == 0 {
        bail!("nav.act_count must be at least 1");
    }
    match url::Url::parse(&config.nav.feedback_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => bail!("nav.feedback_url must be http(s), got {}", url.scheme()),
        Err(e) => bail!("nav.feedback_url is not a valid URL: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            "EXILE_PORT",
            "PORT",
            "EXILE_ROUTE_FILE",
            "EXILE_NAV__ACT_COUNT",
            "EXILE_NAV__FEEDBACK_URL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("EXILE_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("EXILE_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.nav, NavSettings::default());
        assert_eq!(config.route_path(), temp_dir.path().join("route.json"));
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("EXILE_CONFIG_DIR", "/tmp/exile-test-nonexistent");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("EXILE_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_exile_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("EXILE_CONFIG_DIR", "/tmp/exile-test-nonexistent");
        env::set_var("EXILE_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("EXILE_CONFIG_DIR");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_nav_settings_from_config_file() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "route_file = \"/srv/route.json\"\n\n[nav]\nact_count = 5\nfeedback_url = \"https://example.com/feedback\"\n",
        )
        .expect("write config");
        env::set_var("EXILE_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("EXILE_CONFIG_DIR");

        assert_eq!(config.nav.act_count, 5);
        assert_eq!(config.nav.feedback_url, "https://example.com/feedback");
        assert_eq!(config.route_path(), PathBuf::from("/srv/route.json"));
    }

    #[test]
    #[serial]
    fn test_invalid_feedback_url_rejected() {
        clear_env();
        env::set_var("EXILE_CONFIG_DIR", "/tmp/exile-test-nonexistent");
        env::set_var("EXILE_NAV__FEEDBACK_URL", "not a url");

        let result = load_config();

        clear_env();
        env::remove_var("EXILE_CONFIG_DIR");

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_zero_acts_rejected() {
        clear_env();
        env::set_var("EXILE_CONFIG_DIR", "/tmp/exile-test-nonexistent");
        env::set_var("EXILE_NAV__ACT_COUNT", "0");

        let result = load_config();

        clear_env();
        env::remove_var("EXILE_CONFIG_DIR");

        assert!(result.is_err());
    }
}
