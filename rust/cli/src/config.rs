//! Layered CLI configuration.
//!
//! Defaults, then a TOML file named by `GAVEL_CONFIG`, then `GAVEL_SEED`,
//! `GAVEL_SHUFFLE_SUITS` and `GAVEL_LOG`. Command-line flags win over all of
//! these and are applied by the command handlers.

use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "GAVEL_CONFIG";
pub const ENV_SEED: &str = "GAVEL_SEED";
pub const ENV_SHUFFLE_SUITS: &str = "GAVEL_SHUFFLE_SUITS";
pub const ENV_LOG: &str = "GAVEL_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub shuffle_suits: bool,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub shuffle_suits: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            shuffle_suits: ValueSource::Default,
            log_filter: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_suits: false,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<ConfigError> for crate::error::CliError {
    fn from(e: ConfigError) -> Self {
        crate::error::CliError::Config(e.to_string())
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.shuffle_suits {
            cfg.shuffle_suits = v;
            sources.shuffle_suits = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Some(seed) = non_empty_env(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(flag) = non_empty_env(ENV_SHUFFLE_SUITS) {
        cfg.shuffle_suits = parse_bool(&flag)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid shuffle_suits: {}", flag)))?;
        sources.shuffle_suits = ValueSource::Env;
    }
    if let Some(filter) = non_empty_env(ENV_LOG) {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    shuffle_suits: Option<bool>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.log_filter.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: log_filter must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [ENV_CONFIG, ENV_SEED, ENV_SHUFFLE_SUITS, ENV_LOG] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.log_filter, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gavel.toml");
        fs::write(&path, "seed = 7\nshuffle_suits = true\nlog_filter = \"info\"\n").unwrap();

        unsafe {
            std::env::set_var(ENV_CONFIG, &path);
            std::env::set_var(ENV_SEED, "99");
        }
        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert!(resolved.config.shuffle_suits);
        assert_eq!(resolved.sources.shuffle_suits, ValueSource::File);
        assert_eq!(resolved.config.log_filter, "info");
        assert_eq!(resolved.sources.log_filter, ValueSource::File);
    }

    #[test]
    #[serial]
    fn bad_env_values_are_rejected() {
        clear_env();
        unsafe { std::env::set_var(ENV_SEED, "not-a-number") };
        assert!(matches!(load_with_sources(), Err(ConfigError::Invalid(_))));
        clear_env();

        unsafe { std::env::set_var(ENV_SHUFFLE_SUITS, "maybe") };
        assert!(matches!(load_with_sources(), Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn empty_log_filter_in_file_is_rejected() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gavel.toml");
        fs::write(&path, "log_filter = \"  \"\n").unwrap();

        unsafe { std::env::set_var(ENV_CONFIG, &path) };
        let result = load_with_sources();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn malformed_file_is_a_parse_error() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gavel.toml");
        fs::write(&path, "seed = [").unwrap();

        unsafe { std::env::set_var(ENV_CONFIG, &path) };
        let result = load_with_sources();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("2"), None);
    }
}
