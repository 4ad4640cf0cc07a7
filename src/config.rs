//! Runtime configuration from the environment.
//!
//! Values come from process environment variables, optionally seeded by a
//! `.env` file (see [`Config::load`]).

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default log4rs config file, looked up in the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// When to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<ColorMode, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(ColorMode::Auto),
            "always" | "on" | "1" => Ok(ColorMode::Always),
            "never" | "off" | "0" => Ok(ColorMode::Never),
            other => Err(format!("invalid color mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file (`CIDR_CALC_LOG_CONFIG`).
    pub log_config: PathBuf,
    /// Console log level used when the YAML file is missing (`CIDR_CALC_LOG_LEVEL`).
    pub log_level: LevelFilter,
    /// `CIDR_CALC_COLOR`, forced to never by `NO_COLOR`.
    pub color: ColorMode,
    /// The `.env` file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: LevelFilter::Warn,
            color: ColorMode::Auto,
            env_file: None,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the configuration from the environment.
    pub fn load() -> Result<Config, Box<dyn Error>> {
        let env_file = dotenv::dotenv().ok();
        let mut config = Config::from_lookup(|key| std::env::var(key).ok())?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Build a configuration from any key lookup (the process environment in [`Config::load`]).
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("CIDR_CALC_LOG_CONFIG") {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup("CIDR_CALC_LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(&level)
                .map_err(|_| format!("invalid CIDR_CALC_LOG_LEVEL '{level}'"))?;
        }
        if let Some(color) = lookup("CIDR_CALC_COLOR") {
            config.color = color.parse()?;
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = ColorMode::Never;
        }
        Ok(config)
    }

    /// Initialize log4rs from the YAML file, or a stderr console logger if it is missing.
    pub fn init_logging(&self) -> Result<(), Box<dyn Error>> {
        self.init_logger()?;
        if let Some(env_file) = &self.env_file {
            log::debug!("Loaded environment from {}", env_file.display());
        }
        Ok(())
    }

    fn init_logger(&self) -> Result<(), Box<dyn Error>> {
        if Path::new(&self.log_config).exists() {
            log4rs::init_file(&self.log_config, Default::default()).map_err(|e| {
                format!(
                    "Error initializing log4rs from {}: {e}",
                    self.log_config.display()
                )
            })?;
            log::info!("Logging configured from {}", self.log_config.display());
            return Ok(());
        }

        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
            .build();
        let log_config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(self.log_level))?;
        log4rs::init_config(log_config)?;
        log::info!(
            "{} not found, logging to stderr at {}",
            self.log_config.display(),
            self.log_level
        );
        Ok(())
    }

    /// Apply the color mode to the `colored` crate.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CIDR_CALC_LOG_CONFIG", "/tmp/other.yml"),
            ("CIDR_CALC_LOG_LEVEL", "debug"),
            ("CIDR_CALC_COLOR", "always"),
        ]))
        .unwrap();
        assert_eq!(config.log_config, PathBuf::from("/tmp/other.yml"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_no_color_wins() {
        let config = Config::from_lookup(lookup_from(&[
            ("CIDR_CALC_COLOR", "always"),
            ("NO_COLOR", "1"),
        ]))
        .unwrap();
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("CIDR_CALC_LOG_LEVEL", "loud")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("CIDR_CALC_COLOR", "rainbow")])).is_err());
    }
}
