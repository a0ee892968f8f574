//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{config_files, http, output_formats, timeouts};
use crate::core::error::{LinkCheckError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each HEAD request
    pub timeout: Option<u64>,

    /// Interval in milliseconds between pause checks
    pub pause_poll_interval: Option<u64>,

    /// Redirects followed per request
    pub max_redirects: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            pause_poll_interval: Some(timeouts::DEFAULT_PAUSE_POLL_MS),
            max_redirects: Some(http::DEFAULT_MAX_REDIRECTS),
            user_agent: None,
            skip_ssl_verification: Some(false),
            proxy: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkCheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkCheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Candidate config file paths, nearest first
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=config_files::PARENT_SEARCH_DEPTH)
            .map(|depth| PathBuf::from(format!("{}{}", "../".repeat(depth), config_files::FILE_NAME)))
            .collect()
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        for path in Self::standard_locations() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring config file '{}': {e}", path.display()),
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Probe behavior
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(max_redirects) = cli_config.max_redirects {
            self.max_redirects = Some(max_redirects);
        }
        if let Some(poll) = cli_config.pause_poll_interval {
            self.pause_poll_interval = Some(poll);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }

        // Network & security
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get pause poll interval as Duration
    pub fn pause_poll_duration(&self) -> Duration {
        Duration::from_millis(
            self.pause_poll_interval
                .unwrap_or(timeouts::DEFAULT_PAUSE_POLL_MS),
        )
    }

    pub fn redirect_limit(&self) -> usize {
        self.max_redirects.unwrap_or(http::DEFAULT_MAX_REDIRECTS)
    }

    /// User agent sent with every probe
    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(LinkCheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(LinkCheckError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(poll) = self.pause_poll_interval
            && (poll == 0 || poll > timeouts::MAX_PAUSE_POLL_MS)
        {
            return Err(LinkCheckError::Config(format!(
                "Pause poll interval of {poll}ms is invalid. Expected a value between 1-{}.",
                timeouts::MAX_PAUSE_POLL_MS
            )));
        }

        if let Some(redirects) = self.max_redirects
            && redirects > http::MAX_REDIRECTS_LIMIT
        {
            return Err(LinkCheckError::Config(format!(
                "Redirect limit of {redirects} is too high. Expected at most {}.",
                http::MAX_REDIRECTS_LIMIT
            )));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(LinkCheckError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Probe behavior
    pub timeout: Option<u64>,             // --timeout
    pub max_redirects: Option<usize>,     // --max-redirects
    pub pause_poll_interval: Option<u64>, // --poll-interval

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Network & security
    pub user_agent: Option<String>,  // --user-agent
    pub proxy: Option<String>,       // --proxy
    pub skip_ssl_verification: bool, // --insecure

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout, Some(timeouts::DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
        assert_eq!(config.pause_poll_duration(), Duration::from_secs(1));
        assert_eq!(config.redirect_limit(), 10);
        assert_eq!(
            config.output_format,
            Some(output_formats::DEFAULT.to_string())
        );
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = 12\npause_poll_interval = 250\nuser_agent = \"test-agent\"")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.timeout, Some(12));
        assert_eq!(config.pause_poll_duration(), Duration::from_millis(250));
        assert_eq!(config.user_agent_or_default(), "test-agent");
        assert_eq!(config.proxy, None);

        Ok(())
    }

    #[test]
    fn test_config_load_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = [")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LinkCheckError::Config(_)));
        assert!(err.to_string().contains("Invalid TOML"));

        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load_from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            timeout: Some(45),
            verbose: true,
            skip_ssl_verification: true,
            output_format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout, Some(45));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.skip_ssl_verification, Some(true));
        assert_eq!(config.output_format, Some("json".to_string()));
        // Untouched fields keep their defaults
        assert_eq!(config.max_redirects, Some(http::DEFAULT_MAX_REDIRECTS));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_poll_interval() {
        for poll in [0, timeouts::MAX_PAUSE_POLL_MS + 1] {
            let config = Config {
                pause_poll_interval: Some(poll),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "poll {poll} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("text, json"));
    }

    #[test]
    fn test_validate_rejects_redirect_flood() {
        let config = Config {
            max_redirects: Some(http::MAX_REDIRECTS_LIMIT + 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_standard_locations_nearest_first() {
        let locations = Config::standard_locations();
        assert_eq!(locations.len(), config_files::PARENT_SEARCH_DEPTH + 1);
        assert_eq!(locations[0], PathBuf::from(config_files::FILE_NAME));
        assert!(locations[1].starts_with(".."));
    }
}
