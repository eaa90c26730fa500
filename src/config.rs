//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! binds. Command-line flags override individual values after the
//! environment is read (see the binary's `--help`).
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DESTINATION_PATH` - Redirect target for accepted logins (default: `/home`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from forwarding headers (default: `false`)
//!
//! The destination is deliberately a single value: every deployment gets
//! exactly one redirect target, however many places render a login form.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Path accepted logins are redirected to.
    pub destination_path: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP
    /// headers. Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so loading itself cannot fail;
    /// call [`Config::validate`] before using the result.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let destination_path =
            env::var("DESTINATION_PATH").unwrap_or_else(|_| "/home".to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            destination_path,
            log_level,
            log_format,
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` format
    /// - `destination_path` is not an absolute local path
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate destination path: local absolute path, no external targets
        if !self.destination_path.starts_with('/') {
            anyhow::bail!(
                "DESTINATION_PATH must start with '/', got '{}'",
                self.destination_path
            );
        }

        if self.destination_path.starts_with("//") {
            anyhow::bail!(
                "DESTINATION_PATH must not be protocol-relative, got '{}'",
                self.destination_path
            );
        }

        if self.destination_path.contains(char::is_whitespace) {
            anyhow::bail!(
                "DESTINATION_PATH must not contain whitespace, got '{}'",
                self.destination_path
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Destination path: {}", self.destination_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            destination_path: "/home".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_destination_must_be_absolute() {
        let mut config = valid_config();

        config.destination_path = "home.html".to_string();
        assert!(config.validate().is_err());

        config.destination_path = "/client/src/pages/home.html".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_destination_rejects_external_targets() {
        let mut config = valid_config();

        config.destination_path = "//evil.example.com/home".to_string();
        assert!(config.validate().is_err());

        config.destination_path = "/home page".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DESTINATION_PATH");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
            env::remove_var("BEHIND_PROXY");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.destination_path, "/home");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(!config.behind_proxy);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DESTINATION_PATH", "/welcome");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("BEHIND_PROXY", "true");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.destination_path, "/welcome");
        assert_eq!(config.log_format, "json");
        assert!(config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DESTINATION_PATH");
            env::remove_var("LOG_FORMAT");
            env::remove_var("BEHIND_PROXY");
        }
    }

    #[test]
    #[serial]
    fn test_behind_proxy_parsing() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BEHIND_PROXY", "1");
        }
        assert!(Config::from_env().behind_proxy);

        unsafe {
            env::set_var("BEHIND_PROXY", "TRUE");
        }
        assert!(Config::from_env().behind_proxy);

        unsafe {
            env::set_var("BEHIND_PROXY", "no");
        }
        assert!(!Config::from_env().behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("BEHIND_PROXY");
        }
    }
}
