//! Configuration for file-wedge.
//!
//! This module provides the process-wide default text encoding.
//! Use [`ConfigBuilder`] at application startup to change the default.

use std::sync::OnceLock;

use crate::encoding::Encoding;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration for file-wedge.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Encoding used when a read call does not name one.
    /// Defaults to UTF-8, matching the original host fallback.
    pub default_encoding: Encoding,
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    default_encoding: Option<Encoding>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default text encoding for reads that do not name one.
    ///
    /// Default: UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use file_wedge::config::ConfigBuilder;
    /// use file_wedge::Encoding;
    ///
    /// ConfigBuilder::new()
    ///     .default_encoding(Encoding::Utf8)
    ///     .init();
    /// ```
    pub fn default_encoding(mut self, encoding: Encoding) -> Self {
        self.default_encoding = Some(encoding);
        self
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        let config = Config {
            default_encoding: self.default_encoding.unwrap_or_default(),
        };
        CONFIG.set(config).is_ok()
    }
}

/// Initialize file-wedge with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_encoding, Encoding::Utf8);
    }

    #[test]
    fn test_builder() {
        let builder = ConfigBuilder::new().default_encoding(Encoding::Latin1);
        assert_eq!(builder.default_encoding, Some(Encoding::Latin1));
    }
}
