// src/utils/config.rs
//! Configuration for the demo host
//!
//! Layered in the usual order: built-in defaults, then an optional
//! `sigshim` config file in the working directory, then `SIGSHIM_*`
//! environment variables. The only interesting knob is `signature_text`,
//! the base64-encoded replacement signature bundle handed to the
//! installer.

use crate::utils::errors::{Result, ShimError};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// Demo host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShimConfig {
    /// Package identity of the hosting application.
    pub package_name: String,

    /// Base64 (standard alphabet, padded) encoding of the framed
    /// replacement signature bundle. Empty means "demo mode": the host
    /// fabricates a placeholder bundle itself.
    pub signature_text: String,

    /// Tracing filter directive (e.g. "info", "sigshim=debug").
    pub log_filter: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            package_name: "com.example.app".to_string(),
            signature_text: String::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl ShimConfig {
    /// Load configuration from `./sigshim.{toml,json,...}` (optional) and
    /// `SIGSHIM_*` environment variables, on top of defaults.
    pub fn load() -> Result<Self> {
        Self::build(File::with_name("sigshim").required(false))
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_path(path: &Path) -> Result<Self> {
        Self::build(File::from(path).format(FileFormat::Toml))
    }

    fn build(source: File<config::FileSourceFile, config::FileFormat>) -> Result<Self> {
        let defaults = ShimConfig::default();

        Config::builder()
            .set_default("package_name", defaults.package_name)
            .and_then(|b| b.set_default("signature_text", defaults.signature_text))
            .and_then(|b| b.set_default("log_filter", defaults.log_filter))
            .map(|b| {
                b.add_source(source)
                    .add_source(Environment::with_prefix("SIGSHIM"))
            })
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ShimError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShimConfig::default();
        assert_eq!(config.package_name, "com.example.app");
        assert!(config.signature_text.is_empty());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "package_name = \"com.vendor.target\"").unwrap();
        writeln!(file, "signature_text = \"AA==\"").unwrap();
        file.flush().unwrap();

        let config = ShimConfig::load_path(file.path()).unwrap();
        assert_eq!(config.package_name, "com.vendor.target");
        assert_eq!(config.signature_text, "AA==");
        // Unset keys fall back to defaults
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ShimConfig::load().unwrap();
        assert!(!config.package_name.is_empty());
    }
}
