// src/utils/errors.rs
//! Crate-wide error taxonomy
//!
//! Three failure classes matter here:
//!
//! - `MalformedBundle`: the configured signature text does not frame a
//!   valid bundle (bad base64 or truncated binary framing)
//! - `LocatorUnavailable`: the host process does not expose the cached
//!   service references the installer needs to patch
//! - `PackageNotFound`: raised by the real service for unknown packages;
//!   the proxy propagates it verbatim, never translates it

use thiserror::Error;

/// Errors produced by the interception layer and the package service.
#[derive(Debug, Error)]
pub enum ShimError {
    /// The signature bundle framing is truncated or inconsistent.
    #[error("malformed signature bundle: {0}")]
    MalformedBundle(String),

    /// The host process does not expose the expected service reference slots.
    #[error("service locator unavailable: {0}")]
    LocatorUnavailable(String),

    /// The queried package is not known to the service.
    #[error("package not found: {0}")]
    PackageNotFound(String),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ShimError>;
