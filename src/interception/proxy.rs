// src/interception/proxy.rs
//! Signing proxy
//!
//! A pass-through implementation of [`PackageService`] wrapping the real
//! service. Every call forwards to the wrapped instance; exactly one
//! call shape is special-cased: the identity query for the configured
//! target package with the signing-certificates flag bit set. For that
//! shape the proxy still calls through, then overwrites the
//! certificate-list field of its own copy of the result with the
//! configured replacement.
//!
//! The proxy holds no mutable state, so concurrent invocation from
//! arbitrary threads needs no locks.

use crate::bundle::SignatureBundle;
use crate::service::{Certificate, PackageRecord, PackageService};
use crate::utils::errors::Result;
use std::sync::Arc;
use tracing::debug;

/// Immutable interception condition and payload. Built once at install
/// time and shared by reference across all proxy invocations.
pub struct ProxyConfig {
    target_package: String,
    match_flag: u32,
    replacement: SignatureBundle,
}

impl ProxyConfig {
    pub fn new(
        target_package: impl Into<String>,
        match_flag: u32,
        replacement: SignatureBundle,
    ) -> Self {
        Self {
            target_package: target_package.into(),
            match_flag,
            replacement,
        }
    }

    pub fn target_package(&self) -> &str {
        &self.target_package
    }

    /// Whether an identity query for `package` with `flags` is the
    /// intercepted shape: flag bit set and exact package-name equality,
    /// no normalization.
    fn matches(&self, package: &str, flags: u32) -> bool {
        flags & self.match_flag != 0 && package == self.target_package
    }

    /// Materialize the replacement certificates, one per blob, order
    /// preserved. A fresh vector per call: results never share state
    /// across invocations.
    fn forged_certificates(&self) -> Vec<Certificate> {
        self.replacement
            .iter()
            .map(|blob| Certificate::new(blob.to_vec()))
            .collect()
    }
}

/// The interception proxy. Owns forwarding responsibility for the real
/// service, not its lifecycle.
pub struct SigningProxy {
    inner: Arc<dyn PackageService>,
    config: Arc<ProxyConfig>,
}

impl SigningProxy {
    pub fn new(inner: Arc<dyn PackageService>, config: Arc<ProxyConfig>) -> Self {
        Self { inner, config }
    }
}

impl PackageService for SigningProxy {
    fn package_record(&self, package: &str, flags: u32) -> Result<PackageRecord> {
        // Always ask the real service first; its failures propagate
        // verbatim whether or not the call matches.
        let mut record = self.inner.package_record(package, flags)?;

        if self.config.matches(package, flags) {
            debug!(
                "substituting {} signing certificates for {}",
                self.config.replacement.len(),
                package
            );
            record.signing_certificates = Some(self.config.forged_certificates());
        }

        Ok(record)
    }

    fn has_package(&self, package: &str) -> bool {
        self.inner.has_package(package)
    }

    fn packages(&self) -> Vec<String> {
        self.inner.packages()
    }

    fn uid_for_package(&self, package: &str) -> Result<u32> {
        self.inner.uid_for_package(package)
    }
}
