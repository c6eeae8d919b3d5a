// src/service/registry.rs
//! In-memory package registry
//!
//! The real service implementation: a concurrent map of package name to
//! stored record. Reads are lock-free, which keeps the post-install hot
//! path (proxy forwarding) free of contention.

use crate::service::{
    Certificate, PackageRecord, PackageService, GET_SIGNING_CERTIFICATES,
};
use crate::utils::errors::{Result, ShimError};
use dashmap::DashMap;
use tracing::debug;

/// Everything the registry knows about one package.
#[derive(Debug, Clone)]
pub struct PackageEntry {
    pub version_code: u64,
    pub uid: u32,
    pub installer: Option<String>,
    pub signing_certificates: Vec<Certificate>,
}

/// The real package service: an in-memory registry.
#[derive(Default)]
pub struct PackageRegistry {
    packages: DashMap<String, PackageEntry>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a package entry.
    pub fn insert(&self, package: impl Into<String>, entry: PackageEntry) {
        let package = package.into();
        debug!("registering package {}", package);
        self.packages.insert(package, entry);
    }

    /// Remove a package entry.
    pub fn remove(&self, package: &str) -> Option<PackageEntry> {
        self.packages.remove(package).map(|(_, entry)| entry)
    }
}

impl PackageService for PackageRegistry {
    fn package_record(&self, package: &str, flags: u32) -> Result<PackageRecord> {
        let entry = self
            .packages
            .get(package)
            .ok_or_else(|| ShimError::PackageNotFound(package.to_string()))?;

        let signing_certificates = if flags & GET_SIGNING_CERTIFICATES != 0 {
            Some(entry.signing_certificates.clone())
        } else {
            None
        };

        Ok(PackageRecord {
            package: package.to_string(),
            version_code: entry.version_code,
            uid: entry.uid,
            installer: entry.installer.clone(),
            signing_certificates,
        })
    }

    fn has_package(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    fn packages(&self) -> Vec<String> {
        self.packages.iter().map(|e| e.key().clone()).collect()
    }

    fn uid_for_package(&self, package: &str) -> Result<u32> {
        self.packages
            .get(package)
            .map(|entry| entry.uid)
            .ok_or_else(|| ShimError::PackageNotFound(package.to_string()))
    }
}
