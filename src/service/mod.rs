// src/service/mod.rs
//! Package service call interface
//!
//! `PackageService` is the seam the interception layer works at: the
//! host process talks to the service exclusively through this trait, via
//! replaceable reference slots, so a proxy implementing the same trait
//! can be swapped in without the host noticing.
//!
//! `PackageRegistry` is the real implementation backing the host.

pub mod registry;

pub use registry::PackageRegistry;

use crate::utils::errors::Result;

/// Flag bit for the identity query: include the package's signing
/// certificates in the returned record.
pub const GET_SIGNING_CERTIFICATES: u32 = 0x40;

/// A raw signing certificate. Contents are opaque; equality is by bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate(Vec<u8>);

impl Certificate {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Result of the identity query: a package's recorded metadata.
///
/// `signing_certificates` is populated only when the query's flags
/// include [`GET_SIGNING_CERTIFICATES`]; every other field is filled
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub package: String,
    pub version_code: u64,
    pub uid: u32,
    pub installer: Option<String>,
    pub signing_certificates: Option<Vec<Certificate>>,
}

/// The privileged package service's call interface.
///
/// Implementations must be callable concurrently from arbitrary threads.
pub trait PackageService: Send + Sync {
    /// The identity query: return the recorded metadata for `package`.
    /// `flags` select optional record fields; see
    /// [`GET_SIGNING_CERTIFICATES`].
    fn package_record(&self, package: &str, flags: u32) -> Result<PackageRecord>;

    /// Whether `package` is known to the service.
    fn has_package(&self, package: &str) -> bool;

    /// All known package names, in no particular order.
    fn packages(&self) -> Vec<String>;

    /// The uid the service has assigned to `package`.
    fn uid_for_package(&self, package: &str) -> Result<u32>;
}
