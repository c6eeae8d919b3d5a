// src/lib.rs
//! sigshim
//!
//! An in-process interception layer for a package/identity service. The
//! layer wraps the real service behind a pass-through proxy that forges
//! the signing-certificate list for exactly one query shape (the
//! identity query for one target package with the signing-certificates
//! flag set); every other call and every other caller is untouched.
//!
//! # Architecture
//!
//! - **bundle**: Framed codec for the ordered set of raw certificate blobs
//! - **service**: The service call interface, record types, and the real
//!   in-memory registry implementation
//! - **interception**: Service locator, signing proxy, installer
//! - **utils**: Errors and configuration

// Public module exports
pub mod bundle;
pub mod interception;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use bundle::SignatureBundle;
pub use interception::{install, HostContext, ProcessState, ServiceSlot, SigningProxy};
pub use service::{
    Certificate, PackageRecord, PackageRegistry, PackageService, GET_SIGNING_CERTIFICATES,
};
pub use utils::config::ShimConfig;
pub use utils::errors::{Result, ShimError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_match_flag_constant() {
        assert_eq!(GET_SIGNING_CERTIFICATES, 0x40);
    }
}
