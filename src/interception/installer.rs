// src/interception/installer.rs
//! Hook installer
//!
//! One-shot, synchronous install sequence, run by the host bootstrap
//! before any application code can query the service: decode the base64
//! signature text, decode the framed bundle, locate the real service and
//! its cached reference slots, then write a [`SigningProxy`] into every
//! slot.
//!
//! The install boundary is fail-open: any failure is logged and
//! swallowed. If interception cannot be established, the host keeps
//! running against the unmodified real service; it is never crashed by
//! this layer.

use crate::bundle::SignatureBundle;
use crate::interception::locator::{locate, HostContext};
use crate::interception::proxy::{ProxyConfig, SigningProxy};
use crate::service::{PackageService, GET_SIGNING_CERTIFICATES};
use crate::utils::errors::{Result, ShimError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use tracing::{error, info};

/// Install the signing hook for the host's own package.
///
/// `signature_text` is the standard base64 (padded) encoding of the
/// framed replacement bundle. Never returns an error: failures are
/// logged at error level and the host is left on the real service.
pub fn install(host: &HostContext, signature_text: &str) {
    match try_install(host, signature_text) {
        Ok(replaced) => {
            info!(
                "signing hook installed for {} ({} slots patched)",
                host.package_name(),
                replaced
            );
        }
        Err(e) => {
            error!("signing hook install failed, continuing unhooked: {}", e);
        }
    }
}

fn try_install(host: &HostContext, signature_text: &str) -> Result<usize> {
    let raw = STANDARD
        .decode(signature_text)
        .map_err(|e| ShimError::MalformedBundle(format!("invalid base64: {}", e)))?;
    let replacement = SignatureBundle::decode(&raw)?;

    let (real, slots) = locate(host)?;

    let config = Arc::new(ProxyConfig::new(
        host.package_name(),
        GET_SIGNING_CERTIFICATES,
        replacement,
    ));
    let proxy: Arc<dyn PackageService> = Arc::new(SigningProxy::new(real, config));

    // Slots are independent; no ordering requirement.
    for slot in &slots {
        slot.replace(Arc::clone(&proxy));
    }

    Ok(slots.len())
}
