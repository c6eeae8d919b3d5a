// src/main.rs
//! sigshim demo host
//!
//! Stands in for the bootstrap collaborator: builds a host process with a
//! real package registry, installs the signing hook once at startup, and
//! shows the forged and true answers side by side.

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sigshim::{
    install, Certificate, HostContext, PackageRegistry, PackageService, ShimConfig,
    SignatureBundle, GET_SIGNING_CERTIFICATES,
};
use sigshim::service::registry::PackageEntry;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = ShimConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_filter.clone())
        }))
        .init();

    info!("sigshim demo host v{}", sigshim::VERSION);

    // The "real" privileged service, with the application's true identity
    let registry = Arc::new(PackageRegistry::new());
    registry.insert(
        config.package_name.clone(),
        PackageEntry {
            version_code: 1,
            uid: 10100,
            installer: Some("com.android.vending".to_string()),
            signing_certificates: vec![Certificate::new(b"true-release-cert".to_vec())],
        },
    );

    let host = HostContext::new(config.package_name.clone(), registry);

    // With no configured signature text, demo with a placeholder bundle
    let signature_text = if config.signature_text.is_empty() {
        let bundle = SignatureBundle::new(vec![b"forged-release-cert".to_vec()])?;
        STANDARD.encode(bundle.encode())
    } else {
        config.signature_text.clone()
    };

    install(&host, &signature_text);

    let service = host
        .package_service()
        .expect("demo host always exposes its service slot");

    let forged = service.package_record(&config.package_name, GET_SIGNING_CERTIFICATES)?;
    info!(
        "identity query with signing flag: {} certificate(s), first {} bytes",
        forged.signing_certificates.as_ref().map_or(0, Vec::len),
        forged
            .signing_certificates
            .as_ref()
            .and_then(|c| c.first())
            .map_or(0, |c| c.as_bytes().len()),
    );

    let plain = service.package_record(&config.package_name, 0)?;
    info!(
        "identity query without signing flag: uid {}, certificates included: {}",
        plain.uid,
        plain.signing_certificates.is_some()
    );

    Ok(())
}
