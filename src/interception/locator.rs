// src/interception/locator.rs
//! Service locator
//!
//! The host process caches its reference to the package service in two
//! independent places: a process-global slot on the thread-context
//! object ([`ProcessState`]) and a per-context convenience slot on the
//! application's own [`HostContext`]. Interception only works if *both*
//! are patched; a call routed through an un-patched slot would bypass
//! the proxy entirely. [`locate`] finds the current real instance and
//! returns every slot that must be rewritten.

use crate::service::PackageService;
use crate::utils::errors::{Result, ShimError};
use parking_lot::RwLock;
use std::sync::Arc;

/// A writable, shared holder for a service reference.
///
/// Cloning a slot clones the holder, not the reference: all clones see a
/// `replace` immediately.
#[derive(Clone)]
pub struct ServiceSlot {
    inner: Arc<RwLock<Arc<dyn PackageService>>>,
}

impl ServiceSlot {
    pub fn new(service: Arc<dyn PackageService>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    /// Current service reference held by the slot.
    pub fn get(&self) -> Arc<dyn PackageService> {
        Arc::clone(&self.inner.read())
    }

    /// Overwrite the held reference.
    pub fn replace(&self, service: Arc<dyn PackageService>) {
        *self.inner.write() = service;
    }
}

/// Process-global state: the thread-context analogue that caches the
/// canonical service reference for the whole process.
pub struct ProcessState {
    package_service: Option<ServiceSlot>,
}

impl ProcessState {
    pub fn new(service: Arc<dyn PackageService>) -> Self {
        Self {
            package_service: Some(ServiceSlot::new(service)),
        }
    }

    /// A process state that does not expose its cached service slot, as
    /// happens under host version skew.
    pub fn sealed() -> Self {
        Self {
            package_service: None,
        }
    }

    pub fn package_service_slot(&self) -> Option<&ServiceSlot> {
        self.package_service.as_ref()
    }
}

/// The application-side context: its own package identity plus a cached
/// convenience reference to the same service the process state holds.
pub struct HostContext {
    package_name: String,
    process: Option<Arc<ProcessState>>,
    package_service: Option<ServiceSlot>,
}

impl HostContext {
    /// Build a fully wired host: both cached references point at
    /// `service`.
    pub fn new(package_name: impl Into<String>, service: Arc<dyn PackageService>) -> Self {
        let process = Arc::new(ProcessState::new(Arc::clone(&service)));
        Self {
            package_name: package_name.into(),
            package_service: process.package_service_slot().cloned(),
            process: Some(process),
        }
    }

    /// Build a host wired to an existing process state.
    pub fn with_process(package_name: impl Into<String>, process: Arc<ProcessState>) -> Self {
        Self {
            package_name: package_name.into(),
            package_service: process.package_service_slot().cloned(),
            process: Some(process),
        }
    }

    /// A host that exposes neither cached reference (version skew).
    pub fn detached(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            process: None,
            package_service: None,
        }
    }

    /// The hosting application's own package identity.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Resolve the service the way application code does: through the
    /// per-context cached slot.
    pub fn package_service(&self) -> Option<Arc<dyn PackageService>> {
        self.package_service.as_ref().map(ServiceSlot::get)
    }
}

/// Find the current real service instance and every cached reference
/// slot that must be patched for interception to be complete.
///
/// The real instance is read from the process-global slot. Fails with
/// [`ShimError::LocatorUnavailable`] if either slot is not exposed.
pub fn locate(host: &HostContext) -> Result<(Arc<dyn PackageService>, Vec<ServiceSlot>)> {
    let process = host.process.as_ref().ok_or_else(|| {
        ShimError::LocatorUnavailable("host exposes no process state".to_string())
    })?;

    let global_slot = process.package_service_slot().cloned().ok_or_else(|| {
        ShimError::LocatorUnavailable(
            "process state exposes no package service slot".to_string(),
        )
    })?;

    let context_slot = host.package_service.clone().ok_or_else(|| {
        ShimError::LocatorUnavailable(
            "host context exposes no package service slot".to_string(),
        )
    })?;

    let real = global_slot.get();
    Ok((real, vec![global_slot, context_slot]))
}
