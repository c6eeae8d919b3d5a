// src/interception/mod.rs
//! Identity-query interception layer
//!
//! Sits between the application and the privileged package service and
//! substitutes a forged result for one narrowly-matched call:
//!
//! - **Locator**: finds the real service and every cached reference slot
//!   the host process holds
//! - **Proxy**: forwards every call to the real service; rewrites the
//!   certificate list of the matched identity query only
//! - **Installer**: one-shot bootstrap step that decodes the replacement
//!   bundle and swaps the proxy into every located slot
//!
//! # Architecture
//!
//! ```text
//! Application Code (Unmodified)
//!     │
//!     └─ identity query ─→ ServiceSlot ─→ SigningProxy ─→ Real Service
//!                                             │
//!                          matched shape: rewrite certificate list
//! ```

pub mod installer;
pub mod locator;
pub mod proxy;

// Re-export commonly used types
pub use installer::install;
pub use locator::{locate, HostContext, ProcessState, ServiceSlot};
pub use proxy::{ProxyConfig, SigningProxy};
