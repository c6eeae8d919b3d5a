// src/utils/mod.rs
//! Common utilities
//!
//! - **errors**: Crate-wide error taxonomy and `Result` alias
//! - **config**: Layered configuration for the demo host

pub mod config;
pub mod errors;

pub use self::config::ShimConfig;
pub use self::errors::{Result, ShimError};
