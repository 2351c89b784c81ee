//! Abiq Core - Session, Models and Resolution Logic
//!
//! This crate provides the API session configuration, the wire models,
//! the remote catalog client, and the appliance resolver shared by the
//! Abiq command-line surface.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;

// Re-export commonly used types
pub use catalog::{HttpCatalog, RemoteCatalog};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use model::{VirtualAppliance, VirtualDataCenter};
pub use resolver::{ApplianceResolver, Diagnostic, DiagnosticKind, Resolution, Selection};

/// Abiq version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
