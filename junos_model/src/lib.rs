//! Juniper device model and semantic extraction
//!
//! Consumes parse trees produced by `junos_parser` and builds a typed,
//! serializable model of the device configuration: interfaces, BGP,
//! firewall filters, routing policy, security zones and policies, static
//! routing, system settings and applications.

pub mod api;
pub mod extraction;
pub mod model;
pub mod types;

// Re-export key types for library consumers
pub use api::{extract_file, extract_text, ExtractionError, ExtractionResult};
pub use extraction::{ConfigBuilder, Warnings};
pub use model::JunosConfiguration;
