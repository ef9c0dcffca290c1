//! # PAM Client
//!
//! A Rust client for the PAM marketing-automation platform.
//!
//! The crate is organised in small layers:
//!
//! - [`application`]: the [`Client`](application::client::Client) facade, its service
//!   traits and the configuration types
//! - [`model`]: the HTTP transport ([`Requester`](model::http::Requester)), credential
//!   injection and the request/response DTOs
//! - [`error`]: the [`AppError`](error::AppError) type and its wrapping rules
//! - [`utils`]: structured logging, environment helpers and id generation
//!
//! ## Example
//!
//! ```ignore
//! use pam_client::prelude::*;
//!
//! let client = Client::new("https://connect.example.com", "app-id", "secret")?;
//! let tracker = Tracker::new("purchase").with_form_field("sku", "A-1");
//! let body = client.send_event("contact_123", "campaign_123", tracker).await?;
//! ```

/// Facade, service traits and configuration
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error type and wrapping helpers
pub mod error;
/// Transport, credentials and data-transfer objects
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Logging, environment and id utilities
pub mod utils;

/// Crate version as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
