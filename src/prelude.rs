//! # PAM Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the PAM client library.
//!
//! ## Usage
//!
//! ```rust
//! use pam_client::prelude::*;
//!
//! let client = Client::new("https://connect.example.com", "app-id", "secret");
//! let tracker = Tracker::new("page_view").with_page("Home", "https://shop.example.com/");
//! # let _ = (client, tracker);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the PAM client
pub use crate::application::config::{Config, ConnectorConfig, LoggerConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, WrappedError};

// ============================================================================
// FACADE AND SERVICES
// ============================================================================

/// Client facade and its back-ends
pub use crate::application::client::{Backend, Client};

/// Service traits
pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::contact::ContactService;
pub use crate::application::interfaces::segment::SegmentService;
pub use crate::application::interfaces::tracker::TrackerService;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Per-call requests and the requester trait
pub use crate::model::http::{
    ApiRequest, FileUpload, HttpRequester, Params, RawResponse, RequestBody, Requester,
};

/// Credential headers
pub use crate::model::auth::Credentials;

// ============================================================================
// MODELS
// ============================================================================

/// Request bodies and query builders
pub use crate::model::requests::{
    CampaignPostBody, CampaignQuery, CampaignTrigger, CampaignUpdateBody, Contact, ContactQuery,
    ContactTagQuery, ContactsTags, MediaQuery, Segment, Tracker, UpdateMessagePushNotification,
    UpdateMessageSms,
};

/// Typed responses
pub use crate::model::responses::{Media, PushNotificationMessageResponse, SmsMessageResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::{
    CallSite, LogContext, LogLevel, Logger, TracingLogger, setup_logger,
};

/// Request id generation
pub use crate::utils::id::new_request_id;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom requester implementations
pub use reqwest::{Method, StatusCode};
