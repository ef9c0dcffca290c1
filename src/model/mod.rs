/// Credential headers
pub mod auth;
/// Per-call request values, the `Requester` trait and its reqwest implementation
pub mod http;
/// Request bodies and query builders
pub mod requests;
/// Typed responses
pub mod responses;
