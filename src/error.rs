//! Error type for the PAM client.
//!
//! Besides the usual `#[from]` conversions, [`AppError`] has a
//! [`Wrapped`](AppError::Wrapped) variant used by the wrapping constructors.
//! A wrapped error remembers whether it was already logged, so an error that
//! is wrapped again while it propagates up the call stack is neither nested
//! nor logged a second time.

use crate::model::http::RawResponse;
use crate::utils::logger::{CallSite, Logger};
use reqwest::StatusCode;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Main error type of the library
#[derive(Debug, Error)]
pub enum AppError {
    /// An error passed through one of the wrapping constructors
    #[error("{0}")]
    Wrapped(WrappedError),
    /// The server answered with a status code of 400 or above
    #[error("{}", .0.status_line())]
    Status(Box<RawResponse>),
    /// Transport-level failure reported by reqwest
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local I/O failure, e.g. reading a file to upload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Caller supplied an argument that cannot be sent
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error produced by the wrapping constructors of [`AppError`]
#[derive(Debug)]
pub struct WrappedError {
    message: String,
    source: Option<Box<AppError>>,
    for_user: bool,
    logged: bool,
}

impl WrappedError {
    /// The message shown by `Display`
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if this one was built from another error
    pub fn inner(&self) -> Option<&AppError> {
        self.source.as_deref()
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for WrappedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl AppError {
    /// Wraps an error without logging it.
    ///
    /// An error that is already wrapped is returned as is.
    pub fn wrap(err: impl Into<AppError>) -> Self {
        match err.into() {
            wrapped @ AppError::Wrapped(_) => wrapped,
            other => AppError::Wrapped(WrappedError {
                message: other.to_string(),
                source: Some(Box::new(other)),
                for_user: false,
                logged: false,
            }),
        }
    }

    /// Builds an error from a message without logging it
    pub fn msg(message: impl Into<String>) -> Self {
        AppError::Wrapped(WrappedError {
            message: message.into(),
            source: None,
            for_user: false,
            logged: false,
        })
    }

    /// Wraps an error and logs it at error level with the caller's location.
    ///
    /// An error that was already logged is returned untouched and is not
    /// logged again. A wrapped error that was not logged yet is logged once
    /// and returned as the same value.
    #[track_caller]
    pub fn logged(logger: &dyn Logger, err: impl Into<AppError>) -> Self {
        let site = CallSite::caller();
        match err.into() {
            AppError::Wrapped(mut wrapped) => {
                if !wrapped.logged {
                    logger.error_at(&wrapped.message, site);
                    wrapped.logged = true;
                }
                AppError::Wrapped(wrapped)
            }
            other => {
                let message = other.to_string();
                logger.error_at(&message, site);
                AppError::Wrapped(WrappedError {
                    message,
                    source: Some(Box::new(other)),
                    for_user: false,
                    logged: true,
                })
            }
        }
    }

    /// Builds an error from a message and logs it with the caller's location
    #[track_caller]
    pub fn logged_msg(logger: &dyn Logger, message: impl Into<String>) -> Self {
        let message = message.into();
        logger.error_at(&message, CallSite::caller());
        AppError::Wrapped(WrappedError {
            message,
            source: None,
            for_user: false,
            logged: true,
        })
    }

    /// Same as [`AppError::logged`], marking the error safe to show to an end user
    #[track_caller]
    pub fn for_user(logger: &dyn Logger, err: impl Into<AppError>) -> Self {
        Self::logged(logger, err).into_for_user()
    }

    /// Same as [`AppError::logged_msg`], marking the error safe to show to an end user
    #[track_caller]
    pub fn for_user_msg(logger: &dyn Logger, message: impl Into<String>) -> Self {
        Self::logged_msg(logger, message).into_for_user()
    }

    fn into_for_user(self) -> Self {
        match self {
            AppError::Wrapped(mut wrapped) => {
                wrapped.for_user = true;
                AppError::Wrapped(wrapped)
            }
            other => other,
        }
    }

    /// Whether the message may be surfaced verbatim to an end user
    pub fn is_for_user(&self) -> bool {
        matches!(self, AppError::Wrapped(w) if w.for_user)
    }

    /// Whether the error has already been written to a logger
    pub fn is_logged(&self) -> bool {
        matches!(self, AppError::Wrapped(w) if w.logged)
    }

    /// The response that produced this error, looking through wrapping
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            AppError::Status(response) => Some(&**response),
            AppError::Wrapped(w) => w.inner().and_then(AppError::response),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if any
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Body of the failed response, if any
    pub fn body(&self) -> Option<&str> {
        self.response().map(|r| r.body.as_str())
    }
}
