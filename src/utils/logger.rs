//! Structured logging.
//!
//! [`Logger`] is the capability the transport and the facade log through. The
//! production implementation, [`TracingLogger`], forwards to `tracing` either as
//! plain leveled text or annotated with a fixed set of request-scoped fields.

use crate::application::config::LoggerConfig;
use crate::utils::id::new_request_id;
use serde_json::Value;
use std::fmt;
use std::panic::Location;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Log level understood by [`Logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Diagnostic output, only emitted when debug logging is enabled
    Debug,
    /// Informational messages
    Info,
    /// Something unexpected that does not fail the call
    Warn,
    /// A failure
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Source location a log line is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file of the caller
    pub file: &'static str,
    /// Line in `file`
    pub line: u32,
}

impl CallSite {
    /// Creates a call site from explicit values
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let location: &'static Location<'static> = Location::caller();
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Logging capability used throughout the client
pub trait Logger: Send + Sync {
    /// Writes `message` at `level`, attributed to `site` when known
    fn log(&self, level: LogLevel, message: &str, site: Option<CallSite>);

    /// Writes a structured value: strings verbatim, objects and arrays pretty-printed
    fn print(&self, value: &Value);

    /// Debug level
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    /// Debug level with call site
    fn debug_at(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Debug, message, Some(site));
    }

    /// Info level
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    /// Info level with call site
    fn info_at(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Info, message, Some(site));
    }

    /// Warn level
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    /// Warn level with call site
    fn warn_at(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Warn, message, Some(site));
    }

    /// Error level
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    /// Error level with call site
    fn error_at(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Error, message, Some(site));
    }
}

/// Request-scoped fields attached to every line of a contextual logger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    /// Kind of request being served
    pub kind: String,
    /// Request identifier, generated by [`LogContext::new`]
    pub request_id: String,
    /// Tracking identifier of the end user
    pub tracking_id: String,
    /// Address the request came from
    pub source_ip: String,
    /// Application the request belongs to
    pub app_id: String,
    /// HTTP method of the request
    pub http_method: String,
    /// Endpoint of the request
    pub endpoint: String,
}

impl LogContext {
    /// Creates a context for a request, generating a request id
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            request_id: new_request_id(),
            ..Default::default()
        }
    }

    /// Sets the request id
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Sets the tracking id
    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = tracking_id.into();
        self
    }

    /// Sets the source IP
    pub fn with_source_ip(mut self, source_ip: impl Into<String>) -> Self {
        self.source_ip = source_ip.into();
        self
    }

    /// Sets the app id
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Sets the HTTP method and endpoint
    pub fn with_endpoint(
        mut self,
        http_method: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        self.http_method = http_method.into();
        self.endpoint = endpoint.into();
        self
    }
}

/// [`Logger`] backed by `tracing`
#[derive(Debug, Clone)]
pub struct TracingLogger {
    debug: bool,
    context: Option<LogContext>,
}

macro_rules! emit {
    ($level:expr, $context:expr, $site:expr, $message:expr) => {
        match ($context, $site) {
            (None, _) => tracing::event!($level, "{}", $message),
            (Some(ctx), None) => tracing::event!(
                $level,
                kind = %ctx.kind,
                request_id = %ctx.request_id,
                tracking_id = %ctx.tracking_id,
                source_ip = %ctx.source_ip,
                app_id = %ctx.app_id,
                http_method = %ctx.http_method,
                endpoint = %ctx.endpoint,
                "{}",
                $message
            ),
            (Some(ctx), Some(site)) => tracing::event!(
                $level,
                kind = %ctx.kind,
                request_id = %ctx.request_id,
                tracking_id = %ctx.tracking_id,
                source_ip = %ctx.source_ip,
                app_id = %ctx.app_id,
                http_method = %ctx.http_method,
                endpoint = %ctx.endpoint,
                function = site.file,
                line = site.line,
                "{}",
                $message
            ),
        }
    };
}

impl TracingLogger {
    /// Plain text logger without request context
    pub fn simple(config: &LoggerConfig) -> Self {
        Self {
            debug: config.debug,
            context: None,
        }
    }

    /// Logger annotating every line with `context`
    pub fn with_context(config: &LoggerConfig, context: LogContext) -> Self {
        Self {
            debug: config.debug,
            context: Some(context),
        }
    }

    /// Whether debug lines are emitted
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Request context, `None` for a simple logger
    pub fn context(&self) -> Option<&LogContext> {
        self.context.as_ref()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, site: Option<CallSite>) {
        let context = self.context.as_ref();
        match level {
            LogLevel::Debug if !self.debug => {}
            LogLevel::Debug => emit!(Level::DEBUG, context, site, message),
            LogLevel::Info => emit!(Level::INFO, context, site, message),
            LogLevel::Warn => emit!(Level::WARN, context, site, message),
            LogLevel::Error => emit!(Level::ERROR, context, site, message),
        }
    }

    fn print(&self, value: &Value) {
        tracing::info!("{}", render_value(value));
    }
}

/// Renders a value the way [`Logger::print`] writes it
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

/// Cuts a response body down for debug logs.
///
/// Bodies longer than [`LOG_BODY_LIMIT`](crate::constants::LOG_BODY_LIMIT)
/// characters keep their first `LOG_BODY_LIMIT - 1` characters followed by
/// the truncation marker.
pub fn truncate_log_body(body: &str) -> String {
    use crate::constants::{LOG_BODY_LIMIT, LOG_TRUNCATION_MARKER};

    match body.char_indices().nth(LOG_BODY_LIMIT) {
        None => body.to_string(),
        Some(_) => {
            let cut = body
                .char_indices()
                .nth(LOG_BODY_LIMIT - 1)
                .map_or(body.len(), |(idx, _)| idx);
            format!("{}{}", &body[..cut], LOG_TRUNCATION_MARKER)
        }
    }
}

struct ChronoLocalTime;

impl FormatTime for ChronoLocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the global `tracing` subscriber.
///
/// Debug lines pass when `config.debug` is set. The simple format has no
/// timestamps and no colours; the contextual format prints local timestamps.
/// Only the first call has an effect.
pub fn setup_logger(config: &LoggerConfig) {
    let max_level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr);

    // try_init fails when a subscriber is already installed
    let _ = if config.contextual {
        builder.with_timer(ChronoLocalTime).with_ansi(true).try_init()
    } else {
        builder.without_time().with_ansi(false).try_init()
    };
}
