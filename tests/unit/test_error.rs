use crate::support::RecordingLogger;
use pam_client::error::AppError;
use pam_client::model::http::RawResponse;
use pam_client::utils::logger::LogLevel;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

fn status_error(status: StatusCode, body: &str) -> AppError {
    AppError::Status(Box::new(RawResponse {
        status,
        headers: HeaderMap::new(),
        body: body.to_string(),
        reason: None,
    }))
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("campaign id must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: campaign id must not be empty"
    );
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("bad header".to_string());
    assert_eq!(error.to_string(), "configuration error: bad header");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_status_error_shows_status_line_and_keeps_body() {
    let error = status_error(StatusCode::NOT_FOUND, r#"{"message":"no such campaign"}"#);
    assert_eq!(error.to_string(), "404 Not Found");
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.body(), Some(r#"{"message":"no such campaign"}"#));
}

#[test]
fn test_status_line_prefers_server_reason() {
    let response = RawResponse {
        status: StatusCode::from_u16(599).unwrap(),
        headers: HeaderMap::new(),
        body: String::new(),
        reason: Some("Network Connect Timeout".to_string()),
    };
    assert_eq!(response.status_line(), "599 Network Connect Timeout");

    let bare = RawResponse {
        reason: None,
        ..response
    };
    assert_eq!(bare.status_line(), "599");
}

#[test]
fn test_msg_is_neither_logged_nor_for_user() {
    let error = AppError::msg("something failed");
    assert_eq!(error.to_string(), "something failed");
    assert!(!error.is_logged());
    assert!(!error.is_for_user());
    assert!(error.response().is_none());
}

#[test]
fn test_wrap_keeps_message_and_does_not_nest() {
    let first = AppError::wrap(status_error(StatusCode::BAD_GATEWAY, "upstream"));
    assert_eq!(first.to_string(), "502 Bad Gateway");

    let again = AppError::wrap(first);
    match &again {
        AppError::Wrapped(wrapped) => {
            assert!(matches!(wrapped.inner(), Some(AppError::Status(_))));
        }
        other => panic!("Expected Wrapped error, got {other:?}"),
    }
    assert_eq!(again.body(), Some("upstream"));
}

#[test]
fn test_logged_logs_once_with_call_site() {
    let logger = RecordingLogger::default();

    let error = AppError::logged(&logger, std::io::Error::other("disk gone"));
    assert!(error.is_logged());

    let errors = logger.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "io error: disk gone");
    let site = errors[0].site.expect("call site recorded");
    assert!(site.file.ends_with("test_error.rs"));
    assert!(site.line > 0);
}

#[test]
fn test_logging_twice_logs_once() {
    let logger = RecordingLogger::default();

    let first = AppError::logged(&logger, AppError::msg("timeout"));
    let second = AppError::logged(&logger, first);

    assert_eq!(logger.errors().len(), 1);
    assert_eq!(second.to_string(), "timeout");
    assert!(second.is_logged());
}

#[test]
fn test_wrapped_but_unlogged_error_is_logged_once() {
    let logger = RecordingLogger::default();
    let unlogged = AppError::wrap(status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
    assert!(!unlogged.is_logged());

    let logged = AppError::logged(&logger, unlogged);
    assert!(logged.is_logged());
    assert_eq!(logger.errors().len(), 1);
    assert_eq!(logger.errors()[0].message, "500 Internal Server Error");
    assert_eq!(logged.body(), Some("boom"));
}

#[test]
fn test_logged_msg() {
    let logger = RecordingLogger::default();
    let error = AppError::logged_msg(&logger, "contact id missing");
    assert!(error.is_logged());
    assert!(!error.is_for_user());
    assert_eq!(logger.messages(), vec!["contact id missing".to_string()]);
}

#[test]
fn test_for_user_variants_are_flagged() {
    let logger = RecordingLogger::default();

    let from_error = AppError::for_user(&logger, AppError::InvalidInput("bad tag".to_string()));
    assert!(from_error.is_for_user());
    assert!(from_error.is_logged());

    let from_message = AppError::for_user_msg(&logger, "Please try again later");
    assert!(from_message.is_for_user());
    assert_eq!(from_message.to_string(), "Please try again later");

    assert_eq!(logger.errors().len(), 2);
    assert!(
        logger
            .entries()
            .iter()
            .all(|entry| entry.level == LogLevel::Error)
    );
}
