// Test doubles for the Logger and Requester traits

use async_trait::async_trait;
use pam_client::application::client::{Backend, Client};
use pam_client::error::AppError;
use pam_client::model::http::{ApiRequest, RawResponse, Requester};
use pam_client::utils::logger::{CallSite, LogLevel, Logger, render_value};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub site: Option<CallSite>,
}

/// Logger keeping every line in memory
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == LogLevel::Error)
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str, site: Option<CallSite>) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
            site,
        });
    }

    fn print(&self, value: &Value) {
        self.log(LogLevel::Info, &render_value(value), None);
    }
}

/// Requester recording every request and answering with a canned response
pub struct RecordingRequester {
    requests: Mutex<Vec<ApiRequest>>,
    status: StatusCode,
    body: String,
}

impl RecordingRequester {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    pub fn ok() -> Self {
        Self::replying(200, "{}")
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests()
            .pop()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Requester for RecordingRequester {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        let response = RawResponse {
            status: self.status,
            headers: HeaderMap::new(),
            body: self.body.clone(),
            reason: None,
        };
        if self.status.as_u16() >= 400 {
            return Err(AppError::Status(Box::new(response)));
        }
        Ok(response)
    }
}

/// A client on fake back-ends, returned with its fakes
pub struct FakeClient {
    pub client: Client,
    pub connect: Arc<RecordingRequester>,
    pub cms: Arc<RecordingRequester>,
    pub logger: Arc<RecordingLogger>,
}

pub fn fake_client(connect: RecordingRequester, cms: RecordingRequester) -> FakeClient {
    let connect = Arc::new(connect);
    let cms = Arc::new(cms);
    let logger = Arc::new(RecordingLogger::default());
    let client = Client::from_backends(
        Backend::new(connect.clone(), logger.clone()),
        Backend::new(cms.clone(), logger.clone()),
    );
    FakeClient {
        client,
        connect,
        cms,
        logger,
    }
}

pub fn default_fake_client() -> FakeClient {
    fake_client(RecordingRequester::ok(), RecordingRequester::ok())
}
