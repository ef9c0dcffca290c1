//! HTTP transport.
//!
//! Every call is described by a fresh [`ApiRequest`] value and executed by a
//! [`Requester`]. [`HttpRequester`] is the reqwest-backed implementation: it
//! injects the credential headers, applies the caller's headers and cookies,
//! enforces the per-call timeout and turns failures into [`AppError`]s.

use crate::application::config::ConnectorConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::utils::logger::{Logger, truncate_log_body};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{
    CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT as USER_AGENT_HEADER,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Query or form parameters, kept in key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` unconditionally
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets `key` unless `value` is empty
    pub fn insert_non_empty(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.0.insert(key.into(), value.to_string());
        }
        self
    }

    /// Sets `key` unless `value` is zero
    pub fn insert_positive(&mut self, key: impl Into<String>, value: u64) -> &mut Self {
        if value > 0 {
            self.0.insert(key.into(), value.to_string());
        }
        self
    }

    /// Sets `key` to the comma-joined `values` unless there are none
    pub fn insert_joined<S: AsRef<str>>(&mut self, key: impl Into<String>, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            self.0.insert(key.into(), joined);
        }
        self
    }

    /// Sets `key` when `value` is present
    pub fn insert_opt<T: ToString>(&mut self, key: impl Into<String>, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.0.insert(key.into(), value.to_string());
        }
        self
    }

    /// Value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether no parameter is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A file sent as `multipart/form-data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File to read from disk
    pub path: PathBuf,
    /// Form field carrying the file
    pub field: String,
    /// Additional text fields
    pub fields: Params,
}

/// Body of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` parameters
    Form(Params),
    /// JSON document
    Json(Value),
    /// Pre-encoded text with an explicit content type
    Raw {
        /// Value of the `Content-Type` header
        content_type: String,
        /// Encoded body
        data: String,
    },
    /// File upload
    Multipart(FileUpload),
}

/// Description of a single HTTP call.
///
/// A request is built for one call only and consumed when executed, so
/// nothing set on it can leak into another call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Params,
    headers: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
    body: RequestBody,
}

impl ApiRequest {
    /// Creates a request for `method` on `path` (relative to the base URL)
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replaces the query parameters
    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Adds a header; caller headers override the credential headers
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a cookie
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Sets the body
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets a form body
    pub fn form(self, params: Params) -> Self {
        self.body(RequestBody::Form(params))
    }

    /// Sets a JSON body
    pub fn json(self, value: Value) -> Self {
        self.body(RequestBody::Json(value))
    }

    /// Serializes `body` into a JSON body
    pub fn json_from<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, AppError> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters
    pub fn query_params(&self) -> &Params {
        &self.query
    }

    /// Caller headers, in insertion order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Cookies, in insertion order
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// Value of cookie `name`
    pub fn cookie_value(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Request body
    pub fn request_body(&self) -> &RequestBody {
        &self.body
    }

    /// JSON body, if any
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Response as received from the server
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Full body text
    pub body: String,
    /// Reason phrase sent by the server when it differs from the canonical one
    pub reason: Option<String>,
}

impl RawResponse {
    /// Status line such as `404 Not Found`, using the server's own reason
    /// phrase when it sent one
    pub fn status_line(&self) -> String {
        let code = self.status.as_u16();
        match self.reason.as_deref().or(self.status.canonical_reason()) {
            Some(reason) => format!("{code} {reason}"),
            None => code.to_string(),
        }
    }
}

/// Executes [`ApiRequest`]s against a remote back-end
#[async_trait]
pub trait Requester: Send + Sync {
    /// Sends `request` and returns the response.
    ///
    /// A status of 400 or above yields [`AppError::Status`], which still carries
    /// the response body.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, AppError>;

    /// GET with query parameters, returning the body text
    async fn get(&self, path: &str, query: Params) -> Result<String, AppError> {
        let response = self.execute(ApiRequest::get(path).query(query)).await?;
        Ok(response.body)
    }

    /// POST with form parameters, returning the body text
    async fn post_form(&self, path: &str, params: Params) -> Result<String, AppError> {
        let request = ApiRequest::post(path);
        let request = if params.is_empty() {
            request
        } else {
            request.form(params)
        };
        Ok(self.execute(request).await?.body)
    }

    /// POST with a JSON body, returning the body text
    async fn post_json(&self, path: &str, body: Value) -> Result<String, AppError> {
        Ok(self.execute(ApiRequest::post(path).json(body)).await?.body)
    }

    /// POST with pre-encoded data, returning the body text
    async fn post_raw(&self, path: &str, content_type: &str, data: String) -> Result<String, AppError> {
        let request = ApiRequest::post(path).body(RequestBody::Raw {
            content_type: content_type.to_string(),
            data,
        });
        Ok(self.execute(request).await?.body)
    }

    /// POST a file as multipart form data, returning the body text
    async fn post_file(
        &self,
        path: &str,
        file_path: &Path,
        field: &str,
        fields: Params,
    ) -> Result<String, AppError> {
        let upload = FileUpload {
            path: file_path.to_path_buf(),
            field: field.to_string(),
            fields,
        };
        let request = ApiRequest::post(path).body(RequestBody::Multipart(upload));
        Ok(self.execute(request).await?.body)
    }

    /// PUT with a JSON body, returning the body text
    async fn put_json(&self, path: &str, body: Value) -> Result<String, AppError> {
        Ok(self.execute(ApiRequest::put(path).json(body)).await?.body)
    }

    /// DELETE with query parameters, returning the body text
    async fn delete(&self, path: &str, query: Params) -> Result<String, AppError> {
        Ok(self.execute(ApiRequest::delete(path).query(query)).await?.body)
    }

    /// DELETE with a JSON body, returning the body text
    async fn delete_json(&self, path: &str, body: Value) -> Result<String, AppError> {
        Ok(self.execute(ApiRequest::delete(path).json(body)).await?.body)
    }
}

/// [`Requester`] backed by `reqwest`
pub struct HttpRequester {
    config: ConnectorConfig,
    credentials: Credentials,
    http_client: Client,
    logger: Arc<dyn Logger>,
}

impl HttpRequester {
    /// Creates a requester with its own connection pool
    pub fn new(config: ConnectorConfig, logger: Arc<dyn Logger>) -> Self {
        Self::with_client(config, logger, Client::new())
    }

    /// Creates a requester on an existing `reqwest` client
    pub fn with_client(config: ConnectorConfig, logger: Arc<dyn Logger>, http_client: Client) -> Self {
        let credentials = Credentials::from_config(&config);
        Self {
            config,
            credentials,
            http_client,
            logger,
        }
    }

    /// Connection settings
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Full URL for `path`
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// User agent and credential headers first, then caller headers, then cookies
    fn build_headers(
        &self,
        headers: &[(String, String)],
        cookies: &[(String, String)],
    ) -> Result<HeaderMap, AppError> {
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        self.credentials.apply(&mut map)?;

        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("header name {name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("header value for {name}: {e}")))?;
            map.insert(header_name, header_value);
        }

        if !cookies.is_empty() {
            let mut pairs = Vec::with_capacity(cookies.len());
            for (name, value) in cookies {
                if !is_cookie_name(name) {
                    return Err(AppError::InvalidInput(format!("cookie name {name:?}")));
                }
                let cleaned = sanitize_cookie_value(value);
                if cleaned.trim_matches('"') != value.as_str() {
                    self.logger.warn(&format!("invalid bytes dropped from cookie {name}"));
                }
                pairs.push(format!("{name}={cleaned}"));
            }
            let cookie = pairs.join("; ");
            let value = HeaderValue::from_str(&cookie)
                .map_err(|e| AppError::InvalidInput(format!("cookie: {e}")))?;
            map.append(COOKIE, value);
        }

        Ok(map)
    }

    async fn multipart_form(&self, upload: FileUpload) -> Result<Form, AppError> {
        let bytes = tokio::fs::read(&upload.path)
            .await
            .map_err(|e| AppError::logged(self.logger.as_ref(), e))?;
        let file_name = upload
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut form = Form::new();
        for (key, value) in upload.fields.iter() {
            form = form.text(key.to_string(), value.to_string());
        }
        Ok(form.part(upload.field, Part::bytes(bytes).file_name(file_name)))
    }
}

/// Cookie names must be non-empty HTTP tokens
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b))
}

/// Drops the bytes a cookie value cannot carry (controls, non-ASCII, `"`, `;`
/// and `\`). Values containing a space or a comma are quoted.
pub fn sanitize_cookie_value(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|&c| matches!(c, ' '..='~') && !matches!(c, '"' | ';' | '\\'))
        .collect();
    if cleaned.contains([' ', ',']) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        let ApiRequest {
            method,
            path,
            query,
            headers,
            cookies,
            body,
        } = request;

        let url = self.url_for(&path);
        let verb = method.as_str().to_string();
        self.logger.debug(&format!("[RQT {verb}]: {url}"));

        let header_map = self.build_headers(&headers, &cookies)?;

        // timeout counts from the start of this call
        let mut builder = self
            .http_client
            .request(method, &url)
            .timeout(self.config.request_timeout())
            .headers(header_map);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Form(params) => builder.form(&params),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Raw { content_type, data } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
            RequestBody::Multipart(upload) => builder.multipart(self.multipart_form(upload).await?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::logged(self.logger.as_ref(), e))?;

        let status = response.status();
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
            .filter(|phrase| !phrase.is_empty());
        let response_headers = response.headers().clone();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::logged(self.logger.as_ref(), e))?;

        self.logger.debug(&format!(
            "[RQT {verb}-RESP]: {url} {}",
            truncate_log_body(&text)
        ));

        let raw = RawResponse {
            status,
            headers: response_headers,
            body: text,
            reason,
        };

        if status.as_u16() >= 400 {
            return Err(AppError::Status(Box::new(raw)));
        }
        Ok(raw)
    }
}
