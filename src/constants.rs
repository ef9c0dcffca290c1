/// Default header carrying the application identifier
pub const DEFAULT_APP_ID_HEADER: &str = "x-app-id";
/// Default header carrying the application secret
pub const DEFAULT_SECRET_HEADER: &str = "x-secret";
/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Default base URL of the connect (tracking and data) back-end
pub const DEFAULT_CONNECT_BASE_URL: &str = "https://connect.pushandmotion.com";
/// Default base URL of the cms (administration) back-end
pub const DEFAULT_CMS_BASE_URL: &str = "https://cms.pushandmotion.com";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("pam-client/", env!("CARGO_PKG_VERSION"));
/// Response bodies longer than this many characters are truncated in debug logs
pub const LOG_BODY_LIMIT: usize = 1000;
/// Marker appended to a truncated response body in debug logs
pub const LOG_TRUNCATION_MARKER: &str = "...[resp-truncated]";
/// Cookie carrying the contact identifier on event submission
pub const CONTACT_ID_COOKIE: &str = "contact_id";
/// Length of generated request identifiers
pub const REQUEST_ID_LENGTH: usize = 30;
