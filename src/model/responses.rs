use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Delivery channel (SMS sender, push app, ...) configured on the platform
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    /// Server id
    pub id: String,
    /// Display name
    pub name: String,
    /// Unique alias
    pub alias: String,
    /// Channel type, e.g. `sms` or `mobile_notification`
    #[serde(rename = "type")]
    pub media_type: String,
    /// Whether it is enabled
    pub is_enabled: bool,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Campaign SMS message as stored after an update
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsMessageResponse {
    /// Server id
    pub id: String,
    /// Campaign the message belongs to
    pub campaign_id: String,
    /// Message text
    pub message: String,
    /// Whether it is enabled
    pub is_enabled: bool,
    /// Channel the message is sent through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Creation time as sent by the server
    pub created_at: String,
    /// Last update time as sent by the server
    pub updated_at: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Campaign push notification as stored after an update
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushNotificationMessageResponse {
    /// Server id
    pub id: String,
    /// Campaign the message belongs to
    pub campaign_id: String,
    /// Notification title
    pub title: String,
    /// Message text
    pub message: String,
    /// Image shown with the notification
    pub image_url: String,
    /// Deep link opened on tap
    pub url: String,
    /// Whether it is enabled
    pub is_enabled: bool,
    /// Channel the notification is sent through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Creation time as sent by the server
    pub created_at: String,
    /// Last update time as sent by the server
    pub updated_at: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
