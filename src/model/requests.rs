use crate::model::http::Params;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Form field carrying the campaign an event belongs to
pub const CAMPAIGN_FORM_FIELD: &str = "_campaign";
/// Form field carrying the transaction an event belongs to
pub const TRANSACTION_FORM_FIELD: &str = "_transaction_id";

/// Event payload describing a user action
///
/// Every field is always serialized, empty or not.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// Event name, e.g. `page_view`
    pub event: String,
    /// Title of the page the event happened on
    pub page_title: String,
    /// URL of the page the event happened on
    pub page_url: String,
    /// Comma separated tags
    pub tags: String,
    /// Browser user agent
    #[serde(rename = "useragent")]
    pub user_agent: String,
    /// Raw query string of the page
    #[serde(rename = "querystring")]
    pub query_string: String,
    /// UTM campaign name
    pub utm_campaign: String,
    /// UTM search term
    pub utm_term: String,
    /// UTM content variant
    pub utm_content: String,
    /// UTM medium, e.g. `email`
    pub utm_medium: String,
    /// UTM source, e.g. `newsletter`
    pub utm_source: String,
    /// Client IP address
    pub ip_address: String,
    /// Free-form fields attached to the event
    pub form_fields: Map<String, Value>,
}

impl Tracker {
    /// Creates a tracker for `event`
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            ..Default::default()
        }
    }

    /// Set the page title and URL
    pub fn with_page(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.page_title = title.into();
        self.page_url = url.into();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the query string
    pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = query_string.into();
        self
    }

    /// Set the IP address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    /// Set the UTM campaign, term, content, medium and source, in that order
    pub fn with_utm(mut self, utm: [&str; 5]) -> Self {
        let [campaign, term, content, medium, source] = utm;
        self.utm_campaign = campaign.to_string();
        self.utm_term = term.to_string();
        self.utm_content = content.to_string();
        self.utm_medium = medium.to_string();
        self.utm_source = source.to_string();
        self
    }

    /// Add a form field
    pub fn with_form_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_form_field(key, value);
        self
    }

    /// Set a form field in place
    pub fn set_form_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.form_fields.insert(key.into(), value.into());
    }
}

/// Audience-membership rule set, called a trigger by the API
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Display name
    pub name: String,
    /// Unique alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Free text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Membership conditions, passed through as JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    /// Creates a segment called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the membership conditions
    pub fn with_conditions(mut self, conditions: Value) -> Self {
        self.conditions = Some(conditions);
        self
    }
}

/// Body for creating a campaign
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPostBody {
    /// Display name
    pub name: String,
    /// Unique alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Free text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Campaign type, e.g. `standard`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    /// First active day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last active day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CampaignPostBody {
    /// Creates a body for a campaign called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the campaign type
    pub fn with_type(mut self, campaign_type: impl Into<String>) -> Self {
        self.campaign_type = Some(campaign_type.into());
        self
    }

    /// Set the active date range
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }
}

/// Body for updating a campaign; only the fields set are sent
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdateBody {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New first active day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// New last active day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CampaignUpdateBody {
    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the status, e.g. `active`
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Segments a campaign is sent to
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignTrigger {
    /// Segment ids
    #[serde(rename = "triggers")]
    pub trigger_ids: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CampaignTrigger {
    /// Targets the segments `trigger_ids`
    pub fn new<S: Into<String>>(trigger_ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            trigger_ids: trigger_ids.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

/// Contact attributes, sent as a flat JSON object
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Attribute name to value
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Contact {
    /// Contact with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set attribute `key`
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Tags to add to or remove from a set of contacts
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactsTags {
    /// Contact ids
    pub contacts: Vec<String>,
    /// Tag names
    pub tags: Vec<String>,
}

impl ContactsTags {
    /// Applies `tags` to `contacts`
    pub fn new<C, T>(contacts: impl IntoIterator<Item = C>, tags: impl IntoIterator<Item = T>) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        Self {
            contacts: contacts.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// SMS message of a campaign
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessageSms {
    /// Message text
    pub message: String,
    /// Media (sender) id the message goes out through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    /// Whether the message is sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdateMessageSms {
    /// SMS with text `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set the media id
    pub fn with_media_id(mut self, media_id: impl Into<String>) -> Self {
        self.media_id = Some(media_id.into());
        self
    }

    /// Enable or disable the message
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = Some(enabled);
        self
    }
}

/// Mobile push notification of a campaign
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessagePushNotification {
    /// Notification title
    pub title: String,
    /// Notification text
    pub message: String,
    /// Image shown with the notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Deep link opened on tap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Media (app) id the notification goes out through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    /// Whether the notification is sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdateMessagePushNotification {
    /// Notification with `title` and `message`
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set the image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the deep link
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the media id
    pub fn with_media_id(mut self, media_id: impl Into<String>) -> Self {
        self.media_id = Some(media_id.into());
        self
    }
}

/// Filters for listing campaigns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    /// Search keyword
    pub q: String,
    /// Comma separated aliases
    pub aliases: String,
    /// Campaign ids
    pub ids: Vec<String>,
    /// Page number, 0 for the server default
    pub page: u64,
    /// Page size, 0 for the server default
    pub limit: u64,
}

impl CampaignQuery {
    /// Query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search keyword
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    /// Set the aliases
    pub fn with_aliases(mut self, aliases: impl Into<String>) -> Self {
        self.aliases = aliases.into();
        self
    }

    /// Set the campaign ids
    pub fn with_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Query parameters, unset filters omitted
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_non_empty("q", &self.q)
            .insert_non_empty("aliases", &self.aliases)
            .insert_joined("ids", &self.ids)
            .insert_positive("page", self.page)
            .insert_positive("limit", self.limit);
        params
    }
}

/// Filters for listing contacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Search keyword
    pub q: String,
    /// Attribute the keyword is matched against
    pub field: String,
    /// Page number, 0 for the server default
    pub page: u64,
    /// Page size, 0 for the server default
    pub limit: u64,
}

impl ContactQuery {
    /// Query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `field` for `q`
    pub fn with_search(mut self, q: impl Into<String>, field: impl Into<String>) -> Self {
        self.q = q.into();
        self.field = field.into();
        self
    }

    /// Set the page and page size
    pub fn with_paging(mut self, page: u64, limit: u64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Query parameters, unset filters omitted
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_non_empty("q", &self.q)
            .insert_non_empty("field", &self.field)
            .insert_positive("page", self.page)
            .insert_positive("limit", self.limit);
        params
    }
}

/// Filters for listing contacts by tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactTagQuery {
    /// Comma separated tags
    pub tags: String,
    /// Search keyword
    pub q: String,
    /// Page number, 0 for the server default
    pub page: u64,
    /// Page size, 0 for the server default
    pub limit: u64,
}

impl ContactTagQuery {
    /// Contacts carrying `tags`
    pub fn new(tags: impl Into<String>) -> Self {
        Self {
            tags: tags.into(),
            ..Default::default()
        }
    }

    /// Set the search keyword
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    /// Set the page and page size
    pub fn with_paging(mut self, page: u64, limit: u64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Query parameters, unset filters omitted
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_non_empty("tags", &self.tags)
            .insert_non_empty("q", &self.q)
            .insert_positive("page", self.page)
            .insert_positive("limit", self.limit);
        params
    }
}

/// Filters for listing media
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQuery {
    /// Include every media, not only the app's own
    pub is_all: Option<bool>,
    /// Leave disabled media out
    pub exclude_disabled: Option<bool>,
    /// Media type, e.g. `sms`
    pub media_type: String,
}

impl MediaQuery {
    /// Query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `is_all`
    pub fn with_all(mut self, is_all: bool) -> Self {
        self.is_all = Some(is_all);
        self
    }

    /// Set `exclude_disabled`
    pub fn with_exclude_disabled(mut self, exclude_disabled: bool) -> Self {
        self.exclude_disabled = Some(exclude_disabled);
        self
    }

    /// Set the media type
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Query parameters, unset filters omitted
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert_opt("is_all", self.is_all)
            .insert_opt("exclude_disabled", self.exclude_disabled)
            .insert_non_empty("type", &self.media_type);
        params
    }
}
