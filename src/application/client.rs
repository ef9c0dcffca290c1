use crate::application::config::{Config, ConnectorConfig};
use crate::application::interfaces::campaign::CampaignService;
use crate::application::interfaces::contact::ContactService;
use crate::application::interfaces::segment::SegmentService;
use crate::application::interfaces::tracker::TrackerService;
use crate::constants::CONTACT_ID_COOKIE;
use crate::error::AppError;
use crate::model::http::{ApiRequest, HttpRequester, Params, Requester};
use crate::model::requests::{
    CAMPAIGN_FORM_FIELD, CampaignPostBody, CampaignQuery, CampaignTrigger, CampaignUpdateBody,
    Contact, ContactQuery, ContactTagQuery, ContactsTags, MediaQuery, Segment,
    TRANSACTION_FORM_FIELD, Tracker, UpdateMessagePushNotification, UpdateMessageSms,
};
use crate::model::responses::{PushNotificationMessageResponse, SmsMessageResponse};
use crate::utils::logger::{Logger, TracingLogger};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

/// A requester and the logger used with it
#[derive(Clone)]
pub struct Backend {
    /// Transport to the back-end
    pub requester: Arc<dyn Requester>,
    /// Logger for errors raised while talking to the back-end
    pub logger: Arc<dyn Logger>,
}

impl Backend {
    /// Backend from an existing requester and logger
    pub fn new(requester: Arc<dyn Requester>, logger: Arc<dyn Logger>) -> Self {
        Self { requester, logger }
    }

    /// Backend reached over HTTP with `config`
    pub fn http(config: ConnectorConfig, logger: Arc<dyn Logger>) -> Self {
        let requester: Arc<dyn Requester> = Arc::new(HttpRequester::new(config, logger.clone()));
        Self { requester, logger }
    }
}

/// Client facade for the PAM platform
///
/// Tracking, statistics, reports and contacts go to the *connect* back-end;
/// segments, campaigns, media and messages go to the *cms* back-end.
pub struct Client {
    connect: Backend,
    cms: Backend,
}

impl Client {
    /// Both back-ends on `base_url` with the same credentials
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self::with_config(Config::single(base_url, app_id, app_secret))
    }

    /// Client built from a full configuration
    pub fn with_config(config: Config) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::simple(&config.logger));
        Self {
            connect: Backend::http(config.connect, logger.clone()),
            cms: Backend::http(config.cms, logger),
        }
    }

    /// Client on already built back-ends
    pub fn from_backends(connect: Backend, cms: Backend) -> Self {
        Self { connect, cms }
    }

    /// The tracking and data back-end
    pub fn connect(&self) -> &Backend {
        &self.connect
    }

    /// The administration back-end
    pub fn cms(&self) -> &Backend {
        &self.cms
    }

    async fn send_tracker(
        &self,
        contact_id: &str,
        campaign_id: &str,
        transaction_id: &str,
        mut tracker: Tracker,
    ) -> Result<String, AppError> {
        let backend = &self.connect;
        if !campaign_id.is_empty() {
            tracker.set_form_field(CAMPAIGN_FORM_FIELD, campaign_id);
        }
        if !transaction_id.is_empty() {
            tracker.set_form_field(TRANSACTION_FORM_FIELD, transaction_id);
        }

        backend
            .logger
            .debug(&format!("sending event {} for contact {contact_id}", tracker.event));

        let request = ApiRequest::post("/trackers/events")
            .json_from(&tracker)
            .map_err(|e| AppError::logged(backend.logger.as_ref(), e))?
            .cookie(CONTACT_ID_COOKIE, contact_id);

        match backend.requester.execute(request).await {
            Ok(response) => Ok(response.body),
            Err(e) => Err(AppError::logged(backend.logger.as_ref(), e)),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::with_config(Config::new())
    }
}

/// Percent-encoded path segment for `value`; blank values are rejected.
fn path_segment<'a>(name: &str, value: &'a str) -> Result<Cow<'a, str>, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(urlencoding::encode(value))
}

fn to_json<T: Serialize + ?Sized>(body: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(body)?)
}

async fn put_typed<T: DeserializeOwned>(
    backend: &Backend,
    path: &str,
    body: Value,
) -> Result<(T, String), AppError> {
    let raw = backend.requester.put_json(path, body).await?;
    let response = serde_json::from_str(&raw)?;
    Ok((response, raw))
}

#[async_trait]
impl TrackerService for Client {
    async fn send_event(
        &self,
        contact_id: &str,
        campaign_id: &str,
        tracker: Tracker,
    ) -> Result<String, AppError> {
        self.send_tracker(contact_id, campaign_id, "", tracker).await
    }

    async fn send_event_transaction(
        &self,
        contact_id: &str,
        campaign_id: &str,
        transaction_id: &str,
        tracker: Tracker,
    ) -> Result<String, AppError> {
        self.send_tracker(contact_id, campaign_id, transaction_id, tracker)
            .await
    }

    async fn product_trends(&self, limit: u64) -> Result<String, AppError> {
        let mut params = Params::new();
        params.insert_positive("limit", limit);
        self.connect
            .requester
            .get("/api/products/trends", params)
            .await
    }

    async fn product_recommends(
        &self,
        ai_id: &str,
        contact_id: &str,
        product_id: u64,
    ) -> Result<String, AppError> {
        let ai_id = path_segment("ai id", ai_id)?;
        let mut params = Params::new();
        params
            .insert_non_empty("contact_id", contact_id)
            .insert_positive("productId", product_id);
        let path = format!("/api/ai/{ai_id}");
        self.connect.requester.get(&path, params).await
    }

    async fn app_notifications(
        &self,
        contact_id: &str,
        media_alias: &str,
        media_value: &str,
    ) -> Result<String, AppError> {
        let mut params = Params::new();
        params
            .insert_non_empty("contact_id", contact_id)
            .insert_non_empty("media_alias", media_alias)
            .insert_non_empty("media_value", media_value);
        self.connect
            .requester
            .get("/api/app-notifications", params)
            .await
    }
}

#[async_trait]
impl SegmentService for Client {
    async fn get_segments_count(&self) -> Result<String, AppError> {
        self.cms.requester.get("/triggers/count", Params::new()).await
    }

    async fn get_segments(&self, q: &str, page: u64, limit: u64) -> Result<String, AppError> {
        let mut params = Params::new();
        params
            .insert_non_empty("q", q)
            .insert_positive("page", page)
            .insert_positive("limit", limit);
        self.cms.requester.get("/triggers", params).await
    }

    async fn get_segments_stats(&self, segment_ids: &[String]) -> Result<String, AppError> {
        let mut params = Params::new();
        params.insert_joined("id", segment_ids);
        self.connect
            .requester
            .get("/api/triggers/stat", params)
            .await
    }

    async fn get_segment_by_id(&self, segment_id: &str) -> Result<String, AppError> {
        let segment_id = path_segment("segment id", segment_id)?;
        let path = format!("/triggers/{segment_id}");
        self.cms.requester.get(&path, Params::new()).await
    }

    async fn create_segment(&self, body: &Segment) -> Result<String, AppError> {
        self.cms.requester.post_json("/triggers", to_json(body)?).await
    }

    async fn update_segment(&self, segment_id: &str, body: &Segment) -> Result<String, AppError> {
        let segment_id = path_segment("segment id", segment_id)?;
        let path = format!("/triggers/{segment_id}");
        self.cms.requester.put_json(&path, to_json(body)?).await
    }

    async fn delete_segment(&self, segment_id: &str) -> Result<String, AppError> {
        let segment_id = path_segment("segment id", segment_id)?;
        let path = format!("/triggers/{segment_id}");
        self.cms.requester.delete(&path, Params::new()).await
    }
}

#[async_trait]
impl CampaignService for Client {
    async fn create_campaign(&self, body: &CampaignPostBody) -> Result<String, AppError> {
        self.cms.requester.post_json("/campaigns", to_json(body)?).await
    }

    async fn update_campaign(
        &self,
        id: &str,
        body: &CampaignUpdateBody,
    ) -> Result<String, AppError> {
        let id = path_segment("campaign id", id)?;
        let path = format!("/campaigns/{id}");
        self.cms.requester.put_json(&path, to_json(body)?).await
    }

    async fn get_campaigns(&self, query: &CampaignQuery) -> Result<String, AppError> {
        self.cms
            .requester
            .get("/campaigns", query.to_params())
            .await
    }

    async fn update_campaign_trigger(
        &self,
        id: &str,
        body: &CampaignTrigger,
    ) -> Result<String, AppError> {
        let id = path_segment("campaign id", id)?;
        let path = format!("/campaigns/{id}/triggers");
        self.cms.requester.put_json(&path, to_json(body)?).await
    }

    async fn get_campaigns_stats(&self, campaign_ids: &[String]) -> Result<String, AppError> {
        let mut params = Params::new();
        params.insert_joined("id", campaign_ids);
        self.connect
            .requester
            .get("/api/campaigns/stat", params)
            .await
    }

    async fn get_campaign_detail(&self, campaign_id: &str) -> Result<String, AppError> {
        let campaign_id = path_segment("campaign id", campaign_id)?;
        let path = format!("/campaigns/{campaign_id}");
        self.cms.requester.get(&path, Params::new()).await
    }

    async fn get_campaign_detail_by_alias(&self, alias: &str) -> Result<String, AppError> {
        let alias = path_segment("campaign alias", alias)?;
        let path = format!("/campaigns/aliases/{alias}");
        self.cms.requester.get(&path, Params::new()).await
    }

    async fn get_campaign_report(&self, campaign_id: &str) -> Result<String, AppError> {
        let campaign_id = path_segment("campaign id", campaign_id)?;
        let path = format!("/api/reports/campaigns/{campaign_id}");
        self.connect.requester.get(&path, Params::new()).await
    }

    async fn delete_campaign(&self, campaign_id: &str) -> Result<String, AppError> {
        let campaign_id = path_segment("campaign id", campaign_id)?;
        let path = format!("/campaigns/{campaign_id}");
        self.cms.requester.delete(&path, Params::new()).await
    }

    async fn get_media(&self, query: &MediaQuery) -> Result<String, AppError> {
        self.cms.requester.get("/media", query.to_params()).await
    }

    async fn update_message_sms(
        &self,
        campaign_id: &str,
        body: &UpdateMessageSms,
    ) -> Result<(SmsMessageResponse, String), AppError> {
        let campaign_id = path_segment("campaign id", campaign_id)?;
        let path = format!("/campaigns/{campaign_id}/messages/sms");
        put_typed(&self.cms, &path, to_json(body)?).await
    }

    async fn update_message_push_notification(
        &self,
        campaign_id: &str,
        body: &UpdateMessagePushNotification,
    ) -> Result<(PushNotificationMessageResponse, String), AppError> {
        let campaign_id = path_segment("campaign id", campaign_id)?;
        let path = format!("/campaigns/{campaign_id}/messages/mobile_notification");
        put_typed(&self.cms, &path, to_json(body)?).await
    }
}

#[async_trait]
impl ContactService for Client {
    async fn create_contact(
        &self,
        file_path: &Path,
        attrs: &str,
        tags: &str,
    ) -> Result<String, AppError> {
        let mut fields = Params::new();
        fields
            .insert_non_empty("attrs", attrs)
            .insert_non_empty("tags", tags);
        self.connect
            .requester
            .post_file("/api/contacts/upload", file_path, "file", fields)
            .await
    }

    async fn create_contact_with_body(&self, body: &str) -> Result<String, AppError> {
        self.connect
            .requester
            .post_raw("/api/contacts", "application/json", body.to_string())
            .await
    }

    async fn update_contact_attr(
        &self,
        contact_id: &str,
        body: &Contact,
    ) -> Result<String, AppError> {
        let contact_id = path_segment("contact id", contact_id)?;
        let path = format!("/api/contacts/{contact_id}");
        self.connect.requester.put_json(&path, to_json(body)?).await
    }

    async fn get_contacts(&self, query: &ContactQuery) -> Result<String, AppError> {
        self.connect
            .requester
            .get("/api/contacts", query.to_params())
            .await
    }

    async fn add_tags_by_contacts(&self, body: &ContactsTags) -> Result<String, AppError> {
        self.connect
            .requester
            .post_json("/api/contacts/tags", to_json(body)?)
            .await
    }

    async fn delete_tags_by_contacts(&self, body: &ContactsTags) -> Result<String, AppError> {
        self.connect
            .requester
            .delete_json("/api/contacts/tags", to_json(body)?)
            .await
    }

    async fn get_contacts_tags(&self, query: &ContactTagQuery) -> Result<String, AppError> {
        self.connect
            .requester
            .get("/api/contacts/tag/multiple", query.to_params())
            .await
    }
}
