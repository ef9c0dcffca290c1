use crate::error::AppError;
use crate::model::requests::{
    CampaignPostBody, CampaignQuery, CampaignTrigger, CampaignUpdateBody, MediaQuery,
    UpdateMessagePushNotification, UpdateMessageSms,
};
use crate::model::responses::{PushNotificationMessageResponse, SmsMessageResponse};
use async_trait::async_trait;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Creates a campaign
    async fn create_campaign(&self, body: &CampaignPostBody) -> Result<String, AppError>;

    /// Updates campaign `id`
    async fn update_campaign(&self, id: &str, body: &CampaignUpdateBody)
    -> Result<String, AppError>;

    /// Lists campaigns
    async fn get_campaigns(&self, query: &CampaignQuery) -> Result<String, AppError>;

    /// Replaces the segments campaign `id` is sent to
    async fn update_campaign_trigger(
        &self,
        id: &str,
        body: &CampaignTrigger,
    ) -> Result<String, AppError>;

    /// Gets delivery statistics for the given campaigns
    async fn get_campaigns_stats(&self, campaign_ids: &[String]) -> Result<String, AppError>;

    async fn get_campaign_detail(&self, campaign_id: &str) -> Result<String, AppError>;

    async fn get_campaign_detail_by_alias(&self, alias: &str) -> Result<String, AppError>;

    /// Gets the report of a campaign
    async fn get_campaign_report(&self, campaign_id: &str) -> Result<String, AppError>;

    async fn delete_campaign(&self, campaign_id: &str) -> Result<String, AppError>;

    /// Lists the delivery media
    async fn get_media(&self, query: &MediaQuery) -> Result<String, AppError>;

    /// Updates the SMS message of a campaign
    ///
    /// # Returns
    /// * The decoded response together with the raw body
    async fn update_message_sms(
        &self,
        campaign_id: &str,
        body: &UpdateMessageSms,
    ) -> Result<(SmsMessageResponse, String), AppError>;

    /// Updates the push notification of a campaign
    ///
    /// # Returns
    /// * The decoded response together with the raw body
    async fn update_message_push_notification(
        &self,
        campaign_id: &str,
        body: &UpdateMessagePushNotification,
    ) -> Result<(PushNotificationMessageResponse, String), AppError>;
}
