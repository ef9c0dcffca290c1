use crate::error::AppError;
use crate::model::requests::Tracker;
use async_trait::async_trait;

/// Interface for event tracking and recommendations
#[async_trait]
pub trait TrackerService: Send + Sync {
    /// Sends a tracking event on behalf of `contact_id`
    ///
    /// # Arguments
    /// * `contact_id` - Sent as the `contact_id` cookie
    /// * `campaign_id` - Stored as `_campaign` in the tracker form fields when non-empty
    /// * `tracker` - The event payload
    ///
    /// # Returns
    /// * The raw response body
    async fn send_event(
        &self,
        contact_id: &str,
        campaign_id: &str,
        tracker: Tracker,
    ) -> Result<String, AppError>;

    /// Sends a tracking event that belongs to a transaction
    ///
    /// Same as [`send_event`](Self::send_event), with `transaction_id` stored as
    /// `_transaction_id` in the form fields when non-empty.
    async fn send_event_transaction(
        &self,
        contact_id: &str,
        campaign_id: &str,
        transaction_id: &str,
        tracker: Tracker,
    ) -> Result<String, AppError>;

    /// Gets trending products, `limit` of 0 leaves the server default
    async fn product_trends(&self, limit: u64) -> Result<String, AppError>;

    /// Gets product recommendations from the AI model `ai_id`
    async fn product_recommends(
        &self,
        ai_id: &str,
        contact_id: &str,
        product_id: u64,
    ) -> Result<String, AppError>;

    /// Gets in-app notifications for a contact or a media identity
    async fn app_notifications(
        &self,
        contact_id: &str,
        media_alias: &str,
        media_value: &str,
    ) -> Result<String, AppError>;
}
