use crate::error::AppError;
use crate::model::requests::{Contact, ContactQuery, ContactTagQuery, ContactsTags};
use async_trait::async_trait;
use std::path::Path;

/// Interface for the contact service
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Imports contacts from a file
    ///
    /// # Arguments
    /// * `file_path` - File uploaded under the `file` form field
    /// * `attrs` - Attribute mapping of the file columns, sent when non-empty
    /// * `tags` - Tags given to every imported contact, sent when non-empty
    async fn create_contact(
        &self,
        file_path: &Path,
        attrs: &str,
        tags: &str,
    ) -> Result<String, AppError>;

    /// Creates a contact from an already encoded JSON document
    async fn create_contact_with_body(&self, body: &str) -> Result<String, AppError>;

    /// Updates the attributes of a contact
    async fn update_contact_attr(&self, contact_id: &str, body: &Contact)
    -> Result<String, AppError>;

    /// Lists contacts
    async fn get_contacts(&self, query: &ContactQuery) -> Result<String, AppError>;

    async fn add_tags_by_contacts(&self, body: &ContactsTags) -> Result<String, AppError>;

    async fn delete_tags_by_contacts(&self, body: &ContactsTags) -> Result<String, AppError>;

    /// Lists contacts carrying the given tags
    async fn get_contacts_tags(&self, query: &ContactTagQuery) -> Result<String, AppError>;
}
