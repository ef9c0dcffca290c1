use crate::error::AppError;
use crate::model::requests::Segment;
use async_trait::async_trait;

/// Interface for the segment (trigger) service
#[async_trait]
pub trait SegmentService: Send + Sync {
    /// Gets the number of segments
    async fn get_segments_count(&self) -> Result<String, AppError>;

    /// Lists segments matching `q`; zero `page` or `limit` is left out
    async fn get_segments(&self, q: &str, page: u64, limit: u64) -> Result<String, AppError>;

    /// Gets the member counts of the given segments
    async fn get_segments_stats(&self, segment_ids: &[String]) -> Result<String, AppError>;

    async fn get_segment_by_id(&self, segment_id: &str) -> Result<String, AppError>;

    async fn create_segment(&self, body: &Segment) -> Result<String, AppError>;

    async fn update_segment(&self, segment_id: &str, body: &Segment) -> Result<String, AppError>;

    async fn delete_segment(&self, segment_id: &str) -> Result<String, AppError>;
}
