use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicCatalogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicCatalog: Send + Sync {
    /// Returns the subset of `ids` that name existing, active topics.
    async fn active_topic_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, TopicCatalogError>;
}
