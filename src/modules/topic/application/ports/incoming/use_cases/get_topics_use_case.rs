use async_trait::async_trait;

use crate::topic::application::domain::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    /// Active topics ordered by name.
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError>;
}
