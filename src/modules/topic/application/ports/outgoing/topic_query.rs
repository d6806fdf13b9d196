use async_trait::async_trait;

use crate::topic::application::domain::{Topic, TopicId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_active(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError>;
}
