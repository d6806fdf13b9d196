use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::topic::application::domain::TopicId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoftDeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Only the topic creator or an admin can delete this topic")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SoftDeleteTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        role: Role,
        topic_id: TopicId,
    ) -> Result<(), SoftDeleteTopicError>;
}
