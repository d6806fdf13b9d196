use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Per-topic question counts. Adjusted after a question has been created or
/// deactivated; the stored value never drops below zero.
#[async_trait]
pub trait TopicQuestionCounter: Send + Sync {
    async fn adjust_question_count(&self, topic_ids: &[Uuid], delta: i32)
        -> Result<(), CounterError>;
}

#[async_trait]
pub trait UserQuestionCounter: Send + Sync {
    async fn adjust_questions_asked(&self, user_id: UserId, delta: i32)
        -> Result<(), CounterError>;
}
