use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{Topic, TopicId};

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_by: UserId,
}

/// Result of a follow or unfollow write. `changed` is false when the
/// requested state already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowChange {
    pub changed: bool,
    pub follower_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    async fn soft_delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;

    async fn follow(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowChange, TopicRepositoryError>;

    async fn unfollow(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowChange, TopicRepositoryError>;
}
