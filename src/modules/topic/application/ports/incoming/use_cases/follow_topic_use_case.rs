use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::TopicId;

/// Follow state of one user on one topic after a follow or unfollow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowStatus {
    pub topic_id: TopicId,
    pub following: bool,
    pub follower_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FollowTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Following an already followed topic succeeds without changing anything.
#[async_trait]
pub trait FollowTopicUseCase: Send + Sync {
    async fn execute(&self, user: UserId, topic_id: TopicId)
        -> Result<FollowStatus, FollowTopicError>;
}

/// Unfollowing a topic that is not followed succeeds without changing anything.
#[async_trait]
pub trait UnfollowTopicUseCase: Send + Sync {
    async fn execute(&self, user: UserId, topic_id: TopicId)
        -> Result<FollowStatus, FollowTopicError>;
}
