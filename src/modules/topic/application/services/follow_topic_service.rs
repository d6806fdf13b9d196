use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::TopicId;
use crate::topic::application::ports::incoming::use_cases::{
    FollowStatus, FollowTopicError, FollowTopicUseCase, UnfollowTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    FollowChange, TopicRepository, TopicRepositoryError,
};

fn map_repository_error(e: TopicRepositoryError) -> FollowTopicError {
    match e {
        TopicRepositoryError::TopicNotFound => FollowTopicError::TopicNotFound,
        TopicRepositoryError::DatabaseError(msg) => FollowTopicError::DatabaseError(msg),
        other => FollowTopicError::DatabaseError(other.to_string()),
    }
}

fn status(topic_id: TopicId, following: bool, change: FollowChange) -> FollowStatus {
    if !change.changed {
        debug!(%topic_id, following, "Follow state already held");
    }
    FollowStatus {
        topic_id,
        following,
        follower_count: change.follower_count,
    }
}

#[derive(Debug, Clone)]
pub struct FollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> FollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FollowTopicUseCase for FollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowStatus, FollowTopicError> {
        let change = self
            .repository
            .follow(user, topic_id)
            .await
            .map_err(map_repository_error)?;

        Ok(status(topic_id, true, change))
    }
}

#[derive(Debug, Clone)]
pub struct UnfollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UnfollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UnfollowTopicUseCase for UnfollowTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowStatus, FollowTopicError> {
        let change = self
            .repository
            .unfollow(user, topic_id)
            .await
            .map_err(map_repository_error)?;

        Ok(status(topic_id, false, change))
    }
}
