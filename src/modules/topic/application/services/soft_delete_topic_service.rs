use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::topic::application::domain::TopicId;
use crate::topic::application::ports::incoming::use_cases::{
    SoftDeleteTopicError, SoftDeleteTopicUseCase,
};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicRepository, TopicRepositoryError};

#[derive(Debug, Clone)]
pub struct SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SoftDeleteTopicUseCase for SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        role: Role,
        topic_id: TopicId,
    ) -> Result<(), SoftDeleteTopicError> {
        let topic = self
            .query
            .find_active(topic_id)
            .await
            .map_err(|e| SoftDeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(SoftDeleteTopicError::TopicNotFound)?;

        if !topic.can_be_deleted_by(actor, role) {
            return Err(SoftDeleteTopicError::Forbidden);
        }

        self.repository
            .soft_delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => SoftDeleteTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => SoftDeleteTopicError::DatabaseError(msg),
                other => SoftDeleteTopicError::DatabaseError(other.to_string()),
            })
    }
}
