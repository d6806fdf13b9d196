use async_trait::async_trait;

use crate::topic::application::domain::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        if !command.creator_role().can_create_topics() {
            return Err(CreateTopicError::Forbidden);
        }

        let data = CreateTopicData {
            name: command.name().to_string(),
            slug: command.slug().to_string(),
            description: command.description().cloned(),
            created_by: command.creator(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicAlreadyExists => CreateTopicError::TopicAlreadyExists,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })
    }
}
