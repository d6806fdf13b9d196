use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::Question;
use crate::question::application::ports::incoming::use_cases::{
    CreateQuestionCommand, CreateQuestionUseCase, QuestionCommandError,
};
use crate::question::application::ports::outgoing::{QuestionRepository, TopicCatalog};

use super::question_counters::QuestionCounters;

pub struct CreateQuestionService<R, C>
where
    R: QuestionRepository,
    C: TopicCatalog,
{
    repository: R,
    catalog: C,
    counters: QuestionCounters,
}

impl<R, C> CreateQuestionService<R, C>
where
    R: QuestionRepository,
    C: TopicCatalog,
{
    pub fn new(repository: R, catalog: C, counters: QuestionCounters) -> Self {
        Self {
            repository,
            catalog,
            counters,
        }
    }
}

#[async_trait]
impl<R, C> CreateQuestionUseCase for CreateQuestionService<R, C>
where
    R: QuestionRepository,
    C: TopicCatalog,
{
    async fn execute(
        &self,
        author: UserId,
        command: CreateQuestionCommand,
    ) -> Result<Question, QuestionCommandError> {
        let active = self.catalog.active_topic_ids(command.topic_ids()).await?;
        if let Some(unknown) = command.topic_ids().iter().find(|id| !active.contains(id)) {
            return Err(QuestionCommandError::InvalidInput(format!(
                "Topic {unknown} does not exist or is inactive"
            )));
        }

        let question = Question::new(author, command.into_new_question(), Utc::now());
        let created = self.repository.create(question).await?;

        self.counters.adjust(&created, 1).await;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::outgoing::{CounterError, QuestionRepositoryError};
    use crate::question::application::services::test_support::{
        MockCatalog, MockQuestionRepo, MockTopicCounter, MockUserCounter,
    };
    use std::sync::Arc;
    use uuid::Uuid;

    fn command(topic_ids: Vec<Uuid>) -> CreateQuestionCommand {
        CreateQuestionCommand::new(
            "How do I share state between handlers?".to_string(),
            "I tried a global static but it feels wrong.".to_string(),
            topic_ids,
            vec!["Actix".to_string()],
            vec![],
        )
        .unwrap()
    }

    fn catalog_knowing(ids: Vec<Uuid>) -> MockCatalog {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_active_topic_ids()
            .returning(move |_| Ok(ids.clone()));
        catalog
    }

    fn counters(topic_ok: bool, user_ok: bool) -> QuestionCounters {
        let mut topics = MockTopicCounter::new();
        topics
            .expect_adjust_question_count()
            .withf(|ids, delta| ids.len() == 1 && *delta == 1)
            .times(1)
            .returning(move |_, _| {
                if topic_ok {
                    Ok(())
                } else {
                    Err(CounterError::DatabaseError("topic write failed".to_string()))
                }
            });

        let mut users = MockUserCounter::new();
        users
            .expect_adjust_questions_asked()
            .withf(|_, delta| *delta == 1)
            .times(1)
            .returning(move |_, _| {
                if user_ok {
                    Ok(())
                } else {
                    Err(CounterError::DatabaseError("user write failed".to_string()))
                }
            });

        QuestionCounters::new(Arc::new(topics), Arc::new(users))
    }

    fn idle_counters() -> QuestionCounters {
        let mut topics = MockTopicCounter::new();
        topics.expect_adjust_question_count().never();
        let mut users = MockUserCounter::new();
        users.expect_adjust_questions_asked().never();
        QuestionCounters::new(Arc::new(topics), Arc::new(users))
    }

    #[tokio::test]
    async fn creates_question_and_bumps_counters() {
        let topic = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());

        let mut repo = MockQuestionRepo::new();
        repo.expect_create()
            .times(1)
            .returning(|q| Ok(q));

        let service = CreateQuestionService::new(repo, catalog_knowing(vec![topic]), counters(true, true));
        let created = service.execute(author, command(vec![topic])).await.unwrap();

        assert_eq!(created.author, author);
        assert_eq!(created.topic_ids, vec![topic]);
        assert_eq!(created.tags, vec!["actix"]);
        assert_eq!(created.version, 0);
        assert!(created.is_active);
        assert_eq!(created.answer_count(), 0);
    }

    #[tokio::test]
    async fn counter_failures_do_not_fail_creation() {
        let topic = Uuid::new_v4();
        let mut repo = MockQuestionRepo::new();
        repo.expect_create().returning(|q| Ok(q));

        let service =
            CreateQuestionService::new(repo, catalog_knowing(vec![topic]), counters(false, false));
        let result = service
            .execute(UserId::from(Uuid::new_v4()), command(vec![topic]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_topic_is_rejected_before_insert() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_create().never();

        let service = CreateQuestionService::new(repo, catalog_knowing(vec![]), idle_counters());
        let err = service
            .execute(UserId::from(Uuid::new_v4()), command(vec![Uuid::new_v4()]))
            .await
            .unwrap_err();

        assert!(matches!(err, QuestionCommandError::InvalidInput(msg) if msg.contains("inactive")));
    }

    #[tokio::test]
    async fn insert_failure_skips_counters() {
        let topic = Uuid::new_v4();
        let mut repo = MockQuestionRepo::new();
        repo.expect_create()
            .returning(|_| Err(QuestionRepositoryError::DatabaseError("down".to_string())));

        let service = CreateQuestionService::new(repo, catalog_knowing(vec![topic]), idle_counters());
        let err = service
            .execute(UserId::from(Uuid::new_v4()), command(vec![topic]))
            .await
            .unwrap_err();

        assert_eq!(err, QuestionCommandError::RepositoryError("down".to_string()));
    }
}
