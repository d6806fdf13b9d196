use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::QuestionId;
use crate::question::application::ports::incoming::use_cases::{
    DeleteQuestionUseCase, QuestionCommandError,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;
use super::question_counters::QuestionCounters;

pub struct DeleteQuestionService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
    counters: QuestionCounters,
}

impl<R> DeleteQuestionService<R>
where
    R: QuestionRepository,
{
    pub fn new(repository: R, counters: QuestionCounters) -> Self {
        Self {
            writer: AggregateWriter::new(repository),
            counters,
        }
    }
}

#[async_trait]
impl<R> DeleteQuestionUseCase for DeleteQuestionService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        actor: UserId,
        role: Role,
    ) -> Result<(), QuestionCommandError> {
        let (saved, ()) = self
            .writer
            .update(id, |q| Ok(q.deactivate(actor, role, Utc::now())?))
            .await?;

        self.counters.adjust(&saved, -1).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::outgoing::CounterError;
    use crate::question::application::services::test_support::{
        accepting_repo, sample_question, MockQuestionRepo, MockTopicCounter, MockUserCounter,
    };
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn soft_deletes_and_decrements_counters() {
        let author = UserId::from(Uuid::new_v4());
        let q = sample_question(author);
        let id = q.id;
        let topic_ids = q.topic_ids.clone();

        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));
        repo.expect_save()
            .withf(|q| !q.is_active)
            .times(1)
            .returning(|q| Ok(q));

        let mut topics = MockTopicCounter::new();
        topics
            .expect_adjust_question_count()
            .withf(move |ids, delta| ids == topic_ids.as_slice() && *delta == -1)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut users = MockUserCounter::new();
        users
            .expect_adjust_questions_asked()
            .withf(move |user, delta| *user == author && *delta == -1)
            .times(1)
            .returning(|_, _| Err(CounterError::DatabaseError("ignored".to_string())));

        let service =
            DeleteQuestionService::new(repo, QuestionCounters::new(Arc::new(topics), Arc::new(users)));

        assert!(service.execute(id, author, Role::User).await.is_ok());
    }

    #[tokio::test]
    async fn forbidden_delete_leaves_counters_alone() {
        let q = sample_question(UserId::from(Uuid::new_v4()));
        let id = q.id;

        let mut topics = MockTopicCounter::new();
        topics.expect_adjust_question_count().never();
        let mut users = MockUserCounter::new();
        users.expect_adjust_questions_asked().never();

        let service = DeleteQuestionService::new(
            accepting_repo(q),
            QuestionCounters::new(Arc::new(topics), Arc::new(users)),
        );
        let err = service
            .execute(id, UserId::from(Uuid::new_v4()), Role::User)
            .await
            .unwrap_err();

        assert!(matches!(err, QuestionCommandError::Forbidden(_)));
    }
}
