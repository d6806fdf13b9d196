use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{Question, QuestionId};
use crate::question::application::ports::incoming::use_cases::{
    GetQuestionUseCase, QuestionCommandError,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct GetQuestionService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> GetQuestionService<R>
where
    R: QuestionRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            writer: AggregateWriter::new(repository),
        }
    }
}

#[async_trait]
impl<R> GetQuestionUseCase for GetQuestionService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        viewer: Option<UserId>,
    ) -> Result<Question, QuestionCommandError> {
        let question = self.writer.load_active(id).await?;

        let now = Utc::now();
        let viewer = match viewer {
            Some(viewer) if !question.view_log.has_recent_view(viewer, now) => viewer,
            _ => return Ok(question),
        };

        // Counting the view is best effort; the read itself has succeeded.
        // A retry that reloads an already recorded view writes nothing.
        match self
            .writer
            .update_if_changed(id, |q| Ok(q.record_view(viewer, now)))
            .await
        {
            Ok((current, _)) => Ok(current),
            Err(QuestionCommandError::NotFound) => Err(QuestionCommandError::NotFound),
            Err(e) => {
                warn!(question_id = %id, error = %e, "Failed to record question view");
                Ok(question)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::outgoing::QuestionRepositoryError;
    use crate::question::application::services::test_support::{
        accepting_repo, sample_question, MockQuestionRepo,
    };
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn anonymous_read_does_not_save() {
        let q = sample_question(user());
        let id = q.id;
        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));
        repo.expect_save().never();

        let service = GetQuestionService::new(repo);
        let loaded = service.execute(id, None).await.unwrap();

        assert_eq!(loaded.views, 0);
    }

    #[tokio::test]
    async fn first_view_by_user_is_counted() {
        let q = sample_question(user());
        let id = q.id;

        let service = GetQuestionService::new(accepting_repo(q));
        let loaded = service.execute(id, Some(user())).await.unwrap();

        assert_eq!(loaded.views, 1);
        assert_eq!(loaded.view_log.len(), 1);
        assert_eq!(loaded.version, 1);
    }

    #[tokio::test]
    async fn recent_viewer_is_not_counted_again() {
        let viewer = user();
        let mut q = sample_question(user());
        q.record_view(viewer, Utc::now());
        let id = q.id;

        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));
        repo.expect_save().never();

        let service = GetQuestionService::new(repo);
        let loaded = service.execute(id, Some(viewer)).await.unwrap();

        assert_eq!(loaded.views, 1);
    }

    #[tokio::test]
    async fn view_recorded_by_a_concurrent_request_is_not_saved_again() {
        let viewer = user();
        let fresh = sample_question(user());
        let id = fresh.id;
        let mut already_viewed = fresh.clone();
        already_viewed.record_view(viewer, Utc::now());
        already_viewed.version = 1;

        let mut repo = MockQuestionRepo::new();
        let mut loads = 0;
        repo.expect_load().times(3).returning(move |_| {
            loads += 1;
            // Initial read and first attempt see the fresh row.
            if loads <= 2 {
                Ok(fresh.clone())
            } else {
                Ok(already_viewed.clone())
            }
        });
        repo.expect_save()
            .times(1)
            .returning(|_| Err(QuestionRepositoryError::Conflict));

        let service = GetQuestionService::new(repo);
        let loaded = service.execute(id, Some(viewer)).await.unwrap();

        assert_eq!(loaded.views, 1);
        assert_eq!(loaded.version, 1);
    }

    #[tokio::test]
    async fn view_write_failure_still_returns_question() {
        let q = sample_question(user());
        let id = q.id;
        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));
        repo.expect_save()
            .returning(|_| Err(QuestionRepositoryError::Conflict));

        let service = GetQuestionService::new(repo);
        let loaded = service.execute(id, Some(user())).await.unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.views, 0);
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_load()
            .returning(|_| Err(QuestionRepositoryError::NotFound));

        let service = GetQuestionService::new(repo);
        let err = service.execute(Uuid::new_v4(), Some(user())).await.unwrap_err();

        assert_eq!(err, QuestionCommandError::NotFound);
    }

    #[tokio::test]
    async fn deactivated_question_is_not_found() {
        let mut q = sample_question(user());
        q.is_active = false;
        let id = q.id;
        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));

        let service = GetQuestionService::new(repo);
        let err = service.execute(id, None).await.unwrap_err();

        assert_eq!(err, QuestionCommandError::NotFound);
    }
}
