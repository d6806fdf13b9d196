use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{QuestionId, VoteOutcome, VoteType};
use crate::question::application::ports::incoming::use_cases::{
    QuestionCommandError, VoteQuestionUseCase,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct VoteQuestionService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> VoteQuestionService<R>
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
impl<R> VoteQuestionUseCase for VoteQuestionService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError> {
        let (_, outcome) = self
            .writer
            .update(id, |q| Ok(q.vote(voter, vote)?))
            .await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::domain::{Question, VoteDirection};
    use crate::question::application::services::test_support::{
        accepting_repo, sample_question, MockQuestionRepo,
    };
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    /// In-memory store: loads see the last save, as a real row would.
    fn stateful_repo(initial: Question) -> MockQuestionRepo {
        let stored = Arc::new(Mutex::new(initial));
        let for_load = stored.clone();

        let mut repo = MockQuestionRepo::new();
        repo.expect_load()
            .returning(move |_| Ok(for_load.lock().unwrap().clone()));
        repo.expect_save().returning(move |q| {
            let saved = Question { version: q.version + 1, ..q };
            *stored.lock().unwrap() = saved.clone();
            Ok(saved)
        });
        repo
    }

    #[tokio::test]
    async fn upvote_switch_remove_sequence() {
        let q = sample_question(user());
        let id = q.id;
        let voter = user();
        let service = VoteQuestionService::new(stateful_repo(q));

        let up = service.execute(id, voter, VoteType::Upvote).await.unwrap();
        assert_eq!((up.score, up.user_vote), (1, Some(VoteDirection::Upvote)));

        let down = service.execute(id, voter, VoteType::Downvote).await.unwrap();
        assert_eq!((down.score, down.user_vote), (-1, Some(VoteDirection::Downvote)));

        let removed = service.execute(id, voter, VoteType::Remove).await.unwrap();
        assert_eq!((removed.score, removed.user_vote), (0, None));
    }

    #[tokio::test]
    async fn repeated_upvote_counts_once() {
        let q = sample_question(user());
        let id = q.id;
        let voter = user();
        let service = VoteQuestionService::new(stateful_repo(q));

        service.execute(id, voter, VoteType::Upvote).await.unwrap();
        let again = service.execute(id, voter, VoteType::Upvote).await.unwrap();

        assert_eq!(again.score, 1);
    }

    #[tokio::test]
    async fn author_cannot_vote() {
        let author = user();
        let q = sample_question(author);
        let id = q.id;
        let mut repo = MockQuestionRepo::new();
        repo.expect_load().returning(move |_| Ok(q.clone()));
        repo.expect_save().never();

        let service = VoteQuestionService::new(repo);
        let err = service
            .execute(id, author, VoteType::Upvote)
            .await
            .unwrap_err();

        assert_eq!(err, QuestionCommandError::SelfVote);
    }

    #[tokio::test]
    async fn vote_returns_score_for_caller() {
        let q = sample_question(user());
        let id = q.id;

        let service = VoteQuestionService::new(accepting_repo(q));
        let outcome = service.execute(id, user(), VoteType::Downvote).await.unwrap();

        assert_eq!(outcome.score, -1);
        assert_eq!(outcome.user_vote, Some(VoteDirection::Downvote));
    }
}
