use tracing::warn;

use crate::question::application::domain::{Question, QuestionId};
use crate::question::application::ports::incoming::use_cases::QuestionCommandError;
use crate::question::application::ports::outgoing::{QuestionRepository, QuestionRepositoryError};

pub const MAX_SAVE_ATTEMPTS: u32 = 3;

/// Load, mutate, save with optimistic concurrency.
///
/// Every attempt starts from a fresh load, so a retried mutation always sees
/// the writes that beat it. A mutation error aborts immediately and nothing
/// is saved.
pub struct AggregateWriter<R>
where
    R: QuestionRepository,
{
    repository: R,
}

impl<R> AggregateWriter<R>
where
    R: QuestionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Loads an active question. Deactivated questions read as not found.
    pub async fn load_active(&self, id: QuestionId) -> Result<Question, QuestionCommandError> {
        let question = self.repository.load(id).await?;
        if !question.is_active {
            return Err(QuestionCommandError::NotFound);
        }
        Ok(question)
    }

    pub async fn update<T, F>(
        &self,
        id: QuestionId,
        mut mutate: F,
    ) -> Result<(Question, T), QuestionCommandError>
    where
        F: FnMut(&mut Question) -> Result<T, QuestionCommandError> + Send,
        T: Send,
    {
        self.write(id, |q| mutate(q).map(|value| (value, true)))
            .await
    }

    /// Like [`update`](Self::update) for mutations that may turn out to be
    /// no-ops. When `mutate` reports `false` the loaded aggregate is returned
    /// as is and nothing is written.
    pub async fn update_if_changed<F>(
        &self,
        id: QuestionId,
        mut mutate: F,
    ) -> Result<(Question, bool), QuestionCommandError>
    where
        F: FnMut(&mut Question) -> Result<bool, QuestionCommandError> + Send,
    {
        self.write(id, |q| mutate(q).map(|changed| (changed, changed)))
            .await
    }

    async fn write<T, F>(
        &self,
        id: QuestionId,
        mut mutate: F,
    ) -> Result<(Question, T), QuestionCommandError>
    where
        F: FnMut(&mut Question) -> Result<(T, bool), QuestionCommandError> + Send,
        T: Send,
    {
        let mut attempt = 1;
        loop {
            let mut question = self.load_active(id).await?;
            let (value, changed) = mutate(&mut question)?;
            if !changed {
                return Ok((question, value));
            }

            match self.repository.save(question).await {
                Ok(saved) => return Ok((saved, value)),
                Err(QuestionRepositoryError::Conflict) if attempt < MAX_SAVE_ATTEMPTS => {
                    warn!(question_id = %id, attempt, "Concurrent question update, retrying");
                    attempt += 1;
                }
                Err(QuestionRepositoryError::Conflict) => {
                    warn!(question_id = %id, attempt, "Giving up after repeated conflicts");
                    return Err(QuestionCommandError::Conflict);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
