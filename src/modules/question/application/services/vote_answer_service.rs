use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{AnswerId, QuestionId, VoteOutcome, VoteType};
use crate::question::application::ports::incoming::use_cases::{
    QuestionCommandError, VoteAnswerUseCase,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct VoteAnswerService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> VoteAnswerService<R>
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
impl<R> VoteAnswerUseCase for VoteAnswerService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        answer_id: AnswerId,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError> {
        let (_, outcome) = self
            .writer
            .update(id, |q| Ok(q.vote_on_answer(answer_id, voter, vote)?))
            .await?;
        Ok(outcome)
    }
}
