use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::{Answer, AnswerId, QuestionId};
use crate::question::application::ports::incoming::use_cases::{
    AcceptAnswerUseCase, QuestionCommandError,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct AcceptAnswerService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> AcceptAnswerService<R>
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
impl<R> AcceptAnswerUseCase for AcceptAnswerService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        answer_id: AnswerId,
        actor: UserId,
        role: Role,
        accepted: bool,
    ) -> Result<Answer, QuestionCommandError> {
        let (_, answer) = self
            .writer
            .update(id, |q| {
                Ok(q.set_answer_accepted(answer_id, actor, role, accepted, Utc::now())?
                    .clone())
            })
            .await?;
        Ok(answer)
    }
}
