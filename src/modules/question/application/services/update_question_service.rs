use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::{Question, QuestionId};
use crate::question::application::ports::incoming::use_cases::{
    QuestionCommandError, UpdateQuestionCommand, UpdateQuestionUseCase,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct UpdateQuestionService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> UpdateQuestionService<R>
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
impl<R> UpdateQuestionUseCase for UpdateQuestionService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        actor: UserId,
        role: Role,
        command: UpdateQuestionCommand,
    ) -> Result<Question, QuestionCommandError> {
        let edit = command.into_edit();
        let (saved, ()) = self
            .writer
            .update(id, |q| Ok(q.edit(actor, role, edit.clone(), Utc::now())?))
            .await?;
        Ok(saved)
    }
}
