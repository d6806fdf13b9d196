use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{Answer, QuestionId};
use crate::question::application::ports::incoming::use_cases::{
    AddAnswerUseCase, AnswerContent, QuestionCommandError,
};
use crate::question::application::ports::outgoing::QuestionRepository;

use super::aggregate_writer::AggregateWriter;

pub struct AddAnswerService<R>
where
    R: QuestionRepository,
{
    writer: AggregateWriter<R>,
}

impl<R> AddAnswerService<R>
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
impl<R> AddAnswerUseCase for AddAnswerService<R>
where
    R: QuestionRepository,
{
    async fn execute(
        &self,
        id: QuestionId,
        author: UserId,
        content: AnswerContent,
    ) -> Result<Answer, QuestionCommandError> {
        let (_, answer) = self
            .writer
            .update(id, |q| {
                Ok(q.add_answer(author, content.as_str(), Utc::now())?
                    .clone())
            })
            .await?;
        Ok(answer)
    }
}
