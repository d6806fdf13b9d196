use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::Question;

use super::commands::CreateQuestionCommand;
use super::errors::QuestionCommandError;

#[async_trait]
pub trait CreateQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        command: CreateQuestionCommand,
    ) -> Result<Question, QuestionCommandError>;
}
