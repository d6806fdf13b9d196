use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::{Question, QuestionId};

use super::commands::UpdateQuestionCommand;
use super::errors::QuestionCommandError;

#[async_trait]
pub trait UpdateQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        actor: UserId,
        role: Role,
        command: UpdateQuestionCommand,
    ) -> Result<Question, QuestionCommandError>;
}
