use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::QuestionId;

use super::errors::QuestionCommandError;

#[async_trait]
pub trait DeleteQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        actor: UserId,
        role: Role,
    ) -> Result<(), QuestionCommandError>;
}
