use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{Answer, QuestionId};

use super::commands::AnswerContent;
use super::errors::QuestionCommandError;

#[async_trait]
pub trait AddAnswerUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        author: UserId,
        content: AnswerContent,
    ) -> Result<Answer, QuestionCommandError>;
}
