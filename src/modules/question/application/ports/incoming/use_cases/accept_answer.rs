use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::question::application::domain::{Answer, AnswerId, QuestionId};

use super::errors::QuestionCommandError;

#[async_trait]
pub trait AcceptAnswerUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        answer_id: AnswerId,
        actor: UserId,
        role: Role,
        accepted: bool,
    ) -> Result<Answer, QuestionCommandError>;
}
