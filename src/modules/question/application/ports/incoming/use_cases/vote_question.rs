use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{QuestionId, VoteOutcome, VoteType};

use super::errors::QuestionCommandError;

#[async_trait]
pub trait VoteQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError>;
}
