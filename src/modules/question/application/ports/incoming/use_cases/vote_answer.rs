use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{AnswerId, QuestionId, VoteOutcome, VoteType};

use super::errors::QuestionCommandError;

#[async_trait]
pub trait VoteAnswerUseCase: Send + Sync {
    async fn execute(
        &self,
        id: QuestionId,
        answer_id: AnswerId,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionCommandError>;
}
