use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{Question, QuestionId};

use super::errors::QuestionCommandError;

#[async_trait]
pub trait GetQuestionUseCase: Send + Sync {
    /// Loads an active question. A known `viewer` is counted as a view,
    /// subject to the per-user dedup window.
    async fn execute(
        &self,
        id: QuestionId,
        viewer: Option<UserId>,
    ) -> Result<Question, QuestionCommandError>;
}
