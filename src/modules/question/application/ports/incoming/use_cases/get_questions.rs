use async_trait::async_trait;

use crate::question::application::ports::outgoing::{
    QuestionFilter, QuestionSort, QuestionSummary,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::errors::QuestionCommandError;

#[async_trait]
pub trait GetQuestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: QuestionFilter,
        sort: QuestionSort,
        page: PageRequest,
    ) -> Result<PageResult<QuestionSummary>, QuestionCommandError>;
}
