use async_trait::async_trait;

use crate::question::application::ports::incoming::use_cases::{
    GetQuestionsUseCase, QuestionCommandError,
};
use crate::question::application::ports::outgoing::{
    QuestionFilter, QuestionQuery, QuestionSort, QuestionSummary,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetQuestionsService<Q>
where
    Q: QuestionQuery,
{
    query: Q,
}

impl<Q> GetQuestionsService<Q>
where
    Q: QuestionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQuestionsUseCase for GetQuestionsService<Q>
where
    Q: QuestionQuery,
{
    async fn execute(
        &self,
        filter: QuestionFilter,
        sort: QuestionSort,
        page: PageRequest,
    ) -> Result<PageResult<QuestionSummary>, QuestionCommandError> {
        Ok(self.query.list(filter, sort, page).await?)
    }
}
