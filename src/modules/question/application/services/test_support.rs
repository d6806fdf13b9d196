use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{NewQuestion, Question, QuestionId};
use crate::question::application::ports::outgoing::{
    CounterError, QuestionFilter, QuestionQuery, QuestionQueryError, QuestionRepository,
    QuestionRepositoryError, QuestionSort, QuestionSummary, TopicCatalog, TopicCatalogError,
    TopicQuestionCounter, UserQuestionCounter,
};
use crate::shared::pagination::{PageRequest, PageResult};

mock! {
    pub QuestionRepo {}
    #[async_trait]
    impl QuestionRepository for QuestionRepo {
        async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError>;
        async fn load(&self, id: QuestionId) -> Result<Question, QuestionRepositoryError>;
        async fn save(&self, question: Question) -> Result<Question, QuestionRepositoryError>;
    }
}

mock! {
    pub QuestionQueryPort {}
    #[async_trait]
    impl QuestionQuery for QuestionQueryPort {
        async fn list(
            &self,
            filter: QuestionFilter,
            sort: QuestionSort,
            page: PageRequest,
        ) -> Result<PageResult<QuestionSummary>, QuestionQueryError>;
    }
}

mock! {
    pub Catalog {}
    #[async_trait]
    impl TopicCatalog for Catalog {
        async fn active_topic_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, TopicCatalogError>;
    }
}

mock! {
    pub TopicCounter {}
    #[async_trait]
    impl TopicQuestionCounter for TopicCounter {
        async fn adjust_question_count(&self, topic_ids: &[Uuid], delta: i32)
            -> Result<(), CounterError>;
    }
}

mock! {
    pub UserCounter {}
    #[async_trait]
    impl UserQuestionCounter for UserCounter {
        async fn adjust_questions_asked(&self, user_id: UserId, delta: i32)
            -> Result<(), CounterError>;
    }
}

pub fn sample_question(author: UserId) -> Question {
    Question::new(
        author,
        NewQuestion {
            title: "How do I share state between actix handlers?".to_string(),
            description: "I tried a global static but it feels wrong.".to_string(),
            topic_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            tags: vec!["actix".to_string()],
            attachments: vec![],
        },
        Utc::now(),
    )
}

/// Repository that serves `question` on every load and accepts every save.
pub fn accepting_repo(question: Question) -> MockQuestionRepo {
    let mut repo = MockQuestionRepo::new();
    repo.expect_load()
        .returning(move |_| Ok(question.clone()));
    repo.expect_save()
        .returning(|q| Ok(Question { version: q.version + 1, ..q }));
    repo
}
