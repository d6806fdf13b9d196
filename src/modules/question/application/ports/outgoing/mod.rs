pub mod counters;
pub mod question_query;
pub mod question_repository;
pub mod topic_catalog;

pub use counters::{CounterError, TopicQuestionCounter, UserQuestionCounter};
pub use question_query::{
    QuestionFilter, QuestionQuery, QuestionQueryError, QuestionSort, QuestionSummary,
    UnknownQuestionSort,
};
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
pub use topic_catalog::{TopicCatalog, TopicCatalogError};
