use async_trait::async_trait;

use crate::question::application::domain::{Question, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionRepositoryError {
    #[error("Question not found")]
    NotFound,

    /// The stored version no longer matches the one that was loaded.
    #[error("Question was modified concurrently")]
    Conflict,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Whole-aggregate persistence for questions.
///
/// `save` is a compare-and-swap on `version`: it succeeds only when the row
/// still carries the version the aggregate was loaded with, and returns the
/// aggregate with its version bumped.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError>;

    async fn load(&self, id: QuestionId) -> Result<Question, QuestionRepositoryError>;

    async fn save(&self, question: Question) -> Result<Question, QuestionRepositoryError>;
}
