use crate::question::application::domain::{InvalidVoteType, QuestionDomainError};
use crate::question::application::ports::outgoing::{
    QuestionQueryError, QuestionRepositoryError, TopicCatalogError, UnknownQuestionSort,
};

/// Error shared by every question use case. Each variant maps onto one HTTP
/// status at the web boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionCommandError {
    #[error("Question not found")]
    NotFound,

    #[error("Answer not found")]
    AnswerNotFound,

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("You cannot vote on your own content")]
    SelfVote,

    /// Optimistic save kept losing to concurrent writers.
    #[error("Question was modified concurrently, please retry")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<QuestionDomainError> for QuestionCommandError {
    fn from(err: QuestionDomainError) -> Self {
        match err {
            QuestionDomainError::AnswerNotFound => QuestionCommandError::AnswerNotFound,
            QuestionDomainError::EmptyContent => {
                QuestionCommandError::InvalidInput("Content must not be empty".to_string())
            }
            QuestionDomainError::SelfVote => QuestionCommandError::SelfVote,
            QuestionDomainError::NotPermitted => QuestionCommandError::Forbidden(
                "Only the question author or an admin can do this".to_string(),
            ),
        }
    }
}

impl From<QuestionRepositoryError> for QuestionCommandError {
    fn from(err: QuestionRepositoryError) -> Self {
        match err {
            QuestionRepositoryError::NotFound => QuestionCommandError::NotFound,
            QuestionRepositoryError::Conflict => QuestionCommandError::Conflict,
            QuestionRepositoryError::SerializationError(msg)
            | QuestionRepositoryError::DatabaseError(msg) => {
                QuestionCommandError::RepositoryError(msg)
            }
        }
    }
}

impl From<QuestionQueryError> for QuestionCommandError {
    fn from(err: QuestionQueryError) -> Self {
        match err {
            QuestionQueryError::DatabaseError(msg) => QuestionCommandError::RepositoryError(msg),
        }
    }
}

impl From<TopicCatalogError> for QuestionCommandError {
    fn from(err: TopicCatalogError) -> Self {
        match err {
            TopicCatalogError::DatabaseError(msg) => QuestionCommandError::RepositoryError(msg),
        }
    }
}

impl From<InvalidVoteType> for QuestionCommandError {
    fn from(err: InvalidVoteType) -> Self {
        QuestionCommandError::InvalidInput(err.to_string())
    }
}

impl From<UnknownQuestionSort> for QuestionCommandError {
    fn from(err: UnknownQuestionSort) -> Self {
        QuestionCommandError::InvalidInput(err.to_string())
    }
}
