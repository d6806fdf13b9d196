use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), SoftDeleteUserError>;
}

/// Deactivates the caller's account. Questions and answers they wrote stay
/// visible; only login and token refresh stop working.
pub struct SoftDeleteUserUseCase<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> SoftDeleteUserUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository> ISoftDeleteUserUseCase for SoftDeleteUserUseCase<R> {
    async fn execute(&self, user_id: UserId) -> Result<(), SoftDeleteUserError> {
        self.repository
            .soft_delete_user(user_id.value())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SoftDeleteUserError::UserNotFound,
                other => SoftDeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%user_id, "User account deactivated");
        Ok(())
    }
}
