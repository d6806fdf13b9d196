use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub reputation: i32,
    pub questions_asked: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            reputation: user.reputation,
            questions_asked: user.questions_asked,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError>;
}

pub struct FetchProfileUseCase<Q: UserQuery> {
    query: Q,
}

impl<Q: UserQuery> FetchProfileUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: UserQuery> IFetchProfileUseCase for FetchProfileUseCase<Q> {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .filter(|u| u.is_active)
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(user.into())
    }
}
