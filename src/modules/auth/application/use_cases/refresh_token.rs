use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::REFRESH_TOKEN;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Account is no longer active")]
    AccountDisabled,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str)
        -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Issues a new access token. The user is re-read so that a role change or a
/// deactivation takes effect at the next refresh.
pub struct RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> IRefreshTokenUseCase for RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|e| match e {
                TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                _ => RefreshTokenError::InvalidToken,
            })?;

        if claims.token_type != REFRESH_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected 'refresh', got '{}'",
                claims.token_type
            );
            return Err(RefreshTokenError::InvalidToken);
        }

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::InvalidToken)?;

        if !user.is_active {
            return Err(RefreshTokenError::AccountDisabled);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse { access_token })
    }
}
