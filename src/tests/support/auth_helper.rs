use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_32b".to_string(),
        issuer: "qa-forum-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header carrying a fresh access token.
pub fn bearer(user_id: Uuid, role: Role) -> (&'static str, String) {
    let token = test_token_provider()
        .generate_access_token(user_id, role)
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}
