use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        role: Role,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
            role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate_token(user_id, role, ACCESS_TOKEN, self.config.access_token_expiry)
    }

    fn generate_refresh_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            role,
            REFRESH_TOKEN,
            self.config.refresh_token_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: foreign issuer");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != REFRESH_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected 'refresh', got '{}'",
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(REFRESH_TOKEN.to_string()));
        }

        self.generate_access_token(claims.sub, claims.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access_token_expiry: i64, refresh_token_expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "qa-forum-test".to_string(),
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config(3600, 86400))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, Role::Moderator)
            .expect("Token should be generated");
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.role, Role::Moderator);
        assert_eq!(claims.iss, "qa-forum-test");
    }

    #[test]
    fn test_invalid_token_verification() {
        let result = service().verify_token("invalid.jwt.token");
        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_expired_token() {
        let service = JwtTokenService::new(config(-35, 86400));
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        let result = service.verify_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_invalid_signature() {
        let service = service();
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        let mut other = config(3600, 86400);
        other.secret_key = format!("{}_DIFFERENT", other.secret_key);
        let result = JwtTokenService::new(other).verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let token = service()
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        let mut other = config(3600, 86400);
        other.issuer = "someone-else".to_string();
        let result = JwtTokenService::new(other).verify_token(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_access_token_preserves_subject_and_role() {
        let service = service();
        let user_id = Uuid::new_v4();
        let refresh = service.generate_refresh_token(user_id, Role::Admin).unwrap();

        let access = service.refresh_access_token(&refresh).unwrap();
        let claims = service.verify_token(&access).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_access_token_with_access_token_fails() {
        let service = service();
        let access = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        let result = service.refresh_access_token(&access);
        assert_eq!(
            result.unwrap_err(),
            TokenError::InvalidTokenType("refresh".to_string())
        );
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = service();
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now);
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }
}
