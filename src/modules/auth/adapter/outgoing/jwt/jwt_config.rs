use std::env;

use crate::config::{parse_env, require_env, ConfigError};

const MIN_SECRET_LENGTH: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
    /// Seconds.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = require_env("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material.
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256".to_string(),
            ));
        }

        let access_token_expiry = parse_env("JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = parse_env("JWT_REFRESH_EXPIRY", 604_800i64)?;

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds".to_string(),
            ));
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Constraint(
                "JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY".to_string(),
            ));
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "qa-forum".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
