use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

// ========================= Register Input =========================
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserInputError {
    #[error("Username must be between 3 and 30 characters")]
    InvalidUsernameLength,

    #[error("Username may only contain letters, digits and underscores")]
    InvalidUsernameCharacters,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl RegisterUserInput {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserInputError> {
        let username = username.trim().to_string();
        let length = username.chars().count();
        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
            return Err(RegisterUserInputError::InvalidUsernameLength);
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(RegisterUserInputError::InvalidUsernameCharacters);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserInputError::InvalidEmailFormat);
        }

        if password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(RegisterUserInputError::PasswordTooShort);
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Register Error =========================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        let by_username = self
            .query
            .find_by_username(input.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if by_username.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        let by_email = self
            .query
            .find_by_email(input.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if by_email.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(input.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                username: input.username().to_string(),
                email: input.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration.
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }
}
