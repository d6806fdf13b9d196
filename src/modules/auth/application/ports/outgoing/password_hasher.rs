use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password")]
    Hashing,

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Hashing worker did not complete")]
    WorkerJoin,
}

/// Credential hashing. Implementations are expected to be slow on purpose
/// and must not block the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a mismatch; `Err` only when the hash cannot be checked.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
