use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::topic::application::domain::{slugify, Topic};

pub const TOPIC_NAME_MIN: usize = 2;
pub const TOPIC_NAME_MAX: usize = 50;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    creator: UserId,
    creator_role: Role,
    name: String,
    slug: String,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Name must be between 2 and 50 characters")]
    InvalidNameLength,

    #[error("Name must contain at least one letter or digit")]
    InvalidSlug,
}

impl CreateTopicCommand {
    pub fn new(
        creator: UserId,
        creator_role: Role,
        name: String,
        description: Option<String>,
    ) -> Result<Self, CreateTopicCommandError> {
        let name = name.trim();
        let length = name.chars().count();

        if !(TOPIC_NAME_MIN..=TOPIC_NAME_MAX).contains(&length) {
            return Err(CreateTopicCommandError::InvalidNameLength);
        }

        let slug = slugify(name);
        if slug.is_empty() {
            return Err(CreateTopicCommandError::InvalidSlug);
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            creator,
            creator_role,
            name: name.to_string(),
            slug,
            description,
        })
    }

    pub fn creator(&self) -> UserId {
        self.creator
    }

    pub fn creator_role(&self) -> Role {
        self.creator_role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Only moderators and admins can create topics")]
    Forbidden,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
