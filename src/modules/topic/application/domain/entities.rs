use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, UserId};

pub type TopicId = Uuid;

/// A subject questions are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub question_count: i32,
    pub follower_count: i32,
    pub moderators: Vec<UserId>,
    pub created_by: UserId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn can_be_deleted_by(&self, actor: UserId, role: Role) -> bool {
        role.is_admin() || self.created_by == actor
    }
}

static SLUG_SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

fn slug_separator_regex() -> &'static Regex {
    SLUG_SEPARATOR_RE.get_or_init(|| {
        Regex::new("[^a-z0-9]+")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

/// Lowercase, hyphen separated form of a topic name.
///
/// Every run of characters outside `[a-z0-9]` collapses into one hyphen and
/// leading or trailing hyphens are dropped, so `"  Rust & Async!"` becomes
/// `"rust-async"`. A name without any ASCII alphanumerics yields an empty slug.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    slug_separator_regex()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
