use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::vote_ledger::VoteLedger;

pub type AnswerId = Uuid;

/// An answer nested in its question. It has no life outside the parent:
/// it is created, voted on and accepted only through [`super::Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub content: String,
    pub author: UserId,
    #[serde(default)]
    pub votes: VoteLedger,
    #[serde(default)]
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub(super) fn new(author: UserId, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            author,
            votes: VoteLedger::new(),
            is_accepted: false,
            created_at: now,
        }
    }

    pub fn score(&self) -> i64 {
        self.votes.score()
    }
}
