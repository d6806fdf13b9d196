use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::auth::application::domain::entities::UserId;

/// What a voter asks for. `Remove` withdraws any existing vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteType {
    Upvote,
    Downvote,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid vote type '{0}', expected upvote, downvote or remove")]
pub struct InvalidVoteType(pub String);

impl FromStr for VoteType {
    type Err = InvalidVoteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(VoteType::Upvote),
            "downvote" => Ok(VoteType::Downvote),
            "remove" => Ok(VoteType::Remove),
            other => Err(InvalidVoteType(other.to_string())),
        }
    }
}

/// The vote a user currently holds on a votable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Upvote => f.write_str("upvote"),
            VoteDirection::Downvote => f.write_str("downvote"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    pub score: i64,
    pub user_vote: Option<VoteDirection>,
}

/// Upvote and downvote sets of one votable (a question or an answer).
///
/// A user is in at most one of the two sets. Every mutation goes through
/// [`VoteLedger::apply`], which first clears the user from both sets, so
/// repeating a vote is a no-op and switching sides never leaves a user
/// counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLedger")]
pub struct VoteLedger {
    upvotes: BTreeSet<UserId>,
    downvotes: BTreeSet<UserId>,
}

#[derive(Deserialize)]
struct RawLedger {
    #[serde(default)]
    upvotes: BTreeSet<UserId>,
    #[serde(default)]
    downvotes: BTreeSet<UserId>,
}

impl From<RawLedger> for VoteLedger {
    // Rows written before the invariant was enforced may hold a user in both
    // sets; the later-applied side (downvote) wins.
    fn from(raw: RawLedger) -> Self {
        let RawLedger {
            mut upvotes,
            downvotes,
        } = raw;
        upvotes.retain(|user| !downvotes.contains(user));
        Self { upvotes, downvotes }
    }
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, user: UserId, vote: VoteType) -> VoteOutcome {
        self.upvotes.remove(&user);
        self.downvotes.remove(&user);

        match vote {
            VoteType::Upvote => {
                self.upvotes.insert(user);
            }
            VoteType::Downvote => {
                self.downvotes.insert(user);
            }
            VoteType::Remove => {}
        }

        VoteOutcome {
            score: self.score(),
            user_vote: self.vote_of(user),
        }
    }

    pub fn score(&self) -> i64 {
        self.upvotes.len() as i64 - self.downvotes.len() as i64
    }

    pub fn vote_of(&self, user: UserId) -> Option<VoteDirection> {
        if self.upvotes.contains(&user) {
            Some(VoteDirection::Upvote)
        } else if self.downvotes.contains(&user) {
            Some(VoteDirection::Downvote)
        } else {
            None
        }
    }

    pub fn upvotes(&self) -> &BTreeSet<UserId> {
        &self.upvotes
    }

    pub fn downvotes(&self) -> &BTreeSet<UserId> {
        &self.downvotes
    }

    pub fn is_empty(&self) -> bool {
        self.upvotes.is_empty() && self.downvotes.is_empty()
    }
}
