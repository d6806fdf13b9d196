use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, UserId};

use super::answer::{Answer, AnswerId};
use super::view_log::ViewLog;
use super::vote_ledger::{VoteDirection, VoteLedger, VoteOutcome, VoteType};

pub type QuestionId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionDomainError {
    #[error("Answer not found")]
    AnswerNotFound,

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("You cannot vote on your own content")]
    SelfVote,

    #[error("Only the author or an admin can do this")]
    NotPermitted,
}

/// Already-validated input for a new question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub topic_ids: Vec<Uuid>,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Aggregate root: the question with its answers, both levels of vote
/// ledgers and the view log. Loaded, mutated and saved as one unit;
/// `version` is bumped by the repository on every successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub author: UserId,
    pub topic_ids: Vec<Uuid>,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub answers: Vec<Answer>,
    pub votes: VoteLedger,
    pub views: u64,
    pub view_log: ViewLog,
    pub is_active: bool,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl Question {
    pub fn new(author: UserId, input: NewQuestion, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            author,
            topic_ids: input.topic_ids,
            tags: input.tags,
            attachments: input.attachments,
            answers: Vec::new(),
            votes: VoteLedger::new(),
            views: 0,
            view_log: ViewLog::new(),
            is_active: true,
            last_activity: now,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn score(&self) -> i64 {
        self.votes.score()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn user_vote(&self, user: UserId) -> Option<VoteDirection> {
        self.votes.vote_of(user)
    }

    pub fn answer(&self, answer_id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.author == user
    }

    fn ensure_can_manage(&self, actor: UserId, role: Role) -> Result<(), QuestionDomainError> {
        if self.is_owned_by(actor) || role.is_admin() {
            Ok(())
        } else {
            Err(QuestionDomainError::NotPermitted)
        }
    }

    // last_activity never moves backwards, even if clocks disagree between nodes.
    fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_activity {
            self.last_activity = now;
        }
        self.updated_at = now;
    }

    pub fn vote(
        &mut self,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionDomainError> {
        if self.is_owned_by(voter) {
            return Err(QuestionDomainError::SelfVote);
        }
        Ok(self.votes.apply(voter, vote))
    }

    pub fn add_answer(
        &mut self,
        author: UserId,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Answer, QuestionDomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(QuestionDomainError::EmptyContent);
        }

        let index = self.answers.len();
        self.answers
            .push(Answer::new(author, content.to_string(), now));
        self.touch(now);

        Ok(&self.answers[index])
    }

    pub fn vote_on_answer(
        &mut self,
        answer_id: AnswerId,
        voter: UserId,
        vote: VoteType,
    ) -> Result<VoteOutcome, QuestionDomainError> {
        let answer = self
            .answers
            .iter_mut()
            .find(|a| a.id == answer_id)
            .ok_or(QuestionDomainError::AnswerNotFound)?;

        if answer.author == voter {
            return Err(QuestionDomainError::SelfVote);
        }
        Ok(answer.votes.apply(voter, vote))
    }

    /// Sets or clears the accepted flag of one answer. Other answers are left
    /// as they are; several answers may be accepted at once.
    pub fn set_answer_accepted(
        &mut self,
        answer_id: AnswerId,
        actor: UserId,
        role: Role,
        accepted: bool,
        now: DateTime<Utc>,
    ) -> Result<&Answer, QuestionDomainError> {
        self.ensure_can_manage(actor, role)?;

        let index = self
            .answers
            .iter()
            .position(|a| a.id == answer_id)
            .ok_or(QuestionDomainError::AnswerNotFound)?;

        self.answers[index].is_accepted = accepted;
        self.updated_at = now;
        Ok(&self.answers[index])
    }

    /// Counts a view unless `viewer` already viewed within the dedup window.
    pub fn record_view(&mut self, viewer: UserId, now: DateTime<Utc>) -> bool {
        let counted = self.view_log.record(viewer, now);
        if counted {
            self.views += 1;
        }
        counted
    }

    pub fn edit(
        &mut self,
        actor: UserId,
        role: Role,
        edit: QuestionEdit,
        now: DateTime<Utc>,
    ) -> Result<(), QuestionDomainError> {
        self.ensure_can_manage(actor, role)?;

        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(tags) = edit.tags {
            self.tags = tags;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn deactivate(
        &mut self,
        actor: UserId,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<(), QuestionDomainError> {
        self.ensure_can_manage(actor, role)?;
        self.is_active = false;
        self.updated_at = now;
        Ok(())
    }
}
