use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::{
    Answer, Attachment, Question, VoteDirection, VoteOutcome,
};
use crate::question::application::ports::outgoing::QuestionSummary;
use crate::shared::pagination::PageResult;

// ========================= Requests =========================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    #[schema(example = "stacktrace.png")]
    pub file_name: String,
    #[schema(example = "https://cdn.example.com/uploads/stacktrace.png")]
    pub url: String,
    #[schema(example = "image/png")]
    pub mime_type: String,
    pub size_bytes: u64,
}

impl From<AttachmentDto> for Attachment {
    fn from(dto: AttachmentDto) -> Self {
        Attachment {
            file_name: dto.file_name,
            url: dto.url,
            mime_type: dto.mime_type,
            size_bytes: dto.size_bytes,
        }
    }
}

impl From<Attachment> for AttachmentDto {
    fn from(a: Attachment) -> Self {
        AttachmentDto {
            file_name: a.file_name,
            url: a.url,
            mime_type: a.mime_type,
            size_bytes: a.size_bytes,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    /// 10-200 characters
    #[schema(example = "How do I share state between actix handlers?")]
    pub title: String,
    /// At least 20 characters
    pub description: String,
    pub topic_ids: Vec<Uuid>,
    /// At most 10; stored lowercase
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// upvote, downvote or remove
    #[schema(example = "upvote")]
    pub vote_type: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddAnswerRequest {
    /// At least 10 characters after trimming
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AcceptAnswerRequest {
    pub accepted: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsQuery {
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    pub topic_id: Option<Uuid>,
    pub tag: Option<String>,
    pub author_id: Option<Uuid>,
    /// newest (default), oldest, most_voted, most_viewed, most_answered, recent_activity
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetQuestionQuery {
    /// oldest (default), newest or votes
    pub answer_sort: Option<String>,
}

/// Presentation order of answers; the stored order is never changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerSort {
    #[default]
    Oldest,
    Newest,
    Votes,
}

impl FromStr for AnswerSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oldest" => Ok(AnswerSort::Oldest),
            "newest" => Ok(AnswerSort::Newest),
            "votes" => Ok(AnswerSort::Votes),
            other => Err(format!(
                "Invalid answer_sort '{other}', expected oldest, newest or votes"
            )),
        }
    }
}

// ========================= Responses =========================

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResponse {
    pub score: i64,
    #[schema(value_type = Option<String>, example = "upvote")]
    pub user_vote: Option<VoteDirection>,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        Self {
            score: outcome.score,
            user_vote: outcome.user_vote,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResponse {
    pub id: Uuid,
    pub content: String,
    #[schema(value_type = Uuid)]
    pub author_id: UserId,
    pub score: i64,
    #[schema(value_type = Option<String>)]
    pub user_vote: Option<VoteDirection>,
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl AnswerResponse {
    pub fn from_answer(answer: Answer, viewer: Option<UserId>) -> Self {
        Self {
            id: answer.id,
            score: answer.score(),
            user_vote: viewer.and_then(|v| answer.votes.vote_of(v)),
            content: answer.content,
            author_id: answer.author,
            is_accepted: answer.is_accepted,
            created_at: answer.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[schema(value_type = Uuid)]
    pub author_id: UserId,
    pub topic_ids: Vec<Uuid>,
    pub tags: Vec<String>,
    pub attachments: Vec<AttachmentDto>,
    pub score: i64,
    pub upvotes: usize,
    pub downvotes: usize,
    #[schema(value_type = Option<String>)]
    pub user_vote: Option<VoteDirection>,
    pub views: u64,
    pub answer_count: usize,
    pub answers: Vec<AnswerResponse>,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionResponse {
    pub fn from_question(question: Question, viewer: Option<UserId>, sort: AnswerSort) -> Self {
        let score = question.score();
        let answer_count = question.answer_count();
        let user_vote = viewer.and_then(|v| question.user_vote(v));

        let mut answers = question.answers;
        match sort {
            AnswerSort::Oldest => {}
            AnswerSort::Newest => answers.reverse(),
            // Stable: equal scores keep their stored order.
            AnswerSort::Votes => answers.sort_by_key(|a| std::cmp::Reverse(a.score())),
        }

        Self {
            id: question.id,
            title: question.title,
            description: question.description,
            author_id: question.author,
            topic_ids: question.topic_ids,
            tags: question.tags,
            attachments: question.attachments.into_iter().map(Into::into).collect(),
            score,
            upvotes: question.votes.upvotes().len(),
            downvotes: question.votes.downvotes().len(),
            user_vote,
            views: question.views,
            answer_count,
            answers: answers
                .into_iter()
                .map(|a| AnswerResponse::from_answer(a, viewer))
                .collect(),
            last_activity: question.last_activity,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummaryResponse {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = Uuid)]
    pub author_id: UserId,
    pub topic_ids: Vec<Uuid>,
    pub tags: Vec<String>,
    pub score: i64,
    pub answer_count: i64,
    pub views: i64,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<QuestionSummary> for QuestionSummaryResponse {
    fn from(s: QuestionSummary) -> Self {
        Self {
            id: s.id,
            title: s.title,
            author_id: s.author_id,
            topic_ids: s.topic_ids,
            tags: s.tags,
            score: s.score,
            answer_count: s.answer_count,
            views: s.views,
            last_activity: s.last_activity,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub items: Vec<QuestionSummaryResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<PageResult<QuestionSummary>> for QuestionListResponse {
    fn from(page: PageResult<QuestionSummary>) -> Self {
        let page = page.map(QuestionSummaryResponse::from);
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::domain::{NewQuestion, VoteType};

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn question_with_answers() -> (Question, [Uuid; 3]) {
        let mut q = Question::new(
            user(),
            NewQuestion {
                title: "Which answer ordering is shown?".to_string(),
                description: "Checking presentation ordering of answers".to_string(),
                topic_ids: vec![Uuid::new_v4()],
                tags: vec![],
                attachments: vec![],
            },
            Utc::now(),
        );
        let now = Utc::now();
        let a = q.add_answer(user(), "first answer", now).unwrap().id;
        let b = q.add_answer(user(), "second answer", now).unwrap().id;
        let c = q.add_answer(user(), "third answer", now).unwrap().id;
        (q, [a, b, c])
    }

    fn ids(resp: &QuestionResponse) -> Vec<Uuid> {
        resp.answers.iter().map(|a| a.id).collect()
    }

    #[test]
    fn answers_default_to_stored_order() {
        let (q, [a, b, c]) = question_with_answers();
        let resp = QuestionResponse::from_question(q, None, AnswerSort::default());
        assert_eq!(ids(&resp), vec![a, b, c]);
    }

    #[test]
    fn newest_reverses_stored_order() {
        let (q, [a, b, c]) = question_with_answers();
        let resp = QuestionResponse::from_question(q, None, AnswerSort::Newest);
        assert_eq!(ids(&resp), vec![c, b, a]);
    }

    #[test]
    fn votes_sort_is_stable_on_ties() {
        let (mut q, [a, b, c]) = question_with_answers();
        q.vote_on_answer(c, user(), VoteType::Upvote).unwrap();
        q.vote_on_answer(a, user(), VoteType::Downvote).unwrap();

        let resp = QuestionResponse::from_question(q, None, AnswerSort::Votes);
        assert_eq!(ids(&resp), vec![c, b, a]);
    }

    #[test]
    fn user_vote_is_reported_for_the_viewer_only() {
        let (mut q, [a, _, _]) = question_with_answers();
        let voter = user();
        q.vote(voter, VoteType::Upvote).unwrap();
        q.vote_on_answer(a, voter, VoteType::Downvote).unwrap();

        let mine = QuestionResponse::from_question(q.clone(), Some(voter), AnswerSort::Oldest);
        assert_eq!(mine.user_vote, Some(VoteDirection::Upvote));
        assert_eq!(mine.answers[0].user_vote, Some(VoteDirection::Downvote));
        assert_eq!(mine.score, 1);
        assert_eq!(mine.answer_count, 3);

        let theirs = QuestionResponse::from_question(q, Some(user()), AnswerSort::Oldest);
        assert_eq!(theirs.user_vote, None);
        assert_eq!(theirs.answers[0].user_vote, None);
    }

    #[test]
    fn answer_sort_parsing() {
        assert_eq!("votes".parse::<AnswerSort>().unwrap(), AnswerSort::Votes);
        assert!("best".parse::<AnswerSort>().is_err());
    }

    #[test]
    fn user_vote_serializes_as_label_or_null() {
        let json = serde_json::to_value(VoteResponse {
            score: 0,
            user_vote: None,
        })
        .unwrap();
        assert!(json["user_vote"].is_null());

        let json = serde_json::to_value(VoteResponse {
            score: 1,
            user_vote: Some(VoteDirection::Upvote),
        })
        .unwrap();
        assert_eq!(json["user_vote"], "upvote");
    }
}
