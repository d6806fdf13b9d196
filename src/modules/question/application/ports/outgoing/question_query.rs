use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionSort {
    #[default]
    Newest,
    Oldest,
    MostVoted,
    MostViewed,
    MostAnswered,
    RecentActivity,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort '{0}'")]
pub struct UnknownQuestionSort(pub String);

impl FromStr for QuestionSort {
    type Err = UnknownQuestionSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(QuestionSort::Newest),
            "oldest" => Ok(QuestionSort::Oldest),
            "most_voted" => Ok(QuestionSort::MostVoted),
            "most_viewed" => Ok(QuestionSort::MostViewed),
            "most_answered" => Ok(QuestionSort::MostAnswered),
            "recent_activity" => Ok(QuestionSort::RecentActivity),
            other => Err(UnknownQuestionSort(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    pub topic_id: Option<Uuid>,
    pub tag: Option<String>,
    pub author_id: Option<UserId>,
}

/// Listing row, built from the denormalised columns only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    pub id: Uuid,
    pub title: String,
    pub author_id: UserId,
    pub topic_ids: Vec<Uuid>,
    pub tags: Vec<String>,
    pub score: i64,
    pub answer_count: i64,
    pub views: i64,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait QuestionQuery: Send + Sync {
    /// Active questions only.
    async fn list(
        &self,
        filter: QuestionFilter,
        sort: QuestionSort,
        page: PageRequest,
    ) -> Result<PageResult<QuestionSummary>, QuestionQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_sort() {
        for (raw, expected) in [
            ("newest", QuestionSort::Newest),
            ("oldest", QuestionSort::Oldest),
            ("most_voted", QuestionSort::MostVoted),
            ("most_viewed", QuestionSort::MostViewed),
            ("most_answered", QuestionSort::MostAnswered),
            ("recent_activity", QuestionSort::RecentActivity),
        ] {
            assert_eq!(raw.parse::<QuestionSort>().unwrap(), expected);
        }
    }

    #[test]
    fn rejects_unknown_sort() {
        assert_eq!(
            "popular".parse::<QuestionSort>().unwrap_err(),
            UnknownQuestionSort("popular".to_string())
        );
    }
}
