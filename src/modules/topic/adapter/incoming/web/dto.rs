use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::topic::application::domain::Topic;
use crate::topic::application::ports::incoming::use_cases::FollowStatus;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    /// 2-50 characters, unique
    #[schema(example = "Async Rust")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "async-rust")]
    pub slug: String,
    pub description: Option<String>,
    pub question_count: i32,
    pub follower_count: i32,
    pub moderators: Vec<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        TopicResponse {
            id: topic.id,
            name: topic.name,
            slug: topic.slug,
            description: topic.description,
            question_count: topic.question_count,
            follower_count: topic.follower_count,
            moderators: topic.moderators.into_iter().map(Uuid::from).collect(),
            created_by: topic.created_by.into(),
            created_at: topic.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    pub topic_id: Uuid,
    pub following: bool,
    pub follower_count: i32,
}

impl From<FollowStatus> for FollowResponse {
    fn from(status: FollowStatus) -> Self {
        FollowResponse {
            topic_id: status.topic_id,
            following: status.following,
            follower_count: status.follower_count,
        }
    }
}
