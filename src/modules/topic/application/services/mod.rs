pub mod create_topic_service;
pub mod follow_topic_service;
pub mod get_topics_service;
pub mod soft_delete_topic_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_topic_service::CreateTopicService;
pub use follow_topic_service::{FollowTopicService, UnfollowTopicService};
pub use get_topics_service::GetTopicsService;
pub use soft_delete_topic_service::SoftDeleteTopicService;
