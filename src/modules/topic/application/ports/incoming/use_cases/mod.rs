mod create_topic_use_case;
mod follow_topic_use_case;
mod get_topics_use_case;
mod soft_delete_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
    TOPIC_NAME_MAX, TOPIC_NAME_MIN,
};
pub use follow_topic_use_case::{
    FollowStatus, FollowTopicError, FollowTopicUseCase, UnfollowTopicUseCase,
};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use soft_delete_topic_use_case::{SoftDeleteTopicError, SoftDeleteTopicUseCase};
