mod create_topic;
mod follow_topic;
mod get_topics;
mod soft_delete_topic;

pub use create_topic::*;
pub use follow_topic::*;
pub use get_topics::*;
pub use soft_delete_topic::*;
