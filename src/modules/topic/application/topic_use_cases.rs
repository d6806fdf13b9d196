use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, FollowTopicUseCase, GetTopicsUseCase, SoftDeleteTopicUseCase,
    UnfollowTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase>,
    pub get_list: Arc<dyn GetTopicsUseCase>,
    pub soft_delete: Arc<dyn SoftDeleteTopicUseCase>,
    pub follow: Arc<dyn FollowTopicUseCase>,
    pub unfollow: Arc<dyn UnfollowTopicUseCase>,
}
