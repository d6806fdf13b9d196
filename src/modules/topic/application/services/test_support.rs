use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, FollowChange, TopicQuery, TopicQueryError, TopicRepository,
    TopicRepositoryError,
};

mock! {
    pub TopicRepo {}
    #[async_trait]
    impl TopicRepository for TopicRepo {
        async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;
        async fn soft_delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;
        async fn follow(&self, user: UserId, topic_id: TopicId)
            -> Result<FollowChange, TopicRepositoryError>;
        async fn unfollow(&self, user: UserId, topic_id: TopicId)
            -> Result<FollowChange, TopicRepositoryError>;
    }
}

mock! {
    pub TopicQueryPort {}
    #[async_trait]
    impl TopicQuery for TopicQueryPort {
        async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;
        async fn find_active(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError>;
    }
}
