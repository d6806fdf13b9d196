use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::question::application::ports::outgoing::{TopicCatalog, TopicCatalogError};
use crate::topic::application::domain::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

use super::sea_orm_entity::topics::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_topic(model: TopicModel) -> Result<Topic, TopicQueryError> {
    let id = model.id;
    Topic::try_from(model).map_err(|e| {
        TopicQueryError::DatabaseError(format!("Malformed topic row {id}: {e}"))
    })
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::IsActive.eq(true))
            .order_by_asc(TopicColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(to_topic).collect()
    }

    async fn find_active(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        TopicEntity::find_by_id(topic_id)
            .filter(TopicColumn::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
            .map(to_topic)
            .transpose()
    }
}

#[async_trait]
impl TopicCatalog for TopicQueryPostgres {
    async fn active_topic_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, TopicCatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::Id.is_in(ids.iter().copied()))
            .filter(TopicColumn::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(|e| TopicCatalogError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.id).collect())
    }
}
