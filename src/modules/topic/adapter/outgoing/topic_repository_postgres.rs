use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::ports::outgoing::counters::{
    CounterError, TopicQuestionCounter,
};
use crate::shared::db::is_unique_violation;
use crate::topic::application::domain::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, FollowChange, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::topic_follows::{
    ActiveModel as FollowActiveModel, Column as FollowColumn, Entity as FollowEntity,
};
use super::sea_orm_entity::topics::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
    Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}

async fn find_topic<C: ConnectionTrait>(
    conn: &C,
    topic_id: TopicId,
    active_only: bool,
) -> Result<TopicModel, TopicRepositoryError> {
    let mut select = TopicEntity::find_by_id(topic_id);
    if active_only {
        select = select.filter(TopicColumn::IsActive.eq(true));
    }

    select
        .one(conn)
        .await
        .map_err(db_error)?
        .ok_or(TopicRepositoryError::TopicNotFound)
}

fn follower_count_shift(topic_id: TopicId, delta: i32) -> UpdateMany<TopicEntity> {
    TopicEntity::update_many()
        .col_expr(
            TopicColumn::FollowerCount,
            Expr::cust_with_values("GREATEST(follower_count + $1, 0)", [delta]),
        )
        .filter(TopicColumn::Id.eq(topic_id))
}

fn question_count_shift(topic_ids: &[Uuid], delta: i32) -> UpdateMany<TopicEntity> {
    TopicEntity::update_many()
        .col_expr(
            TopicColumn::QuestionCount,
            Expr::cust_with_values("GREATEST(question_count + $1, 0)", [delta]),
        )
        .filter(TopicColumn::Id.is_in(topic_ids.iter().copied()))
}

async fn shift_follower_count<C: ConnectionTrait>(
    conn: &C,
    topic_id: TopicId,
    delta: i32,
) -> Result<(), TopicRepositoryError> {
    follower_count_shift(topic_id, delta)
        .exec(conn)
        .await
        .map_err(db_error)?;

    Ok(())
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let moderators = serde_json::json!([data.created_by]);

        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            question_count: Set(0),
            follower_count: Set(0),
            moderators: Set(moderators),
            created_by: Set(data.created_by.value()),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return TopicRepositoryError::TopicAlreadyExists;
            }
            db_error(e)
        })?;

        Topic::try_from(inserted).map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
    }

    async fn soft_delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::update_many()
            .col_expr(TopicColumn::IsActive, Expr::value(false))
            .col_expr(TopicColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(TopicColumn::Id.eq(topic_id))
            .filter(TopicColumn::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }

    async fn follow(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowChange, TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let topic = find_topic(&txn, topic_id, true).await?;

        let follow = FollowActiveModel {
            user_id: Set(user.value()),
            topic_id: Set(topic_id),
            created_at: NotSet,
        };
        let inserted = FollowEntity::insert(follow)
            .on_conflict(
                OnConflict::columns([FollowColumn::UserId, FollowColumn::TopicId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;

        let changed = inserted > 0;
        if changed {
            shift_follower_count(&txn, topic_id, 1).await?;
        }

        txn.commit().await.map_err(db_error)?;

        Ok(FollowChange {
            changed,
            follower_count: if changed {
                topic.follower_count.saturating_add(1)
            } else {
                topic.follower_count
            },
        })
    }

    // Deactivated topics can still be unfollowed.
    async fn unfollow(
        &self,
        user: UserId,
        topic_id: TopicId,
    ) -> Result<FollowChange, TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let topic = find_topic(&txn, topic_id, false).await?;

        let deleted = FollowEntity::delete_many()
            .filter(FollowColumn::UserId.eq(user.value()))
            .filter(FollowColumn::TopicId.eq(topic_id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let changed = deleted.rows_affected > 0;
        if changed {
            shift_follower_count(&txn, topic_id, -1).await?;
        }

        txn.commit().await.map_err(db_error)?;

        Ok(FollowChange {
            changed,
            follower_count: if changed {
                (topic.follower_count - 1).max(0)
            } else {
                topic.follower_count
            },
        })
    }
}

#[async_trait]
impl TopicQuestionCounter for TopicRepositoryPostgres {
    async fn adjust_question_count(&self, topic_ids: &[Uuid], delta: i32) -> Result<(), CounterError> {
        if topic_ids.is_empty() {
            return Ok(());
        }

        question_count_shift(topic_ids, delta)
            .exec(&*self.db)
            .await
            .map_err(|e| CounterError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
