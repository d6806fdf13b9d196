use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::de::DeserializeOwned;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::domain::Question;

/// One row per question aggregate. Nested collections are JSONB; `score`,
/// `answer_count`, `views` and `last_activity` are copies kept for listing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub topic_ids: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub attachments: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub answers: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub votes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub view_log: Json,
    pub views: i64,
    pub score: i64,
    pub answer_count: i64,
    pub is_active: bool,
    pub version: i64,
    pub last_activity: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AuthorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}

fn from_json<T: DeserializeOwned>(value: Json) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

impl TryFrom<Model> for Question {
    type Error = serde_json::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Question {
            id: model.id,
            title: model.title,
            description: model.description,
            author: UserId::from(model.author_id),
            topic_ids: from_json(model.topic_ids)?,
            tags: from_json(model.tags)?,
            attachments: from_json(model.attachments)?,
            answers: from_json(model.answers)?,
            votes: from_json(model.votes)?,
            views: u64::try_from(model.views).unwrap_or_default(),
            view_log: from_json(model.view_log)?,
            is_active: model.is_active,
            last_activity: model.last_activity.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            version: model.version,
        })
    }
}

/// Every column of the aggregate, with `version` left as loaded.
pub fn to_active_model(question: &Question) -> Result<ActiveModel, serde_json::Error> {
    Ok(ActiveModel {
        id: Set(question.id),
        author_id: Set(question.author.value()),
        title: Set(question.title.clone()),
        description: Set(question.description.clone()),
        topic_ids: Set(serde_json::to_value(&question.topic_ids)?),
        tags: Set(serde_json::to_value(&question.tags)?),
        attachments: Set(serde_json::to_value(&question.attachments)?),
        answers: Set(serde_json::to_value(&question.answers)?),
        votes: Set(serde_json::to_value(&question.votes)?),
        view_log: Set(serde_json::to_value(&question.view_log)?),
        views: Set(i64::try_from(question.views).unwrap_or(i64::MAX)),
        score: Set(question.score()),
        answer_count: Set(question.answer_count() as i64),
        is_active: Set(question.is_active),
        version: Set(question.version),
        last_activity: Set(question.last_activity.into()),
        created_at: Set(question.created_at.into()),
        updated_at: Set(question.updated_at.into()),
    })
}
