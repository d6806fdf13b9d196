use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::Topic;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub question_count: i32,
    pub follower_count: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub moderators: Json,
    pub created_by: Uuid,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedBy",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::topic_follows::Entity")]
    Follows,
}

impl Related<super::topic_follows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Follows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Topic {
    type Error = serde_json::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let moderators: Vec<UserId> = serde_json::from_value(model.moderators)?;

        Ok(Topic {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            question_count: model.question_count,
            follower_count: model.follower_count,
            moderators,
            created_by: UserId::from(model.created_by),
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
