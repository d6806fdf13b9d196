use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::question::application::ports::outgoing::{
    QuestionFilter, QuestionQuery, QuestionQueryError, QuestionSort, QuestionSummary,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::questions::{Column, Entity, Model};

#[derive(Clone)]
pub struct QuestionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl QuestionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> QuestionQueryError {
    QuestionQueryError::DatabaseError(err.to_string())
}

// LIKE wildcards in user input are matched literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn apply_filter(mut query: Select<Entity>, filter: QuestionFilter) -> Select<Entity> {
    query = query.filter(Column::IsActive.eq(true));

    if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
        let pattern = like_pattern(&search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Description).ilike(&pattern)),
        );
    }

    // JSONB containment, served by the GIN indexes.
    if let Some(topic_id) = filter.topic_id {
        let needle = serde_json::json!([topic_id]).to_string();
        query = query.filter(Expr::cust_with_values("topic_ids @> $1::jsonb", [needle]));
    }

    if let Some(tag) = filter.tag.filter(|t| !t.trim().is_empty()) {
        let needle = serde_json::json!([tag.trim().to_lowercase()]).to_string();
        query = query.filter(Expr::cust_with_values("tags @> $1::jsonb", [needle]));
    }

    if let Some(author) = filter.author_id {
        query = query.filter(Column::AuthorId.eq(author.value()));
    }

    query
}

fn apply_sort(query: Select<Entity>, sort: QuestionSort) -> Select<Entity> {
    let query = match sort {
        QuestionSort::Newest => query.order_by_desc(Column::CreatedAt),
        QuestionSort::Oldest => query.order_by_asc(Column::CreatedAt),
        QuestionSort::MostVoted => query.order_by_desc(Column::Score),
        QuestionSort::MostViewed => query.order_by_desc(Column::Views),
        QuestionSort::MostAnswered => query.order_by_desc(Column::AnswerCount),
        QuestionSort::RecentActivity => query.order_by_desc(Column::LastActivity),
    };
    // Stable paging when the primary key ties.
    query.order_by_desc(Column::CreatedAt).order_by_asc(Column::Id)
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, QuestionQueryError> {
    serde_json::from_value(value).map_err(|e| QuestionQueryError::DatabaseError(e.to_string()))
}

fn model_to_summary(model: Model) -> Result<QuestionSummary, QuestionQueryError> {
    Ok(QuestionSummary {
        id: model.id,
        title: model.title,
        author_id: UserId::from(model.author_id),
        topic_ids: from_json(model.topic_ids)?,
        tags: from_json(model.tags)?,
        score: model.score,
        answer_count: model.answer_count,
        views: model.views,
        last_activity: model.last_activity.into(),
        created_at: model.created_at.into(),
    })
}

#[async_trait]
impl QuestionQuery for QuestionQueryPostgres {
    async fn list(
        &self,
        filter: QuestionFilter,
        sort: QuestionSort,
        page: PageRequest,
    ) -> Result<PageResult<QuestionSummary>, QuestionQueryError> {
        let query = apply_filter(Entity::find(), filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = apply_sort(query, sort)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(model_to_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, &page, total))
    }
}
