use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::question::application::domain::{Question, QuestionId};
use crate::question::application::ports::outgoing::{QuestionRepository, QuestionRepositoryError};

use super::sea_orm_entity::questions::{to_active_model, Column, Entity};

#[derive(Clone, Debug)]
pub struct QuestionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl QuestionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> QuestionRepositoryError {
    QuestionRepositoryError::DatabaseError(err.to_string())
}

fn map_json_err(err: serde_json::Error) -> QuestionRepositoryError {
    QuestionRepositoryError::SerializationError(err.to_string())
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryPostgres {
    async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError> {
        let model = to_active_model(&question)
            .map_err(map_json_err)?
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Question::try_from(model).map_err(map_json_err)
    }

    async fn load(&self, id: QuestionId) -> Result<Question, QuestionRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(QuestionRepositoryError::NotFound)?;

        Question::try_from(model).map_err(map_json_err)
    }

    async fn save(&self, question: Question) -> Result<Question, QuestionRepositoryError> {
        let loaded_version = question.version;
        let next_version = loaded_version + 1;

        let mut row = to_active_model(&question).map_err(map_json_err)?;
        row.id = NotSet;
        row.created_at = NotSet;
        row.version = Set(next_version);

        let result = Entity::update_many()
            .set(row)
            .filter(Column::Id.eq(question.id))
            .filter(Column::Version.eq(loaded_version))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Either another writer bumped the version or the row vanished;
        // the caller's next load tells the two apart.
        if result.rows_affected == 0 {
            return Err(QuestionRepositoryError::Conflict);
        }

        Ok(Question {
            version: next_version,
            ..question
        })
    }
}
