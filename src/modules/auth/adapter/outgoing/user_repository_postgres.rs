use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::question::application::ports::outgoing::counters::{CounterError, UserQuestionCounter};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(Role::User.as_str().to_string()),
            reputation: Set(0),
            questions_asked: Set(0),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }

    async fn soft_delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(false))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}

fn questions_asked_shift(user_id: UserId, delta: i32) -> UpdateMany<UserEntity> {
    UserEntity::update_many()
        .col_expr(
            UserColumn::QuestionsAsked,
            Expr::cust_with_values("GREATEST(questions_asked + $1, 0)", [delta]),
        )
        .filter(UserColumn::Id.eq(user_id.value()))
}

#[async_trait]
impl UserQuestionCounter for UserRepositoryPostgres {
    async fn adjust_questions_asked(&self, user_id: UserId, delta: i32) -> Result<(), CounterError> {
        questions_asked_shift(user_id, delta)
            .exec(&*self.db)
            .await
            .map_err(|e| CounterError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
