use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::SoftDeleteTopicError;
use crate::AppState;

/// Soft delete a topic
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not the creator or an admin", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[delete("/api/topics/{id}")]
pub async fn soft_delete_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .topic
        .soft_delete
        .execute(user.user_id, user.role, topic_id)
        .await
    {
        Ok(()) => {
            info!(%topic_id, actor = %user.user_id, "Topic deactivated");
            ApiResponse::no_content()
        }
        Err(err) => map_soft_delete_error(err),
    }
}

fn map_soft_delete_error(err: SoftDeleteTopicError) -> HttpResponse {
    match err {
        SoftDeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        SoftDeleteTopicError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only the topic creator or an admin can delete this topic",
        ),
        SoftDeleteTopicError::DatabaseError(e) => {
            error!(error = %e, "Database error deleting topic");
            ApiResponse::internal_error()
        }
    }
}
