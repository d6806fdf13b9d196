use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete a question
#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = "questions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Question id")),
    responses(
        (status = 204, description = "Question deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not the author or an admin", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
    )
)]
#[delete("/api/questions/{id}")]
pub async fn delete_question_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .question
        .delete
        .execute(id, user.user_id, user.role)
        .await
    {
        Ok(()) => {
            info!(question_id = %id, actor = %user.user_id, "Question deactivated");
            ApiResponse::no_content()
        }
        Err(e) => map_question_error(e),
    }
}
