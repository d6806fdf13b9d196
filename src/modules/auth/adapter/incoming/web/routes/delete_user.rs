use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::SoftDeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deactivate the current account
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/api/users/me")]
pub async fn soft_delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.soft_delete.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SoftDeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SoftDeleteUserError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Database error soft deleting user");
            ApiResponse::internal_error()
        }
    }
}
