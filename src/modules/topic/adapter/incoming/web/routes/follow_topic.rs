use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::FollowResponse;
use crate::topic::application::ports::incoming::use_cases::{FollowStatus, FollowTopicError};
use crate::AppState;

/// Follow a topic
#[utoipa::path(
    post,
    path = "/api/topics/{id}/follow",
    tag = "topics",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic followed", body = inline(SuccessResponse<FollowResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[post("/api/topics/{id}/follow")]
pub async fn follow_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.topic.follow.execute(user.user_id, path.into_inner()).await)
}

/// Unfollow a topic
#[utoipa::path(
    delete,
    path = "/api/topics/{id}/follow",
    tag = "topics",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic unfollowed", body = inline(SuccessResponse<FollowResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[delete("/api/topics/{id}/follow")]
pub async fn unfollow_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.topic.unfollow.execute(user.user_id, path.into_inner()).await)
}

fn respond(result: Result<FollowStatus, FollowTopicError>) -> HttpResponse {
    match result {
        Ok(status) => ApiResponse::success(FollowResponse::from(status)),
        Err(FollowTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(FollowTopicError::DatabaseError(e)) => {
            error!(error = %e, "Database error updating topic follow");
            ApiResponse::internal_error()
        }
    }
}
