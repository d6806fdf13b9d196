use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::{CreateTopicRequest, TopicResponse};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
};
use crate::AppState;

/// Create a topic
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    security(("bearer_auth" = [])),
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Invalid topic name", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Only moderators and admins", body = ErrorResponse),
        (status = 409, description = "Name or slug already taken", body = ErrorResponse),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match CreateTopicCommand::new(user.user_id, user.role, payload.name, payload.description)
        {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, slug = %topic.slug, creator = %user.user_id, "Topic created");
            ApiResponse::created(TopicResponse::from(topic))
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_TOPIC_NAME", &err.to_string())
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only moderators and admins can create topics",
        ),
        CreateTopicError::TopicAlreadyExists => {
            ApiResponse::conflict("TOPIC_ALREADY_EXISTS", "Topic already exists")
        }
        CreateTopicError::RepositoryError(e) => {
            error!(error = %e, "Database error creating topic");
            ApiResponse::internal_error()
        }
    }
}
