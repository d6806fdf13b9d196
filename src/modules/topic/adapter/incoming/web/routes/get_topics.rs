use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::dto::TopicResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicsError;
use crate::AppState;

/// List active topics
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "Active topics ordered by name", body = inline(SuccessResponse<Vec<TopicResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => ApiResponse::success(
            topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetTopicsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to fetch topics");
            ApiResponse::internal_error()
        }
    }
}
