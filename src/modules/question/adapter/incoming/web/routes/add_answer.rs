use actix_web::{post, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::dto::{AddAnswerRequest, AnswerResponse};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::question::application::ports::incoming::use_cases::AnswerContent;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Answer a question
#[utoipa::path(
    post,
    path = "/api/questions/{id}/answers",
    tag = "answers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Question id")),
    request_body = AddAnswerRequest,
    responses(
        (status = 201, description = "Answer added", body = inline(SuccessResponse<AnswerResponse>)),
        (status = 400, description = "Answer too short", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    )
)]
#[post("/api/questions/{id}/answers")]
pub async fn add_answer_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddAnswerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let content = match AnswerContent::new(&req.content) {
        Ok(content) => content,
        Err(e) => return map_question_error(e),
    };
    let question_id = path.into_inner();

    match data
        .question
        .add_answer
        .execute(question_id, user.user_id, content)
        .await
    {
        Ok(answer) => {
            info!(question_id = %question_id, answer_id = %answer.id, "Answer added");
            ApiResponse::created(AnswerResponse::from_answer(answer, Some(user.user_id)))
        }
        Err(e) => map_question_error(e),
    }
}
