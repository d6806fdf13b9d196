use actix_web::{patch, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::dto::{AcceptAnswerRequest, AnswerResponse};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Mark or unmark an answer as accepted
#[utoipa::path(
    patch,
    path = "/api/questions/{id}/answers/{answer_id}/accept",
    tag = "answers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Question id"),
        ("answer_id" = Uuid, Path, description = "Answer id"),
    ),
    request_body = AcceptAnswerRequest,
    responses(
        (status = 200, description = "Flag updated", body = inline(SuccessResponse<AnswerResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not the question author or an admin", body = ErrorResponse),
        (status = 404, description = "Question or answer not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    )
)]
#[patch("/api/questions/{id}/answers/{answer_id}/accept")]
pub async fn accept_answer_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<AcceptAnswerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (question_id, answer_id) = path.into_inner();

    match data
        .question
        .accept_answer
        .execute(question_id, answer_id, user.user_id, user.role, req.accepted)
        .await
    {
        Ok(answer) => {
            info!(
                question_id = %question_id,
                answer_id = %answer_id,
                accepted = answer.is_accepted,
                "Answer acceptance changed"
            );
            ApiResponse::success(AnswerResponse::from_answer(answer, Some(user.user_id)))
        }
        Err(e) => map_question_error(e),
    }
}
