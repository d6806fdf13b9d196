use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::dto::{VoteRequest, VoteResponse};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::question::application::domain::VoteType;
use crate::question::application::ports::incoming::use_cases::QuestionCommandError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Vote on a question
///
/// Repeating the same vote is a no-op; `remove` withdraws any vote.
#[utoipa::path(
    post,
    path = "/api/questions/{id}/vote",
    tag = "questions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Question id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote applied", body = inline(SuccessResponse<VoteResponse>)),
        (status = 400, description = "Invalid vote type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Own question", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    )
)]
#[post("/api/questions/{id}/vote")]
pub async fn vote_question_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vote = match req.vote_type.parse::<VoteType>() {
        Ok(vote) => vote,
        Err(e) => return map_question_error(QuestionCommandError::from(e)),
    };

    match data
        .question
        .vote
        .execute(path.into_inner(), user.user_id, vote)
        .await
    {
        Ok(outcome) => ApiResponse::success(VoteResponse::from(outcome)),
        Err(e) => map_question_error(e),
    }
}
