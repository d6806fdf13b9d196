use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::question::adapter::incoming::web::dto::{
    AnswerSort, GetQuestionQuery, QuestionResponse,
};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one question with its answers
///
/// Authenticated callers are counted as viewers (once per 24 hours) and see
/// their own votes in `user_vote`.
#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    tag = "questions",
    params(("id" = Uuid, Path, description = "Question id"), GetQuestionQuery),
    responses(
        (status = 200, description = "Question found", body = inline(SuccessResponse<QuestionResponse>)),
        (status = 400, description = "Invalid answer_sort", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/questions/{id}")]
pub async fn get_question_handler(
    user: OptionalUser,
    path: web::Path<Uuid>,
    query: web::Query<GetQuestionQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sort = match query.answer_sort.as_deref().map(str::parse::<AnswerSort>) {
        None => AnswerSort::default(),
        Some(Ok(sort)) => sort,
        Some(Err(msg)) => return ApiResponse::bad_request("INVALID_QUERY", &msg),
    };

    let viewer = user.0.map(|u| u.user_id);

    match data
        .question
        .get_single
        .execute(path.into_inner(), viewer)
        .await
    {
        Ok(question) => {
            ApiResponse::success(QuestionResponse::from_question(question, viewer, sort))
        }
        Err(e) => map_question_error(e),
    }
}
