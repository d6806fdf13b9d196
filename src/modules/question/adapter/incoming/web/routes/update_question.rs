use actix_web::{patch, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::dto::{
    AnswerSort, QuestionResponse, UpdateQuestionRequest,
};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::question::application::ports::incoming::use_cases::UpdateQuestionCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit a question
#[utoipa::path(
    patch,
    path = "/api/questions/{id}",
    tag = "questions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Question id")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = inline(SuccessResponse<QuestionResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not the author or an admin", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    )
)]
#[patch("/api/questions/{id}")]
pub async fn update_question_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateQuestionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = match UpdateQuestionCommand::new(dto.title, dto.description, dto.tags) {
        Ok(command) => command,
        Err(e) => return map_question_error(e),
    };

    match data
        .question
        .update
        .execute(path.into_inner(), user.user_id, user.role, command)
        .await
    {
        Ok(question) => ApiResponse::success(QuestionResponse::from_question(
            question,
            Some(user.user_id),
            AnswerSort::Oldest,
        )),
        Err(e) => map_question_error(e),
    }
}
