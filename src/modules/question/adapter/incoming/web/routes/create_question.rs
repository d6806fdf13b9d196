use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::question::adapter::incoming::web::dto::{
    AnswerSort, CreateQuestionRequest, QuestionResponse,
};
use crate::question::adapter::incoming::web::errors::map_question_error;
use crate::question::application::ports::incoming::use_cases::CreateQuestionCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ask a question
#[utoipa::path(
    post,
    path = "/api/questions",
    tag = "questions",
    security(("bearer_auth" = [])),
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = inline(SuccessResponse<QuestionResponse>)),
        (status = 400, description = "Invalid input or unknown topic", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/questions")]
pub async fn create_question_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateQuestionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateQuestionCommand::new(
        dto.title,
        dto.description,
        dto.topic_ids,
        dto.tags,
        dto.attachments.into_iter().map(Into::into).collect(),
    ) {
        Ok(command) => command,
        Err(e) => return map_question_error(e),
    };

    match data.question.create.execute(user.user_id, command).await {
        Ok(question) => {
            info!(question_id = %question.id, author = %user.user_id, "Question created");
            ApiResponse::created(QuestionResponse::from_question(
                question,
                Some(user.user_id),
                AnswerSort::Oldest,
            ))
        }
        Err(e) => map_question_error(e),
    }
}
