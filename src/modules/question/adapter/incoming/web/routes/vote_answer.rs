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

/// Vote on an answer
#[utoipa::path(
    post,
    path = "/api/questions/{id}/answers/{answer_id}/vote",
    tag = "answers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Question id"),
        ("answer_id" = Uuid, Path, description = "Answer id"),
    ),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote applied", body = inline(SuccessResponse<VoteResponse>)),
        (status = 400, description = "Invalid vote type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Own answer", body = ErrorResponse),
        (status = 404, description = "Question or answer not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
    )
)]
#[post("/api/questions/{id}/answers/{answer_id}/vote")]
pub async fn vote_answer_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vote = match req.vote_type.parse::<VoteType>() {
        Ok(vote) => vote,
        Err(e) => return map_question_error(QuestionCommandError::from(e)),
    };
    let (question_id, answer_id) = path.into_inner();

    match data
        .question
        .vote_answer
        .execute(question_id, answer_id, user.user_id, vote)
        .await
    {
        Ok(outcome) => ApiResponse::success(VoteResponse::from(outcome)),
        Err(e) => map_question_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::question::application::domain::{AnswerId, QuestionId, VoteDirection, VoteOutcome};
    use crate::question::application::ports::incoming::use_cases::VoteAnswerUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockVoteAnswer {
        result: Result<VoteOutcome, QuestionCommandError>,
    }

    #[async_trait]
    impl VoteAnswerUseCase for MockVoteAnswer {
        async fn execute(
            &self,
            _id: QuestionId,
            _answer_id: AnswerId,
            _voter: UserId,
            _vote: VoteType,
        ) -> Result<VoteOutcome, QuestionCommandError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockVoteAnswer) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_vote_answer(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(vote_answer_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!(
                "/api/questions/{}/answers/{}/vote",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .insert_header(bearer(Uuid::new_v4(), Role::User))
            .set_json(json!({ "vote_type": "downvote" }))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_vote_answer_success() {
        let resp = call(MockVoteAnswer {
            result: Ok(VoteOutcome {
                score: -1,
                user_vote: Some(VoteDirection::Downvote),
            }),
        })
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["score"], -1);
        assert_eq!(body["data"]["user_vote"], "downvote");
    }

    #[actix_web::test]
    async fn test_vote_answer_unknown_answer() {
        let resp = call(MockVoteAnswer {
            result: Err(QuestionCommandError::AnswerNotFound),
        })
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ANSWER_NOT_FOUND");
    }
}
