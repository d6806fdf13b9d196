use actix_web::HttpResponse;
use tracing::error;

use crate::question::application::ports::incoming::use_cases::QuestionCommandError;
use crate::shared::api::ApiResponse;

pub fn map_question_error(err: QuestionCommandError) -> HttpResponse {
    match err {
        QuestionCommandError::NotFound => {
            ApiResponse::not_found("QUESTION_NOT_FOUND", "Question not found")
        }
        QuestionCommandError::AnswerNotFound => {
            ApiResponse::not_found("ANSWER_NOT_FOUND", "Answer not found")
        }
        QuestionCommandError::InvalidInput(msg) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        QuestionCommandError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        QuestionCommandError::SelfVote => ApiResponse::forbidden(
            "SELF_VOTE",
            "You cannot vote on your own content",
        ),
        QuestionCommandError::Conflict => ApiResponse::conflict(
            "CONCURRENT_MODIFICATION",
            "The question was modified concurrently, please retry",
        ),
        QuestionCommandError::RepositoryError(msg) => {
            error!(error = %msg, "Question repository failure");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (QuestionCommandError::NotFound, StatusCode::NOT_FOUND),
            (QuestionCommandError::AnswerNotFound, StatusCode::NOT_FOUND),
            (
                QuestionCommandError::InvalidInput("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                QuestionCommandError::Forbidden("no".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (QuestionCommandError::SelfVote, StatusCode::FORBIDDEN),
            (QuestionCommandError::Conflict, StatusCode::CONFLICT),
            (
                QuestionCommandError::RepositoryError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(map_question_error(err).status(), status);
        }
    }

    #[actix_web::test]
    async fn self_vote_has_its_own_code() {
        let resp = map_question_error(QuestionCommandError::SelfVote);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"]["code"], "SELF_VOTE");
    }

    #[actix_web::test]
    async fn other_permission_failures_stay_generic() {
        let resp = map_question_error(QuestionCommandError::Forbidden("no".to_string()));
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"]["code"], "FORBIDDEN");
    }
}
