use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RefreshTokenRequestDto,
    RefreshTokenResponseBody, RegisterUserRequest, RegisteredUser, UserProfileResponse,
};
use crate::question::adapter::incoming::web::dto::{
    AcceptAnswerRequest, AddAnswerRequest, AnswerResponse, AttachmentDto, CreateQuestionRequest,
    QuestionListResponse, QuestionResponse, QuestionSummaryResponse, UpdateQuestionRequest,
    VoteRequest, VoteResponse,
};
use crate::topic::adapter::incoming::web::dto::{CreateTopicRequest, FollowResponse, TopicResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Q&A Forum API",
        version = "1.0.0",
        description = "Questions, answers, votes and topics"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,

        // Users
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::soft_delete_user_handler,

        // Topics
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::soft_delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::follow_topic_handler,
        crate::topic::adapter::incoming::web::routes::unfollow_topic_handler,

        // Questions
        crate::question::adapter::incoming::web::routes::create_question_handler,
        crate::question::adapter::incoming::web::routes::list_questions_handler,
        crate::question::adapter::incoming::web::routes::get_question_handler,
        crate::question::adapter::incoming::web::routes::update_question_handler,
        crate::question::adapter::incoming::web::routes::delete_question_handler,
        crate::question::adapter::incoming::web::routes::vote_question_handler,

        // Answers
        crate::question::adapter::incoming::web::routes::add_answer_handler,
        crate::question::adapter::incoming::web::routes::vote_answer_handler,
        crate::question::adapter::incoming::web::routes::accept_answer_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            UserProfileResponse,

            CreateTopicRequest,
            TopicResponse,
            FollowResponse,

            AttachmentDto,
            CreateQuestionRequest,
            UpdateQuestionRequest,
            VoteRequest,
            VoteResponse,
            AddAnswerRequest,
            AcceptAnswerRequest,
            AnswerResponse,
            QuestionResponse,
            QuestionSummaryResponse,
            QuestionListResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "users", description = "Current account"),
        (name = "topics", description = "Topics and follows"),
        (name = "questions", description = "Questions and question votes"),
        (name = "answers", description = "Answers, answer votes and acceptance"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
