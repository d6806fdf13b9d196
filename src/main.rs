mod api;
mod config;
mod health;
mod modules;
mod shared;

pub use modules::auth;
pub use modules::question;
pub use modules::topic;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase, RegisterUserUseCase,
    SoftDeleteUserUseCase,
};
use crate::config::AppConfig;
use crate::question::adapter::outgoing::{QuestionQueryPostgres, QuestionRepositoryPostgres};
use crate::question::application::question_use_cases::QuestionUseCases;
use crate::question::application::services::{
    AcceptAnswerService, AddAnswerService, CreateQuestionService, DeleteQuestionService,
    GetQuestionService, GetQuestionsService, QuestionCounters, UpdateQuestionService,
    VoteAnswerService, VoteQuestionService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, FollowTopicService, GetTopicsService, SoftDeleteTopicService,
    UnfollowTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub topic: TopicUseCases,
    pub question: QuestionUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{env}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    info!(environment = %config.environment, "Starting Q&A forum backend");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let jwt_service =
        JwtTokenService::new(JwtConfig::from_env().context("Invalid JWT configuration")?);
    let password_hasher =
        Arc::new(Argon2Hasher::from_env().context("Invalid password hashing configuration")?);

    // Accounts
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            password_hasher,
            Arc::new(jwt_service.clone()),
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(
            user_query.clone(),
            Arc::new(jwt_service.clone()),
        )),
        fetch_profile: Arc::new(FetchProfileUseCase::new(user_query)),
        soft_delete: Arc::new(SoftDeleteUserUseCase::new(user_repo.clone())),
    };

    // Topics
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));

    let topic = TopicUseCases {
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        soft_delete: Arc::new(SoftDeleteTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        follow: Arc::new(FollowTopicService::new(topic_repo.clone())),
        unfollow: Arc::new(UnfollowTopicService::new(topic_repo.clone())),
    };

    // Questions
    let question_repo = QuestionRepositoryPostgres::new(Arc::clone(&db_arc));
    let question_query = QuestionQueryPostgres::new(Arc::clone(&db_arc));
    let counters = QuestionCounters::new(Arc::new(topic_repo), Arc::new(user_repo));

    let question = QuestionUseCases {
        create: Arc::new(CreateQuestionService::new(
            question_repo.clone(),
            topic_query,
            counters.clone(),
        )),
        get_list: Arc::new(GetQuestionsService::new(question_query)),
        get_single: Arc::new(GetQuestionService::new(question_repo.clone())),
        update: Arc::new(UpdateQuestionService::new(question_repo.clone())),
        delete: Arc::new(DeleteQuestionService::new(question_repo.clone(), counters)),
        vote: Arc::new(VoteQuestionService::new(question_repo.clone())),
        add_answer: Arc::new(AddAnswerService::new(question_repo.clone())),
        vote_answer: Arc::new(VoteAnswerService::new(question_repo.clone())),
        accept_answer: Arc::new(AcceptAnswerService::new(question_repo)),
    };

    let state = AppState {
        auth,
        topic,
        question,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    let (host, port) = config.bind_address();
    info!(%host, port, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::soft_delete_user_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::soft_delete_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::follow_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::unfollow_topic_handler);
    // Questions
    cfg.service(crate::question::adapter::incoming::web::routes::list_questions_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::create_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::get_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::update_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::delete_question_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::vote_question_handler);
    // Answers
    cfg.service(crate::question::adapter::incoming::web::routes::add_answer_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::vote_answer_handler);
    cfg.service(crate::question::adapter::incoming::web::routes::accept_answer_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
