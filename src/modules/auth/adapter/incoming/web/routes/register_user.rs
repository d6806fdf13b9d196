use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::use_cases::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3-30 characters: letters, digits, underscore
    #[schema(example = "ferris_the_crab")]
    pub username: String,

    #[schema(example = "ferris@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        RegisterUserError::EmailTaken => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }
        other => {
            error!(error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisteredUser>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Username or email taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = match RegisterUserInput::new(dto.username, dto.email, dto.password) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.auth.register.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, "Registration completed");
            ApiResponse::created(RegisteredUser::from(user))
        }
        Err(e) => map_register_error(e),
    }
}
