use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ferris@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Short-lived access token
    access_token: String,
    /// Long-lived refresh token
    refresh_token: String,
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    username: String,
    email: String,
    #[schema(example = "user")]
    role: String,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");
            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                    role: response.user.role.to_string(),
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountDisabled) => {
            warn!("Login failed: account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::use_cases::login_user::{
        ILoginUserUseCase, LoginUserResponse, UserInfo,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    struct MockLogin {
        result: Result<LoginUserResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLogin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            self.result.clone()
        }
    }

    fn login_response() -> LoginUserResponse {
        LoginUserResponse {
            access_token: "access.token.value".to_string(),
            refresh_token: "refresh.token.value".to_string(),
            user: UserInfo {
                id: Uuid::new_v4(),
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                role: Role::Admin,
            },
        }
    }

    async fn call(uc: MockLogin, body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_login_user(uc).build();
        let app =
            test::init_service(App::new().app_data(state).service(login_user_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    fn credentials() -> serde_json::Value {
        json!({ "email": "test@example.com", "password": "password123" })
    }

    #[actix_web::test]
    async fn test_login_success() {
        let resp = call(
            MockLogin {
                result: Ok(login_response()),
            },
            credentials(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["access_token"], "access.token.value");
        assert_eq!(body["data"]["user"]["role"], "admin");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let resp = call(
            MockLogin {
                result: Err(LoginError::InvalidCredentials),
            },
            credentials(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_disabled_account() {
        let resp = call(
            MockLogin {
                result: Err(LoginError::AccountDisabled),
            },
            credentials(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_DISABLED");
    }

    #[actix_web::test]
    async fn test_login_invalid_email_format() {
        let resp = call(
            MockLogin {
                result: Ok(login_response()),
            },
            json!({ "email": "nope", "password": "password123" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_query_error() {
        let resp = call(
            MockLogin {
                result: Err(LoginError::QueryError("db".to_string())),
            },
            credentials(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
