use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    pub access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = req.into_inner().refresh_token;
    if token.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "refresh_token is required");
    }

    match data.auth.refresh.execute(token.trim()).await {
        Ok(response) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: response.access_token,
        }),
        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        Err(RefreshTokenError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }
        Err(e) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
