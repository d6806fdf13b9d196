//! OpenAPI mirrors of the `ApiResponse` envelope in `shared::api`.
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around every 2xx body.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope around every 4xx and 5xx body.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable UPPER_SNAKE code, e.g. `QUESTION_NOT_FOUND`, `VALIDATION_ERROR`,
    /// `CONCURRENT_MODIFICATION`.
    #[schema(example = "QUESTION_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Question not found")]
    pub message: String,
}
