pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// Shared response mapping for the auth handlers.
use crate::auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub(crate) fn auth_error_response(err: AuthError) -> Response {
    match err {
        AuthError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )
            .into_response(),
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": INVALID_CREDENTIALS })),
        )
            .into_response(),
        AuthError::Internal(err) => {
            error!("auth request failed: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}
