//! `POST /api/register`

use crate::{
    api::{
        handlers::auth_error_response,
        types::{AuthBody, UserBody},
    },
    auth::{validate::RegisterRequest, AuthService},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn register(
    auth: Extension<Arc<AuthService>>,
    payload: Option<Json<RegisterRequest>>,
) -> impl IntoResponse {
    let request: RegisterRequest = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response()
        }
    };

    // SecretString keeps passwords out of the debug output
    debug!("register request: {:?}", request);

    match auth.register(request).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(AuthBody {
                status: true,
                user: UserBody::from(&session.user),
                message: "User registered successfully".to_string(),
                token: session.token,
            }),
        )
            .into_response(),
        Err(err) => auth_error_response(err),
    }
}
