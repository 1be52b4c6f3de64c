//! `POST /api/login`

use crate::{
    api::{
        handlers::auth_error_response,
        types::{AuthBody, UserBody},
    },
    auth::{validate::LoginRequest, AuthService},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn login(
    auth: Extension<Arc<AuthService>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let request: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response()
        }
    };

    debug!("login request: {:?}", request);

    match auth.login(request).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(AuthBody {
                status: true,
                user: UserBody::from(&session.user),
                message: "User logged in successfully".to_string(),
                token: session.token,
            }),
        )
            .into_response(),
        Err(err) => auth_error_response(err),
    }
}
