use crate::api::handlers::types::{ApiResponse, Credentials, LoginResponse};
use crate::auth::{AuthError, AuthService};
use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, Json,
};
use std::sync::Arc;
use tracing::instrument;

#[utoipa::path(
    post,
    path= "/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login succeeded, token issued", body = LoginResponse),
        (status = 400, description = "Missing fields", body = ApiResponse),
        (status = 401, description = "Invalid credentials", body = ApiResponse),
    ),
    tag = "kasbuku",
)]
#[instrument(skip(service, payload))]
pub async fn login(
    Extension(service): Extension<Arc<AuthService>>,
    payload: Option<Json<Credentials>>,
) -> impl IntoResponse {
    let Some(Json(creds)) = payload else {
        let err = AuthError::MissingFields;
        return (err.status(), Json(ApiResponse::failure(&err.to_string()))).into_response();
    };

    match service.login(&creds.email, &creds.password).await {
        Ok(session) => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "login succeeded".to_string(),
                token: session.token,
                user: session.user,
            }),
        )
            .into_response(),
        Err(err) => (err.status(), Json(ApiResponse::failure(&err.to_string()))).into_response(),
    }
}
