use crate::api::handlers::types::{ApiResponse, Credentials};
use crate::auth::{AuthError, AuthService};
use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, Json,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/register",
    request_body = Credentials,
    responses (
        (status = 200, description = "Registration succeeded", body = ApiResponse),
        (status = 400, description = "Missing fields, short password or email already registered", body = ApiResponse),
        (status = 500, description = "User store write failed", body = ApiResponse),
    ),
    tag = "kasbuku",
)]
#[instrument(skip(service, payload))]
pub async fn register(
    Extension(service): Extension<Arc<AuthService>>,
    payload: Option<Json<Credentials>>,
) -> impl IntoResponse {
    let Some(Json(creds)) = payload else {
        let err = AuthError::MissingFields;
        return (err.status(), Json(ApiResponse::failure(&err.to_string())));
    };

    debug!("Registration attempt for {}", creds.email);

    match service.register(&creds.email, &creds.password).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::ok("registration succeeded")),
        ),
        Err(err) => (err.status(), Json(ApiResponse::failure(&err.to_string()))),
    }
}
