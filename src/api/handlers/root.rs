use axum::{http::StatusCode, response::IntoResponse};
use tracing::instrument;

#[utoipa::path(
    get,
    path= "/",
    responses (
        (status = 200, description = "Liveness string", body = String),
    ),
    tag = "kasbuku",
)]
// plain text liveness probe
#[instrument]
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Kasbuku authentication backend up")
}
