use crate::api::handlers::types::{ApiResponse, DashboardResponse};
use crate::auth::gate;
use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path= "/dashboard",
    responses (
        (status = 200, description = "Dashboard data for the token's user", body = DashboardResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ApiResponse),
    ),
    tag = "kasbuku",
)]
#[instrument(skip(headers))]
pub async fn dashboard(headers: HeaderMap) -> impl IntoResponse {
    // Uniform rejection: the caller cannot tell which check failed.
    let Some(user_id) = gate::authorize(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::failure("invalid token")),
        )
            .into_response();
    };

    debug!("Dashboard access for user {user_id}");

    (
        StatusCode::OK,
        Json(DashboardResponse {
            success: true,
            message: "dashboard data retrieved".to_string(),
            user_id,
        }),
    )
        .into_response()
}
