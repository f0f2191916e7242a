use crate::auth::{AuthService, PublicUser};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;
use utoipa::OpenApi;

pub mod handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::root,
        handlers::health::health,
        handlers::register::register,
        handlers::login::login,
        handlers::dashboard::dashboard,
    ),
    components(schemas(
        handlers::types::ApiResponse,
        handlers::types::Credentials,
        handlers::types::LoginResponse,
        handlers::types::DashboardResponse,
        handlers::health::Health,
        PublicUser,
    )),
    tags(
        (name = "kasbuku", description = "Authentication backend API"),
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router over a shared auth service.
///
/// Kept separate from [`new`] so tests can drive the router in-process
/// without binding a socket.
pub fn router(service: Arc<AuthService>) -> Router {
    let cors = CorsLayer::new()
        // allow `GET` and `POST` when accessing the resource
        .allow_methods([Method::GET, Method::POST])
        // allow requests from any origin
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/dashboard", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(service)),
        )
}

/// Bind and serve the API.
/// # Errors
/// Returns an error if the store cannot be initialized or the server
/// fails to start.
pub async fn new(port: u16, service: Arc<AuthService>) -> Result<()> {
    service
        .store()
        .ensure_initialized()
        .await
        .context("Failed to initialize user store")?;

    let app = router(service);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}
