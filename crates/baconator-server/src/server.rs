//! HTTP transport
//!
//! Serves every [`Operation`] at `/api/v1/<operation>`. Request bodies are
//! read as raw bytes on GET and PUT alike: clients send JSON without a
//! content type, and GET requests carry their query as a body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, put, MethodRouter},
    Json, Router,
};
use baconator_core::limits::MAX_BODY_SIZE;
use baconator_core::Error;
use baconator_storage::StorageBackend;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{HandlerResponse, Operation, OperationMethod, RequestHandler, ResponseBody};

/// Prefix shared by all graph operations
pub const API_PREFIX: &str = "/api/v1";

const SERVER_NAME: &str = "baconator";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Listener and middleware settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            max_body_size: MAX_BODY_SIZE,
            cors_origins: default_cors_origins(),
        }
    }
}

/// Localhost origins allowed when nothing else is configured
pub fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Shared router state
pub struct AppState<S: StorageBackend> {
    handler: RequestHandler<S>,
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body {
            ResponseBody::Empty => status.into_response(),
            ResponseBody::Json(value) => (status, Json(value)).into_response(),
            ResponseBody::Text(text) => (status, text).into_response(),
        }
    }
}

/// Create the HTTP router
pub fn create_router<S: StorageBackend + 'static>(storage: Arc<S>, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        handler: RequestHandler::new(storage),
    });

    let mut router = Router::new().route("/health", get(health_handler::<S>));
    for op in Operation::ALL {
        let path = format!("{}/{}", API_PREFIX, op.path());
        router = router.route(&path, operation_route::<S>(op));
    }

    router
        .with_state(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(map_response(oversized_body_as_malformed))
}

/// An oversized body is a malformed payload, reported as 400 like any other
async fn oversized_body_as_malformed(response: Response) -> Response {
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return response;
    }
    let error = Error::Malformed("request body too large".to_string());
    tracing::warn!("Rejected request: {}", error);
    HandlerResponse::error(&error).into_response()
}

fn operation_route<S: StorageBackend + 'static>(op: Operation) -> MethodRouter<Arc<AppState<S>>> {
    let handler = move |State(state): State<Arc<AppState<S>>>, body: Bytes| async move {
        state.handler.handle(op, &body).await
    };

    match op.method() {
        OperationMethod::Get => get(handler),
        OperationMethod::Put => put(handler),
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint
async fn health_handler<S: StorageBackend + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    match state.handler.storage().stats().await {
        Ok(stats) => Json(serde_json::json!({
            "status": "ok",
            "server": SERVER_NAME,
            "version": SERVER_VERSION,
            "actors": stats.actors,
            "movies": stats.movies,
            "relationships": stats.relationships,
        }))
        .into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    }
}

/// Run the HTTP server until Ctrl+C
pub async fn run_server<S: StorageBackend + 'static>(
    storage: Arc<S>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    storage.initialize().await?;
    let router = create_router(storage, &config);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Baconator listening on {}", config.addr);
    tracing::info!("  API: http://{}{}/", config.addr, API_PREFIX);
    tracing::info!("  Health check: http://{}/health", config.addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
