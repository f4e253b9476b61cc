use axum::{
    Router,
    http::Method,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use std::{future::Future, sync::Arc};

use crate::{expense, statistics};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Permissive CORS: any origin may call every expense endpoint.
///
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/expense", get(expense::list).post(expense::create))
        .route("/api/stats", get(statistics::get_stats))
        .route(
            "/api/expense/{id}",
            get(expense::get)
                .put(expense::update)
                .delete(expense::delete),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before returning.
pub async fn run_with_listener<F>(
    engine: Engine,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine)))
        .with_graceful_shutdown(shutdown)
        .await
}
