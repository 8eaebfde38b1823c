//! HTTP gateway: routing, CORS, and server lifecycle.

pub mod handlers;
pub mod model;

use crate::repository::ItemRepository;
use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Shared state for all routes. Handlers see the repository only through the
/// trait object, never a concrete store client.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ItemRepository>,
}

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/:id",
            get(handlers::get_item).delete(handlers::delete_item),
        )
        .route("/items/:id/edit", post(handlers::update_item))
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS on every response: the request's Origin is mirrored back,
/// credentials are allowed, and preflight OPTIONS is answered 200 with no
/// body by the layer itself.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
}

pub struct AppServer {
    listen_addr: String,
    router: Router,
}

impl AppServer {
    pub fn new(listen_addr: &str, repo: Arc<dyn ItemRepository>) -> Self {
        let state = AppState { repo };
        Self {
            listen_addr: listen_addr.to_string(),
            router: router(state),
        }
    }

    /// Serve until SIGINT/SIGTERM, then stop accepting and drain in-flight
    /// requests for at most `SHUTDOWN_TIMEOUT`.
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!(addr = %self.listen_addr, "listening");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(listener, self.router).with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        });

        tokio::select! {
            result = async { serve.await } => result,
            _ = async {
                let _ = shutdown_rx.await;
                tokio::time::sleep(SHUTDOWN_TIMEOUT).await;
            } => {
                tracing::warn!(timeout = ?SHUTDOWN_TIMEOUT, "shutdown deadline elapsed");
                Ok(())
            }
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "install SIGTERM handler");
                std::future::pending::<()>().await
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
