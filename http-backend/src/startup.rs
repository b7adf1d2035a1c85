//! Application startup and lifecycle management.
//!
//! The store connection is opened once through a [`MongoConnectionGuard`]
//! owned by [`Application`]; handlers only ever see the repository built from
//! that connection.

use crate::config::BackendConfig;
use crate::handlers::{
    create_user, health_check, index, list_users, metrics_endpoint, readiness_check,
};
use crate::services::{
    ConnectionGuard, MongoConnectionGuard, MongoConnector, MongoUserRepository, UserRepository,
};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/users", get(list_users).post(create_user))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    guard: Arc<MongoConnectionGuard>,
}

impl Application {
    /// Binds the listener, then connects to the store. Fails with
    /// `AppError::ConfigError` when no connection string is configured.
    ///
    /// Binding first means no store connection is ever opened for a server
    /// that cannot listen.
    pub async fn build(config: BackendConfig) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let guard = Arc::new(ConnectionGuard::new(
            MongoConnector::new(config.mongodb.database.clone()),
            config.mongodb.uri.clone(),
        ));

        let db = guard.connect(None).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        let users: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db));
        let state = AppState::new(users);

        Ok(Self {
            port,
            listener,
            state,
            guard,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn guard(&self) -> Arc<MongoConnectionGuard> {
        self.guard.clone()
    }

    /// Serves until a shutdown signal arrives, then closes the store connection.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!("HTTP backend running on http://localhost:{}", self.port);

        let served = axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        if let Err(e) = self.guard.disconnect().await {
            tracing::error!("Failed to disconnect from MongoDB: {}", e);
        }

        served.map_err(|e| {
            tracing::error!("HTTP server error: {}", e);
            e
        })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
