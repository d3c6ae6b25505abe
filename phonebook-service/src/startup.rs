use crate::config::PhonebookConfig;
use crate::handlers;
use crate::services::{MongoDb, MongoPersonStore, PersonRepository};
use axum::{body::Body, middleware::from_fn, routing::get, Router};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::middleware::{
    make_request_span, metrics_middleware, request_id_middleware, security_headers_middleware,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repository: PersonRepository,
}

impl AppState {
    pub fn new(repository: PersonRepository) -> Self {
        Self { repository }
    }
}

/// All routes plus the middleware stack. Paths without a route fall through
/// to files under `static_dir` when it is given.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/info", get(handlers::info))
        .route(
            "/api/persons",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/api/persons/:id",
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        );

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    db: MongoDb,
}

impl Application {
    pub async fn build(config: PhonebookConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(
            config.mongodb.uri.expose_secret(),
            &config.mongodb.database,
            config.mongodb.timeout,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;
        db.initialize_collection().await.map_err(|e| {
            tracing::error!("Failed to initialize persons collection: {}", e);
            e
        })?;

        let repository = PersonRepository::new(Arc::new(MongoPersonStore::new(db.clone())));
        let state = AppState::new(repository);

        let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
        match static_dir {
            Some(dir) => tracing::info!(dir = %dir.display(), "Serving static files"),
            None => tracing::debug!(
                dir = %config.static_dir.display(),
                "Static directory not found, static serving disabled"
            ),
        }
        let app = build_router(state, static_dir);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
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
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
