use anyhow::{Context, Result};
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::routes::{task_routes, AppState};
use crate::store::Store;

pub struct Server {
    config: Config,
    router: Router,
}

impl Server {
    /// Validate `config`, create the database on first run, and build the
    /// router.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let store = Store::new(config.db_path.clone());
        if store.init()? {
            info!("initialized database at {}", store.path());
        }
        let router = build_router(store);
        Ok(Self { config, router })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!(
            "listening on http://{addr} (db={}, debug={})",
            self.config.db_path, self.config.debug
        );
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("shutdown complete");
        Ok(())
    }
}

pub fn build_router(store: Store) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    task_routes(AppState { store }).layer(cors)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down...");
}
