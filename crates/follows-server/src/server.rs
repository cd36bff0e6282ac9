use std::sync::Arc;

use follows_store::{SeededUserStore, UserStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, build_traced_router};
use crate::state::AppState;

/// Follows HTTP server.
pub struct FollowsServer {
    config: ServerConfig,
    state: AppState,
}

impl FollowsServer {
    /// Server seeded from `config.seed_path`, or the built-in population.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = match &config.seed_path {
            Some(path) => SeededUserStore::from_seed_file(path)?,
            None => SeededUserStore::default(),
        };
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        if self.config.log_requests {
            build_traced_router(self.state.clone())
        } else {
            build_router(self.state.clone())
        }
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            users = self.state.dispatcher.store().len(&self.state.handle()),
            "Follows server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
