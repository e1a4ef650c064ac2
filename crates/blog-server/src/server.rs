use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use blog_store::{InMemoryPostStore, PostStore};
use blog_types::{BlogPost, PostDraft};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Blog posts API server.
pub struct BlogServer {
    config: ServerConfig,
    store: Arc<dyn PostStore>,
}

impl BlogServer {
    /// Create a server over a fresh in-memory store, seeded per `config`.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());
        if config.seed_sample_post {
            let post = seed_sample_post(store.as_ref())?;
            tracing::debug!(id = %post.id.short_id(), "seeded sample post");
        }
        Ok(Self::with_store(config, store))
    }

    /// Create a server over an existing store. No seeding is done.
    pub fn with_store(config: ServerConfig, store: Arc<dyn PostStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn PostStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.store))
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        tracing::info!("Your app is listening on port {}", listener.local_addr()?.port());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("blog server stopped");
        Ok(())
    }
}

/// Insert the sample post every fresh server starts with.
pub fn seed_sample_post(store: &dyn PostStore) -> ServerResult<BlogPost> {
    Ok(store.create(PostDraft::new("paulo coelho", "poetry", "the alchemist"))?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
