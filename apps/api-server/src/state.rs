//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostService;
use postboard_core::ports::PostRepository;
use postboard_infra::{CalamineSheetReader, DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postboard_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    /// Which post store is active ("postgres" or "memory").
    pub store: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (store, repo): (&'static str, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match PostgresPostRepository::connect(config).await {
                    Ok(repo) => ("postgres", Arc::new(repo)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        ("memory", Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                ("memory", Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (store, repo): (&'static str, Arc<dyn PostRepository>) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            ("memory", Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!(store, "Application state initialized");

        Self::with_repository(repo, store)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    fn with_repository(repo: Arc<dyn PostRepository>, store: &'static str) -> Self {
        let posts = PostService::new(repo, Arc::new(CalamineSheetReader::new()));
        Self {
            posts: Arc::new(posts),
            store,
        }
    }
}
