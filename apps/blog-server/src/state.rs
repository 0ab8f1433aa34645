//! Application state - shared across all handlers.

use std::sync::Arc;

use actix_web::cookie::Key;

use inkpot_core::PostStore;
use inkpot_core::ports::PostRepository;
use inkpot_infra::{InMemoryPostRepository, SystemClock};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    /// Signs the CSRF cookie.
    pub cookie_key: Key,
    /// Backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state from configuration, connecting to the database
    /// and applying migrations when one is configured.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let cookie_key = match &config.secret_key {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => {
                tracing::warn!(
                    "SECRET_KEY not set. Using a random signing key; open forms expire on restart."
                );
                Key::generate()
            }
        };

        let (repo, storage) = match &config.database {
            Some(db_config) => connect_repository(db_config, config.run_migrations).await?,
            None => {
                tracing::warn!("DATABASE_URL not set. Posts are kept in memory and lost on restart.");
                let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
                (repo, "memory")
            }
        };

        tracing::info!(storage, "Application state initialized");

        Ok(Self::with_repository(repo, cookie_key, storage))
    }

    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        cookie_key: Key,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: PostStore::new(repo, Arc::new(SystemClock)),
            cookie_key,
            storage,
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory(cookie_key: Key) -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), cookie_key, "memory")
    }
}

#[cfg(feature = "database")]
async fn connect_repository(
    db_config: &inkpot_infra::database::DatabaseConfig,
    run_migrations: bool,
) -> anyhow::Result<(Arc<dyn PostRepository>, &'static str)> {
    use anyhow::Context;
    use inkpot_infra::database::{self, SeaOrmPostRepository};
    use migration::{Migrator, MigratorTrait};

    let db = database::connect(db_config)
        .await
        .context("failed to connect to the database")?;

    if run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let storage = database::backend_name(&db);
    Ok((Arc::new(SeaOrmPostRepository::new(db)), storage))
}

#[cfg(not(feature = "database"))]
async fn connect_repository(
    _db_config: &inkpot_infra::database::DatabaseConfig,
    _run_migrations: bool,
) -> anyhow::Result<(Arc<dyn PostRepository>, &'static str)> {
    anyhow::bail!("DATABASE_URL is set but the server was built without the `database` feature")
}
