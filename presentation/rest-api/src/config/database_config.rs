use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Storage settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional, in-memory store when unset)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: directory of sqlx migrations to run at startup (optional)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Self {
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            max_connections: max_connections
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            migrations_path: migrations_path.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Builds the product store selected by the settings
///
/// # Errors
/// Returns error if the database connection or the migrations fail
pub async fn init_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    let Some(url) = &settings.url else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory");
        return Ok(Arc::new(InMemoryProductRepository::new()));
    };

    let config =
        DatabaseConfig::new(url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Some(path) = &settings.migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!(path = %path, "Database migrations applied");
    }

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}
