//! Initialization for host applications.
//!
//! Orchestrators embedding the store should call this once at startup to
//! load configuration, open the pool, and apply the schema.
//!
//! # Example
//!
//! ```rust,no_run
//! use claimtrack::init::InitBuilder;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pool = InitBuilder::new()
//!     .database_url("sqlite://claimtrack.db")
//!     .init()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::db;

/// Configuration captured by the first successful `initialize` call.
static INIT_STATE: OnceLock<Config> = OnceLock::new();

/// Options for initializing the store.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Database URL (overrides the environment).
    pub database_url: Option<String>,

    /// Whether to automatically run migrations if the schema is missing.
    pub auto_migrate: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            database_url: None,
            auto_migrate: true,
        }
    }
}

/// Builder for constructing InitOptions.
pub struct InitBuilder {
    options: InitOptions,
}

impl InitBuilder {
    pub fn new() -> Self {
        Self {
            options: InitOptions::default(),
        }
    }

    /// Set the database URL.
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.options.database_url = Some(url.into());
        self
    }

    /// Set whether to automatically run migrations.
    pub fn auto_migrate(mut self, auto: bool) -> Self {
        self.options.auto_migrate = auto;
        self
    }

    /// Initialize the store with the configured options.
    pub async fn init(self) -> Result<SqlitePool> {
        initialize(self.options).await
    }
}

impl Default for InitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the store with the given options.
///
/// Loads configuration, opens the connection pool, and - unless
/// `auto_migrate` is disabled - applies any pending migrations. Returns the
/// pool; the caller owns its lifecycle.
pub async fn initialize(options: InitOptions) -> Result<SqlitePool> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(url) = options.database_url {
        config.database_url = url;
    }

    let pool = db::create_pool(&config)
        .await
        .context("Failed to initialize database pool")?;

    if options.auto_migrate {
        db::migrate(&pool)
            .await
            .context("Failed to run automatic migrations")?;
    } else {
        db::check_initialized(&pool).await.context(
            "Database has not been initialized; run migrations or enable auto_migrate",
        )?;
    }

    info!(database_url = %config.database_url, "claim store initialized");

    INIT_STATE.get_or_init(|| config);

    Ok(pool)
}

/// Check whether `initialize` has completed.
pub fn is_initialized() -> bool {
    INIT_STATE.get().is_some()
}

/// Get the configuration captured at initialization (panics if not initialized).
pub fn get_config() -> &'static Config {
    INIT_STATE
        .get()
        .expect("store not initialized - call init() first")
}

/// Install the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
