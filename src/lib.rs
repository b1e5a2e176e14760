pub mod commands;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod validation;

use config::AppConfig;
use db::DbPool;

pub use db::models::{
    ButtonKey, ContentItem, ContentOverride, CustomButton, OverrideState, RenderContext, Settings,
};
pub use engine::{build_fragment, should_show};
pub use error::AppError;
pub use hooks::Hooks;

/// Shared state handed to every hook and admin command.
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
}

impl AppState {
    /// Open (and migrate) the store described by `config`.
    pub fn open(config: AppConfig) -> Result<Self, AppError> {
        let db = db::init_db(&config.data_dir, &config.db_file_name)?;
        Ok(Self { db, config })
    }

    /// Wrap an existing pool with default configuration.
    pub fn with_pool(db: DbPool) -> Self {
        Self {
            db,
            config: AppConfig::default(),
        }
    }
}

/// Host startup: initialize logging, open the store, and return the
/// state plus the callbacks to register.
pub fn start(config: AppConfig) -> Result<(AppState, Hooks), AppError> {
    logging::init();

    tracing::info!("Starting AI share buttons v{}", config.version);

    let state = AppState::open(config)?;
    Ok((state, Hooks::wire()))
}
