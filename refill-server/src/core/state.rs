//! Server State
//!
//! Shared handles cloned into every request handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::directory::StoreDirectory;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub directory: Arc<StoreDirectory>,
}

impl ServerState {
    pub fn new(config: Config, db: DbService, directory: StoreDirectory) -> Self {
        Self {
            config,
            db,
            directory: Arc::new(directory),
        }
    }

    /// Open the database (running migrations) and load the store directory.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.db_path).await?;
        let directory = StoreDirectory::load(&config.store_directory)?;

        Ok(Self::new(config.clone(), db, directory))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
