use std::sync::Arc;

use shared::error::AppError;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::nlp::SqlGenerator;
use crate::nlp::gemini::GeminiClient;

/// Shared server state handed to every handler
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// SQL generator sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub sql_generator: Arc<dyn SqlGenerator>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, sql_generator: Arc<dyn SqlGenerator>) -> Self {
        Self {
            config,
            pool,
            sql_generator,
        }
    }

    /// Open the database, run migrations, and wire up the text-to-SQL
    /// backend.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path()).await?;

        let api_key = match &config.gemini_api_key {
            Some(key) => key.clone(),
            None => {
                tracing::warn!("GEMINI_API_KEY not set; natural-language queries will fail");
                String::new()
            }
        };
        let sql_generator: Arc<dyn SqlGenerator> = Arc::new(GeminiClient::new(api_key));

        Ok(Self::new(config.clone(), db.pool, sql_generator))
    }
}
