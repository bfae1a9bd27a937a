/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | WORK_DIR/orders.db | SQLite database file |
/// | GEMINI_API_KEY | (unset) | API key for natural-language queries |
/// | LOG_LEVEL | info | Log verbosity |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Explicit database path; falls back to `work_dir/orders.db`
    pub database_path: Option<String>,
    /// API key for the text-to-SQL backend; NLP endpoints fail without it
    pub gemini_api_key: Option<String>,
    /// Log verbosity
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn database_path(&self) -> String {
        self.database_path
            .clone()
            .unwrap_or_else(|| format!("{}/orders.db", self.work_dir))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_defaults_under_work_dir() {
        let config = Config {
            work_dir: "/tmp/orders".into(),
            http_port: 3000,
            database_path: None,
            gemini_api_key: None,
            log_level: "info".into(),
            environment: "development".into(),
        };
        assert_eq!(config.database_path(), "/tmp/orders/orders.db");

        let explicit = Config {
            database_path: Some("/var/db/shop.db".into()),
            ..config
        };
        assert_eq!(explicit.database_path(), "/var/db/shop.db");
    }
}
