use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{MonitorError, MonitorResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCfg {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorCfg {
    pub symbol: String,
    pub refresh_secs: u64,
    pub table_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingCfg {
    pub level: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseCfg,
    pub monitor: MonitorCfg,
    pub logging: LoggingCfg,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseCfg {
                host: "localhost".to_string(),
                port: 5432,
                dbname: "exchange_data".to_string(),
                user: String::new(),
                password: String::new(),
                max_connections: 5,
            },
            monitor: MonitorCfg {
                symbol: "USDT/MMK".to_string(),
                refresh_secs: 20,
                table_rows: 10,
            },
            logging: LoggingCfg {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}

impl DatabaseCfg {
    /// Connection URL assembled from the externally supplied parts.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> MonitorResult<Self> {
        let mut config = Self::default();

        // Database credentials are required, everything else has a default
        config.database.user = env::var("DB_USER")
            .map_err(|_| MonitorError::Configuration("DB_USER not found".to_string()))?;

        config.database.password = env::var("DB_PASSWORD")
            .map_err(|_| MonitorError::Configuration("DB_PASSWORD not found".to_string()))?;

        if let Ok(host) = env::var("DB_HOST") {
            config.database.host = host;
        }

        if let Ok(port) = env::var("DB_PORT") {
            config.database.port = port
                .parse()
                .map_err(|_| MonitorError::Configuration("Invalid DB_PORT".to_string()))?;
        }

        if let Ok(dbname) = env::var("DB_NAME") {
            config.database.dbname = dbname;
        }

        if let Ok(max_conn) = env::var("DB_MAX_CONNECTIONS") {
            config.database.max_connections = max_conn
                .parse()
                .map_err(|_| MonitorError::Configuration("Invalid DB_MAX_CONNECTIONS".to_string()))?;
        }

        // Monitor configuration
        if let Ok(symbol) = env::var("MONITOR_SYMBOL") {
            config.monitor.symbol = symbol;
        }

        if let Ok(secs) = env::var("REFRESH_SECS") {
            config.monitor.refresh_secs = secs
                .parse()
                .map_err(|_| MonitorError::Configuration("Invalid REFRESH_SECS".to_string()))?;
        }

        if let Ok(rows) = env::var("TABLE_ROWS") {
            config.monitor.table_rows = rows
                .parse()
                .map_err(|_| MonitorError::Configuration("Invalid TABLE_ROWS".to_string()))?;
        }

        // Logging configuration
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file_path = Some(file);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> MonitorResult<()> {
        if self.database.user.is_empty() {
            return Err(MonitorError::Configuration(
                "Database user cannot be empty".to_string(),
            ));
        }

        if self.database.password.is_empty() {
            return Err(MonitorError::Configuration(
                "Database password cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(MonitorError::Configuration(
                "Connection pool size must be greater than 0".to_string(),
            ));
        }

        if self.monitor.refresh_secs == 0 {
            return Err(MonitorError::Configuration(
                "Refresh interval must be greater than 0".to_string(),
            ));
        }

        if self.monitor.table_rows == 0 {
            return Err(MonitorError::Configuration(
                "Table depth must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(MonitorError::Configuration(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
