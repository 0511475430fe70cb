use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for MonitorError {
    fn from(err: sqlx::Error) -> Self {
        MonitorError::Fetch(format!("database query failed: {}", err))
    }
}

impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        MonitorError::Render(format!("terminal io error: {}", err))
    }
}

pub type MonitorResult<T> = Result<T, MonitorError>;
