use thiserror::Error;

/// Validation errors raised before any core computation runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
