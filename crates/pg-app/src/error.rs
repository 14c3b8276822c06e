//! Error types for the pg-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Airfoil file not found: neither '{name}' nor '{name}.dat' exists")]
    AirfoilNotFound { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pg-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pg_xfoil::XfoilError> for AppError {
    fn from(err: pg_xfoil::XfoilError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<pg_project::ConfigError> for AppError {
    fn from(err: pg_project::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<pg_core::PgError> for AppError {
    fn from(err: pg_core::PgError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
