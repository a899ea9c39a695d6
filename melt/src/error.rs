use melt_rs::TmError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tm(#[from] TmError),

    #[error("Failed to set up logging: {0}")]
    Logging(#[from] TryInitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
