use srk_eos::{EosError, SweepError, UnitError};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Eos(#[from] EosError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
