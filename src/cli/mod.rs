mod io;
mod output;
mod render;
mod shell;

pub use shell::run;

use thiserror::Error;

use crate::errors::ConfigError;

/// Top-level CLI failures surfaced to `main`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input error: {0}")]
    Dialog(#[from] dialoguer::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
