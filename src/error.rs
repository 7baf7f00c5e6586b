//! Error types for the estimator

use thiserror::Error;

use crate::config::ConfigError;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// The run was configured with values the estimator cannot use
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The operating system refused to create a worker thread
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker panicked or its task was aborted before producing a result
    #[error("worker {worker} did not produce a result")]
    WorkerPanicked { worker: usize },

    /// The async runtime could not be started
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// Console I/O failed while prompting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a valid value was entered
    #[error("input closed before a value was entered")]
    InputClosed,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
