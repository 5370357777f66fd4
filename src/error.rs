//! Error types for grid evaluation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("thread count must be positive, got {0}")]
    InvalidThreadCount(i64),

    #[error("grid resolution must be positive, got {0}")]
    InvalidResolution(i64),

    #[error("degenerate grid: at least 2 points per axis are required")]
    DegenerateGrid,

    #[error("worker thread panicked during evaluation")]
    WorkerPanic,

    #[error("failed to write to the output stream: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
