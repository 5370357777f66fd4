//! Parallel escape-time scan of the Mandelbrot set over a regular grid.
//!
//! The scan partitions an `npoints` x `npoints` grid statically across a
//! fixed pool of worker threads, classifies every point with the
//! escape-time iteration, and emits the bounded points as CSV lines
//! through a mutex-guarded sink.

pub mod args;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod mandelbrot;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{EvalError, Result};
pub use evaluator::evaluate;
pub use grid::{Bounds, Grid};

/// Initialize tracing/logging with the given filter level
///
/// Log lines go to stderr; stdout is reserved for the result stream.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
