//! Parallel Mandelbrot grid scanner
//!
//! Usage: mandelgrid nthreads npoints
//!
//! Writes the bounded grid points to stdout as CSV and reports the wall
//! clock time of the parallel phase on stderr. Optional settings (scan
//! window, iteration budget, log level) are read from mandelgrid.toml in
//! the working directory.

use std::io;
use std::time::Instant;

use mandelgrid::{args, evaluator, init_tracing, Config, Grid};

fn main() {
    let arguments = match args::parse_args() {
        Ok(arguments) => arguments,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    let config = Config::load("mandelgrid.toml").unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        Config::default()
    });

    init_tracing(&config.logging.level);

    let cores = num_cpus::get();
    tracing::info!(
        "scanning {}x{} grid with {} threads ({} logical cores available)",
        arguments.npoints,
        arguments.npoints,
        arguments.nthreads,
        cores
    );
    if arguments.nthreads as usize > cores {
        tracing::warn!(
            "thread count {} exceeds the {} available logical cores",
            arguments.nthreads,
            cores
        );
    }

    let grid = match Grid::new(config.scan.bounds(), arguments.npoints) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut sink = io::BufWriter::new(stdout);

    let started = Instant::now();
    let bounded = match evaluator::evaluate(
        &grid,
        arguments.nthreads as usize,
        config.scan.max_iter,
        &mut sink,
    ) {
        Ok(bounded) => bounded,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    eprintln!("TIME_SECONDS={:.6}", elapsed.as_secs_f64());
    tracing::info!("{} of {} points are bounded", bounded, grid.cells());
}
