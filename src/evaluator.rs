//! Parallel scan of the grid.
//!
//! The flattened index space `0..npoints^2` is split into contiguous,
//! near-equal chunks, one per worker thread, dispatched once with no
//! rebalancing. Per-cell cost is roughly uniform, so a static partition
//! carries no scheduling overhead. The output sink is the only shared
//! mutable state; every emitted line is written under a mutex held for
//! just that one write.

use std::io::{self, Write};
use std::ops::Range;
use std::sync::Mutex;

use crate::error::{EvalError, Result};
use crate::grid::Grid;
use crate::mandelbrot;

/// Scan every grid cell and write the bounded points to `sink`.
///
/// Writes the `x,y` header line, then one `"<x>,<y>"` line per bounded
/// point, both coordinates with 10 fractional digits. Returns the number
/// of bounded points. The emitted *set* of points is identical for any
/// `nthreads`; only the interleaving of lines across workers may differ.
pub fn evaluate<W: Write + Send>(
    grid: &Grid,
    nthreads: usize,
    max_iter: u32,
    sink: &mut W,
) -> Result<u64> {
    if nthreads == 0 {
        return Err(EvalError::InvalidThreadCount(0));
    }

    writeln!(sink, "x,y")?;

    let cells = grid.cells();
    // More workers than cells would just produce empty chunks.
    let workers = (nthreads as u64).min(cells) as usize;
    let chunk = cells.div_ceil(workers as u64);
    let out = Mutex::new(&mut *sink);

    tracing::debug!("scanning {} cells with {} workers", cells, workers);

    let results: Vec<std::thread::Result<io::Result<u64>>> = crossbeam::scope(|spawner| {
        let mut handles = Vec::with_capacity(workers);
        for t in 0..workers as u64 {
            let start = t * chunk;
            let end = cells.min(start + chunk);
            if start >= end {
                break;
            }
            let out = &out;
            handles.push(spawner.spawn(move |_| scan_chunk(grid, start..end, max_iter, out)));
        }
        handles.into_iter().map(|handle| handle.join()).collect()
    })
    .map_err(|_| EvalError::WorkerPanic)?;
    drop(out);

    let mut bounded = 0u64;
    for result in results {
        bounded += result.map_err(|_| EvalError::WorkerPanic)??;
    }

    sink.flush()?;
    Ok(bounded)
}

/// Evaluate one contiguous range of the flattened index space.
///
/// Cells are visited in ascending index order; the sink lock is taken only
/// when a bounded point has to be emitted and released as soon as the line
/// is written.
fn scan_chunk<W: Write>(
    grid: &Grid,
    range: Range<u64>,
    max_iter: u32,
    sink: &Mutex<&mut W>,
) -> io::Result<u64> {
    let npoints = grid.npoints() as u64;
    let mut bounded = 0u64;

    for k in range {
        let i = (k / npoints) as usize;
        let j = (k % npoints) as usize;
        let c = grid.point(i, j);

        if mandelbrot::is_bounded(c, max_iter) {
            let mut out = sink
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "output sink lock poisoned"))?;
            writeln!(out, "{:.10},{:.10}", c.re, c.im)?;
            bounded += 1;
        }
    }

    Ok(bounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Bounds;

    fn run(npoints: i64, nthreads: usize) -> (u64, Vec<String>) {
        let grid = Grid::new(Bounds::default(), npoints).unwrap();
        let mut buf = Vec::new();
        let count = evaluate(&grid, nthreads, 1000, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        (count, text.lines().map(str::to_string).collect())
    }

    fn sorted_body(lines: &[String]) -> Vec<String> {
        let mut body: Vec<String> = lines[1..].to_vec();
        body.sort();
        body
    }

    #[test]
    fn test_header_is_first_line() {
        let (_, lines) = run(2, 1);
        assert_eq!(lines[0], "x,y");
    }

    #[test]
    fn test_two_point_grid_has_no_bounded_corners() {
        // All four corners of the default bounds escape within a few steps
        let (count, lines) = run(2, 1);
        assert_eq!(count, 0);
        assert_eq!(lines, vec!["x,y".to_string()]);
    }

    #[test]
    fn test_count_matches_emitted_lines() {
        let (count, lines) = run(25, 3);
        assert_eq!(count as usize, lines.len() - 1);
        assert!(count <= 25 * 25);
    }

    #[test]
    fn test_origin_sample_is_emitted() {
        // npoints = 7 places a sample exactly at the origin
        let (_, lines) = run(7, 2);
        assert!(lines.contains(&"0.0000000000,0.0000000000".to_string()));
    }

    #[test]
    fn test_emitted_lines_have_fixed_precision() {
        let (_, lines) = run(16, 4);
        for line in &lines[1..] {
            let (x, y) = line.split_once(',').expect("line must have two fields");
            for field in [x, y] {
                let (_, frac) = field.split_once('.').expect("field must have a fraction");
                assert_eq!(frac.len(), 10, "field {:?} in line {:?}", field, line);
                field.parse::<f64>().expect("field must parse as f64");
            }
        }
    }

    #[test]
    fn test_result_set_is_independent_of_thread_count() {
        let (count_serial, serial) = run(25, 1);
        for nthreads in [2, 4, 7] {
            let (count, parallel) = run(25, nthreads);
            assert_eq!(count, count_serial);
            assert_eq!(sorted_body(&parallel), sorted_body(&serial));
        }
    }

    #[test]
    fn test_more_workers_than_cells() {
        // 3x3 grid, 64 requested threads: extra workers get no chunk
        let (count_serial, serial) = run(3, 1);
        let (count, oversubscribed) = run(3, 64);
        assert_eq!(count, count_serial);
        assert_eq!(sorted_body(&oversubscribed), sorted_body(&serial));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let grid = Grid::new(Bounds::default(), 4).unwrap();
        let mut buf = Vec::new();
        let err = evaluate(&grid, 0, 1000, &mut buf).unwrap_err();
        assert!(matches!(err, EvalError::InvalidThreadCount(0)));
        assert!(buf.is_empty(), "no output before validation passes");
    }
}
