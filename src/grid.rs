//! Grid geometry: a rectangular window on the complex plane sampled at a
//! fixed resolution along each axis.

use num::Complex;

use crate::error::{EvalError, Result};

/// Rectangular region of the complex plane covered by the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            xmin: -2.0,
            xmax: 1.0,
            ymin: -1.5,
            ymax: 1.5,
        }
    }
}

/// An `npoints` x `npoints` sampling of [`Bounds`]. The grid is never
/// materialized; each index pair maps to a coordinate on demand.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    bounds: Bounds,
    npoints: usize,
}

impl Grid {
    /// Create a grid with `npoints` samples per axis.
    ///
    /// A resolution of 1 is rejected: the coordinate map divides by
    /// `npoints - 1`, so a single-point grid has no defined spacing.
    pub fn new(bounds: Bounds, npoints: i64) -> Result<Grid> {
        if npoints <= 0 {
            return Err(EvalError::InvalidResolution(npoints));
        }
        if npoints == 1 {
            return Err(EvalError::DegenerateGrid);
        }
        let npoints =
            usize::try_from(npoints).map_err(|_| EvalError::InvalidResolution(npoints))?;
        Ok(Grid { bounds, npoints })
    }

    pub fn npoints(&self) -> usize {
        self.npoints
    }

    /// Total number of cells in the flattened index space.
    pub fn cells(&self) -> u64 {
        self.npoints as u64 * self.npoints as u64
    }

    /// Map indices `(i, j)`, each in `[0, npoints)`, to a point on the
    /// complex plane by linear interpolation across the bounds.
    pub fn point(&self, i: usize, j: usize) -> Complex<f64> {
        let span = (self.npoints - 1) as f64;
        Complex::new(
            self.bounds.xmin + (self.bounds.xmax - self.bounds.xmin) * i as f64 / span,
            self.bounds.ymin + (self.bounds.ymax - self.bounds.ymin) * j as f64 / span,
        )
    }
}
