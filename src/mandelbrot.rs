use num::Complex;

/// Determine if `c` is in the Mandelbrot set, using at most `limit` iterations to decide.
///
/// If `c` is not a member, return `Some(i)`, where `i` is the number of
/// iterations it took for `c` to leave the circle of radius 2 centered on
/// the origin. If `c` seems to be a member (more precisely, if we reached
/// the iteration limit without being able to prove that `c` is not a
/// member), return `None`.
pub fn escape_time(c: Complex<f64>, limit: u32) -> Option<u32> {
    let mut z = Complex::new(0.0, 0.0);
    for i in 0..limit {
        if z.norm_sqr() >= 4.0 {
            return Some(i);
        }
        z = z * z + c;
    }
    None
}

/// A point counts as bounded when the escape-time budget is exhausted
/// without leaving the radius-2 circle. Slow escapers are indistinguishable
/// from true members at any finite `limit`.
pub fn is_bounded(c: Complex<f64>, limit: u32) -> bool {
    escape_time(c, limit).is_none()
}
