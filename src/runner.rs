//! Single timed pass: allocate, fill, traverse, report.

use crate::error::Result;
use crate::matrix::AlignedMatrix;
use crate::mode::Mode;
use crate::traversal::traverse;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub n: usize,
    pub sum: u64,
    pub mode: Mode,
    pub elapsed: Duration,
}

impl Report {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// The three lines printed on success.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "N = {}", self.n)?;
        writeln!(f, "Suma (ignorar): {}", self.sum)?;
        write!(f, "{}{:.6} s", self.mode.label(), self.seconds())
    }
}

/// Runs one benchmark pass over an `n`×`n` matrix.
///
/// Only the traversal is timed; allocation and filling happen before the
/// clock starts. The matrix is freed before this returns.
///
/// # Errors
///
/// Fails before timing anything if the matrix cannot be allocated.
pub fn run(mode: Mode, n: usize) -> Result<Report> {
    let matrix = AlignedMatrix::new(n)?;
    // Hide the contents from the optimizer so the loop has to read memory.
    let a = black_box(matrix.as_slice());

    log::debug!("starting {} traversal, N = {}", mode, n);
    let start = Instant::now();
    let sum = black_box(traverse(mode, a, n));
    let elapsed = start.elapsed();
    log::debug!("{} traversal took {:?}", mode, elapsed);

    Ok(Report {
        n,
        sum,
        mode,
        elapsed,
    })
}
