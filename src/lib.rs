//! Row-major vs column-major traversal, timed.
//!
//! A small demo of why loop order matters. An N×N matrix is summed either
//! walking memory sequentially or jumping N elements per step. The work is
//! identical, the cache behaviour is not, and on a 4096×4096 matrix the
//! column-wise pass is several times slower.
//!
//! ## Usage
//!
//! ```
//! use cache_demo::{Mode, run};
//!
//! let rows = run(Mode::RowMajor, 64).unwrap();
//! let cols = run(Mode::ColumnMajor, 64).unwrap();
//!
//! // Same elements, same sum. Only the timing differs.
//! assert_eq!(rows.sum, cols.sum);
//! println!("{}", rows);
//! ```
//!
//! The binary uses [`config::N`], fixed at build time (`CACHE_DEMO_N`,
//! default 4096).
//!
//! ## What's inside
//!
//! - 64-byte aligned matrix buffer filled with `i mod 256`
//! - Row-major and column-major summation loops
//! - Timing harness that keeps the optimizer from deleting the loops

pub mod config;
pub mod error;
pub mod matrix;
pub mod mode;
pub mod runner;
pub mod traversal;

pub use error::{BenchError, Result};
pub use matrix::AlignedMatrix;
pub use mode::Mode;
pub use runner::{Report, run};
pub use traversal::{expected_sum, sum_column_major, sum_row_major, traverse};
