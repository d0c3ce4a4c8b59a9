//! The two traversal orders being compared.
//!
//! Both visit every element of an N×N row-major matrix exactly once and
//! return the same checksum; only the order of memory accesses differs.
//!
//! - `row_major`: inner loop walks a row, consecutive reads are adjacent
//! - `column_major`: inner loop walks a column, consecutive reads are N
//!   elements apart

pub mod column_major;
pub mod row_major;

use crate::mode::Mode;

pub use column_major::sum_column_major;
pub use row_major::sum_row_major;

/// Sums the matrix in the order selected by `mode`.
pub fn traverse(mode: Mode, a: &[i32], n: usize) -> u64 {
    match mode {
        Mode::RowMajor => sum_row_major(a, n),
        Mode::ColumnMajor => sum_column_major(a, n),
    }
}

/// Closed-form checksum of an N×N matrix filled with `i mod 256`.
///
/// Every full block of 256 elements contributes 0 + 1 + ... + 255 = 32640;
/// the trailing partial block of length r contributes r(r-1)/2.
///
/// Wraps modulo 2^64 exactly like the traversal sums do, so it never
/// panics, even for sizes that could not be allocated.
pub fn expected_sum(n: usize) -> u64 {
    let total = (n as u128) * (n as u128);
    let blocks = (total / 256) as u64;
    let rem = (total % 256) as u64;
    blocks
        .wrapping_mul(32640)
        .wrapping_add(rem * rem.saturating_sub(1) / 2)
}
