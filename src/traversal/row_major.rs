/// Sums an N×N matrix row by row.
///
/// Row index is the outer loop and column index the inner one, so the
/// inner loop reads `a[i * n + j]` with stride 1. Every cache line that
/// gets pulled in is fully used before moving on.
///
/// Elements are added as `u64` with wrapping arithmetic.
///
/// # Arguments
///
/// * `a` - Matrix (n × n), row-major
/// * `n` - Side length
///
/// # Panics
///
/// Panics if `a.len() != n * n`.
#[inline(never)]
pub fn sum_row_major(a: &[i32], n: usize) -> u64 {
    assert_eq!(a.len(), n * n, "expected {}x{}={} elements", n, n, n * n);

    let mut sum: u64 = 0;
    for i in 0..n {
        let base = i * n;
        for j in 0..n {
            sum = sum.wrapping_add(a[base + j] as u64);
        }
    }
    sum
}
