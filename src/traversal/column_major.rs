/// Sums an N×N matrix column by column.
///
/// Column index is the outer loop and row index the inner one, so the
/// inner loop reads `a[i * n + j]` with stride `n`. For large N each read
/// lands on a different cache line (and often a different page), which is
/// what makes this order slow.
///
/// Produces exactly the same sum as [`sum_row_major`](super::sum_row_major).
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
pub fn sum_column_major(a: &[i32], n: usize) -> u64 {
    assert_eq!(a.len(), n * n, "expected {}x{}={} elements", n, n, n * n);

    let mut sum: u64 = 0;
    for j in 0..n {
        for i in 0..n {
            sum = sum.wrapping_add(a[i * n + j] as u64);
        }
    }
    sum
}
