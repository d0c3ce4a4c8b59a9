//! Build-time configuration.
//!
//! The matrix side length is fixed when the crate is compiled. Override it
//! with the `CACHE_DEMO_N` environment variable at build time:
//!
//! ```text
//! CACHE_DEMO_N=8192 cargo build --release
//! ```
//!
//! Bigger matrices push the working set past L2/L3 and make the gap
//! between the two traversal orders larger.

/// Side length used when `CACHE_DEMO_N` is not set.
pub const DEFAULT_N: usize = 4096;

/// Matrix side length for the binary.
pub const N: usize = parse_side(option_env!("CACHE_DEMO_N"));

/// Byte alignment of the matrix buffer (one cache line on x86_64).
pub const ALIGNMENT: usize = 64;

const _: () = assert!(ALIGNMENT.is_power_of_two());
const _: () = assert!(ALIGNMENT % size_of::<i32>() == 0);
const _: () = assert!(fits_in_memory(N), "CACHE_DEMO_N is too large");

/// Parses a decimal side length at compile time.
///
/// Fails the build on anything that is not a positive decimal integer.
pub const fn parse_side(value: Option<&str>) -> usize {
    let bytes = match value {
        Some(v) => v.as_bytes(),
        None => return DEFAULT_N,
    };
    if bytes.is_empty() {
        panic!("CACHE_DEMO_N is empty");
    }

    let mut n: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            panic!("CACHE_DEMO_N must be a decimal integer");
        }
        n = match n.checked_mul(10) {
            Some(v) => v,
            None => panic!("CACHE_DEMO_N overflows usize"),
        };
        n = match n.checked_add((b - b'0') as usize) {
            Some(v) => v,
            None => panic!("CACHE_DEMO_N overflows usize"),
        };
        i += 1;
    }

    if n == 0 {
        panic!("CACHE_DEMO_N must be positive");
    }
    n
}

/// Number of bytes an `n`×`n` matrix of `i32` needs, if representable.
///
/// Allocations are capped at `isize::MAX` bytes, so anything above that
/// is rejected too.
pub const fn matrix_bytes(n: usize) -> Option<usize> {
    let elems = match n.checked_mul(n) {
        Some(v) => v,
        None => return None,
    };
    match elems.checked_mul(size_of::<i32>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Some(bytes),
        _ => None,
    }
}

const fn fits_in_memory(n: usize) -> bool {
    matrix_bytes(n).is_some()
}

/// Usage line printed on argument errors.
pub fn usage(program: &str) -> String {
    format!("Uso: {} filas|columnas", program)
}
