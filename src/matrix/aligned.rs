//! Cache-line aligned, row-major square matrix of `i32`.

use crate::config::{ALIGNMENT, matrix_bytes};
use crate::error::{BenchError, Result};
use std::alloc::{self, Layout};
use std::io;
use std::ops::Deref;
use std::ptr::NonNull;

/// N×N matrix stored contiguously in row-major order.
///
/// The buffer starts on an [`ALIGNMENT`]-byte boundary and is freed when
/// the matrix is dropped. Element (i, j) lives at offset `i * n + j`.
pub struct AlignedMatrix {
    ptr: NonNull<i32>,
    layout: Layout,
    n: usize,
}

impl AlignedMatrix {
    /// Allocates an N×N matrix and fills it with the
    /// `i mod 256` pattern.
    ///
    /// # Errors
    ///
    /// * [`BenchError::InvalidSize`] if `n` is zero or the byte count
    ///   overflows.
    /// * [`BenchError::Allocation`] if the allocator returns null.
    pub fn new(n: usize) -> Result<Self> {
        let mut matrix = Self::allocate(n)?;
        matrix.fill_pattern();
        Ok(matrix)
    }

    fn allocate(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::InvalidSize { n });
        }
        let bytes = matrix_bytes(n).ok_or(BenchError::InvalidSize { n })?;
        let layout =
            Layout::from_size_align(bytes, ALIGNMENT).map_err(|_| BenchError::InvalidSize { n })?;

        // SAFETY: layout has non-zero size since n > 0.
        let raw = unsafe { alloc::alloc(layout) } as *mut i32;
        let ptr = NonNull::new(raw).ok_or_else(|| BenchError::Allocation {
            bytes,
            source: io::Error::from(io::ErrorKind::OutOfMemory),
        })?;

        log::debug!(
            "allocated {}x{} matrix: {} bytes, {}-byte aligned at {:p}",
            n,
            n,
            bytes,
            ALIGNMENT,
            ptr
        );

        Ok(Self { ptr, layout, n })
    }

    /// Writes `i mod 256` at every linear offset `i`.
    fn fill_pattern(&mut self) {
        let total = self.n * self.n;
        for i in 0..total {
            // SAFETY: i < n*n, inside the allocation. Writing through the raw
            // pointer avoids forming a slice over uninitialized memory.
            unsafe { self.ptr.as_ptr().add(i).write((i & 0xFF) as i32) };
        }
    }

    /// Side length.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: every element was written by fill_pattern before the
        // matrix became observable, and the allocation outlives &self.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.n * self.n) }
    }
}

impl Deref for AlignedMatrix {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl Drop for AlignedMatrix {
    fn drop(&mut self) {
        log::debug!("freeing {}x{} matrix", self.n, self.n);
        // SAFETY: ptr was returned by alloc with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
    }
}
