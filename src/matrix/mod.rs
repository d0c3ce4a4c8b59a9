//! Matrix storage.
//!
//! One aligned, row-major buffer filled with a deterministic pattern so the
//! checksum is the same for every run and every traversal order.

pub mod aligned;

pub use aligned::AlignedMatrix;
