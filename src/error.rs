//! Error type for the benchmark.
//!
//! Every variant is fatal: the runner prints it to stderr and exits with
//! status 1.

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Wrong number of arguments.
    #[error("{}", config::usage(program))]
    Usage { program: String },

    /// First character of the mode argument is not `f`, `r` or `c`.
    #[error("Argumento invalido: {0}")]
    InvalidMode(String),

    /// Side length is zero or the matrix would not fit in the address space.
    #[error("invalid matrix size: N = {n}")]
    InvalidSize { n: usize },

    /// The aligned allocation returned null.
    #[error("aligned_alloc ({bytes} bytes): {source}")]
    Allocation {
        bytes: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let usage = BenchError::Usage {
            program: "./cache_demo".to_string(),
        };
        assert_eq!(usage.to_string(), "Uso: ./cache_demo filas|columnas");

        let oom = BenchError::Allocation {
            bytes: 64,
            source: std::io::Error::from(std::io::ErrorKind::OutOfMemory),
        };
        assert!(oom.to_string().starts_with("aligned_alloc (64 bytes): "));
    }
}
