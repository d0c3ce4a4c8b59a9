//! Traversal mode selected on the command line.

use crate::error::BenchError;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

/// Which loop is outer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rows outer, columns inner: stride 1.
    RowMajor,
    /// Columns outer, rows inner: stride N.
    ColumnMajor,
}

impl Mode {
    /// Label for the timing line, padded so both labels line up.
    pub fn label(self) -> &'static str {
        match self {
            Mode::RowMajor => "Por filas:   ",
            Mode::ColumnMajor => "Por columnas: ",
        }
    }

    /// Parses a raw command-line argument.
    ///
    /// Only the first byte matters: `f`/`r` for rows, `c` for columns.
    /// Matching is case-sensitive, so `filas`, `f` and `rows` all work but
    /// `Filas` does not. The rest of the argument need not be valid UTF-8.
    pub fn from_os_str(arg: &OsStr) -> Result<Self, BenchError> {
        match arg.as_encoded_bytes().first() {
            Some(b'f') | Some(b'r') => Ok(Mode::RowMajor),
            Some(b'c') => Ok(Mode::ColumnMajor),
            _ => Err(BenchError::InvalidMode(arg.to_string_lossy().into_owned())),
        }
    }
}

impl FromStr for Mode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_os_str(OsStr::new(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::RowMajor => write!(f, "row-major"),
            Mode::ColumnMajor => write!(f, "column-major"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_prefixes() {
        for arg in ["f", "filas", "r", "rows", "fxyz"] {
            assert_eq!(arg.parse::<Mode>().unwrap(), Mode::RowMajor, "{}", arg);
        }
    }

    #[test]
    fn test_column_major_prefixes() {
        for arg in ["c", "columnas", "cols"] {
            assert_eq!(arg.parse::<Mode>().unwrap(), Mode::ColumnMajor, "{}", arg);
        }
    }

    #[test]
    fn test_invalid_modes() {
        for arg in ["", "x", "Filas", "Columnas", "R", " f", "1"] {
            let err = arg.parse::<Mode>().unwrap_err();
            assert!(matches!(err, BenchError::InvalidMode(_)));
            assert_eq!(err.to_string(), format!("Argumento invalido: {}", arg));
        }
    }

    #[test]
    fn test_dash_prefixed_is_invalid() {
        for arg in ["-f", "--", "-h", "--help"] {
            assert!(matches!(arg.parse::<Mode>(), Err(BenchError::InvalidMode(_))), "{}", arg);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_tail_uses_first_byte() {
        use std::os::unix::ffi::OsStrExt;

        let rows = OsStr::from_bytes(b"f\xff\xfe");
        let cols = OsStr::from_bytes(b"c\xff");
        let bad = OsStr::from_bytes(b"\xfff");

        assert_eq!(Mode::from_os_str(rows).unwrap(), Mode::RowMajor);
        assert_eq!(Mode::from_os_str(cols).unwrap(), Mode::ColumnMajor);
        assert!(matches!(Mode::from_os_str(bad), Err(BenchError::InvalidMode(_))));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mode::RowMajor.label(), "Por filas:   ");
        assert_eq!(Mode::ColumnMajor.label(), "Por columnas: ");
    }
}
