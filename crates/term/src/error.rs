//! Startup errors: everything that can stop the animation before the first frame.

use std::io;

use thiserror::Error;

use crate::types::{Dims, MIN_COLUMNS, MIN_ROWS};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("unable to read terminal size")]
    SizeUnavailable(#[source] io::Error),

    #[error(
        "terminal is {columns}x{rows}, need at least {min_columns}x{min_rows}",
        min_columns = MIN_COLUMNS,
        min_rows = MIN_ROWS
    )]
    TooSmall { columns: u16, rows: u16 },

    #[error("unable to allocate {bytes} bytes for frame buffers")]
    OutOfMemory { bytes: usize },
}

/// Reject terminals below the minimum usable size.
pub fn check_dims(dims: Dims) -> Result<Dims, StartupError> {
    if dims.meets_minimum() {
        Ok(dims)
    } else {
        Err(StartupError::TooSmall {
            columns: dims.columns,
            rows: dims.rows,
        })
    }
}

/// Allocate `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, StartupError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| StartupError::OutOfMemory {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    v.resize(len, value);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dims_accepts_minimum() {
        assert!(check_dims(Dims::new(20, 10)).is_ok());
    }

    #[test]
    fn test_check_dims_rejects_small_terminal() {
        let err = check_dims(Dims::new(19, 40)).unwrap_err();
        assert!(matches!(
            err,
            StartupError::TooSmall {
                columns: 19,
                rows: 40
            }
        ));
        assert_eq!(err.to_string(), "terminal is 19x40, need at least 20x10");
    }

    #[test]
    fn test_try_filled() {
        let v = try_filled(16, 7u8).unwrap();
        assert_eq!(v, vec![7u8; 16]);
    }

    #[test]
    fn test_try_filled_reports_impossible_allocation() {
        let err = try_filled(usize::MAX / 2, 0u64).unwrap_err();
        assert!(matches!(err, StartupError::OutOfMemory { .. }));
    }
}
