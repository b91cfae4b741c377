//! Normalization of raw medium return values
//!
//! Storage media report results the C way: a non-negative value is success
//! (often a byte count), a negative value is a negated errno. This module is
//! the single place where that convention is interpreted. Every possible raw
//! value maps to exactly one outcome:
//!
//! | raw value            | outcome                                   |
//! |----------------------|-------------------------------------------|
//! | `>= 0`               | `Ok`                                      |
//! | `-errno`, known      | `Err`, generic category, [`Errc`] value   |
//! | negative, unknown    | `Err`, system category, opaque value      |

use crate::category::system_category;
use crate::code::ErrorCode;
use crate::errc::Errc;
use thiserror::Error;

/// A negative return value from a storage medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("medium returned {raw} ({})", Errc::describe(self.errno()))]
pub struct MediumError {
    raw: i32,
}

impl MediumError {
    /// The raw negative value as returned by the medium.
    pub fn raw(&self) -> i32 {
        self.raw
    }

    /// The positive errno. `i32::MIN` has no positive counterpart and is kept as is.
    pub fn errno(&self) -> i32 {
        self.raw.checked_neg().unwrap_or(self.raw)
    }

    /// The portable condition, if the errno is a known one.
    pub fn errc(&self) -> Option<Errc> {
        Errc::from_raw(self.errno())
    }
}

impl From<MediumError> for ErrorCode {
    fn from(err: MediumError) -> Self {
        match err.errc() {
            Some(errc) => errc.into(),
            None => ErrorCode::new(err.errno(), system_category()),
        }
    }
}

/// Normalize a status return.
pub fn check(raw: i32) -> Result<(), MediumError> {
    if raw >= 0 {
        Ok(())
    } else {
        Err(MediumError { raw })
    }
}

/// Normalize a length return (bytes read or written).
///
/// Negative values beyond the `i32` range are reported as `i32::MIN`.
pub fn check_len(raw: isize) -> Result<usize, MediumError> {
    if raw >= 0 {
        Ok(raw.unsigned_abs())
    } else {
        Err(MediumError {
            raw: i32::try_from(raw).unwrap_or(i32::MIN),
        })
    }
}

/// Convert a status return straight into an error code (zero on success).
pub fn result_to_error_code(raw: i32) -> ErrorCode {
    match check(raw) {
        Ok(()) => ErrorCode::default(),
        Err(err) => err.into(),
    }
}
