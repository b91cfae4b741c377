//! Error codes
//!
//! An [`ErrorCode`] records where a failure originated (its category) and what
//! happened (the integer value). Value `0` means "no error" in every category.
//!
//! Domain enums become error codes by implementing [`ErrorCodeEnum`]; the
//! blanket `From` impl then lets them be used with `?` and `.into()`:
//!
//! ```
//! use recstore_core::{Errc, ErrorCode};
//!
//! fn reserve() -> recstore_core::Result<()> {
//!     Err(Errc::NoSpaceOnDevice.into())
//! }
//!
//! let err = reserve().unwrap_err();
//! assert_eq!(err, ErrorCode::from(Errc::NoSpaceOnDevice));
//! ```

use crate::category::{category_key, same_category, system_category, ErrorCategory};
use crate::condition::ErrorCondition;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Result type alias for operations reporting through the error domain
pub type Result<T> = std::result::Result<T, ErrorCode>;

/// Registration of an enum as a source of error codes.
///
/// Implementors describe how each enum value maps onto a code in their own
/// category. `From<E> for ErrorCode` is provided for every implementor.
pub trait ErrorCodeEnum: Copy {
    /// Convert the enum value into an error code.
    fn make_error_code(self) -> ErrorCode;
}

/// An origin-specific error: `(category, value)`.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: i32,
    category: &'static dyn ErrorCategory,
}

impl ErrorCode {
    /// Create an error code in `category`.
    pub fn new(value: i32, category: &'static dyn ErrorCategory) -> Self {
        ErrorCode { value, category }
    }

    /// Replace value and category.
    pub fn assign(&mut self, value: i32, category: &'static dyn ErrorCategory) {
        self.value = value;
        self.category = category;
    }

    /// Reset to the zero value in the system category.
    pub fn clear(&mut self) {
        self.assign(0, system_category());
    }

    /// The integer value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The category the value belongs to.
    pub fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    /// The portable condition this code maps onto.
    pub fn default_error_condition(&self) -> ErrorCondition {
        self.category.default_error_condition(self.value)
    }

    /// Diagnostic text for this code. Not meant for branching.
    pub fn message(&self) -> &'static str {
        self.category.message(self.value)
    }

    /// True iff the value is non-zero.
    pub fn is_error(&self) -> bool {
        self.value != 0
    }

    /// `Ok(())` for the zero value, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<()> {
        if self.is_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// Compare against anything convertible into a condition.
    pub fn matches(&self, condition: impl Into<ErrorCondition>) -> bool {
        *self == condition.into()
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::new(0, system_category())
    }
}

impl<E: ErrorCodeEnum> From<E> for ErrorCode {
    fn from(value: E) -> Self {
        value.make_error_code()
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        same_category(self.category, other.category) && self.value == other.value
    }
}

impl Eq for ErrorCode {}

/// The code's category is asked first, then the condition's.
impl PartialEq<ErrorCondition> for ErrorCode {
    fn eq(&self, other: &ErrorCondition) -> bool {
        self.category.equivalent(self.value, other)
            || other.category().equivalent_code(self, other.value())
    }
}

impl PartialOrd for ErrorCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorCode {
    fn cmp(&self, other: &Self) -> Ordering {
        category_key(self.category)
            .cmp(&category_key(other.category))
            .then(self.value.cmp(&other.value))
    }
}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        category_key(self.category).hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}:{}]",
            self.message(),
            self.category.name(),
            self.value
        )
    }
}

impl std::error::Error for ErrorCode {}
