//! Error categories
//!
//! A category gives meaning to the integer carried by an [`ErrorCode`] or an
//! [`ErrorCondition`]. Categories are compared by identity: two categories are
//! equal only if they are the same `static` instance. Any crate can add its own
//! category by implementing [`ErrorCategory`] on a type and exposing a single
//! `static` of it; no central registry is involved.
//!
//! Two categories are predefined:
//!
//! - [`generic_category()`]: portable POSIX-like conditions ([`Errc`] values)
//! - [`system_category()`]: raw OS-level error numbers
//!
//! # Identity
//!
//! Identity is the data address of the category object paired with its
//! concrete type. Zero-sized statics of different types may share an address;
//! the type keeps them apart. Two zero-sized statics of the *same* type are
//! indistinguishable, so a type meant to back several categories must carry a
//! field (conventionally the name).

use crate::code::ErrorCode;
use crate::condition::ErrorCondition;
use crate::errc::Errc;
use std::any::TypeId;
use std::fmt;

/// Upcast to a `'static` category trait object.
///
/// Blanket-implemented for every sized [`ErrorCategory`]; lets the default
/// methods of [`ErrorCategory`] build codes and conditions that point back
/// at the category they were called on.
pub trait AsCategory {
    /// Returns `self` as a category trait object.
    fn as_category(&'static self) -> &'static dyn ErrorCategory;

    /// Concrete type of the category, part of its identity.
    fn category_type_id(&self) -> TypeId;
}

impl<T: ErrorCategory> AsCategory for T {
    fn as_category(&'static self) -> &'static dyn ErrorCategory {
        self
    }

    fn category_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

/// A named domain of error meaning.
///
/// Implementors only have to provide [`name`](Self::name) and
/// [`message`](Self::message). The remaining methods have defaults that map
/// every value onto a condition of the same category.
///
/// # Example
///
/// ```
/// use recstore_core::{ErrorCategory, ErrorCode};
///
/// struct SensorCategory {
///     name: &'static str,
/// }
///
/// impl ErrorCategory for SensorCategory {
///     fn name(&self) -> &'static str {
///         self.name
///     }
///
///     fn message(&self, value: i32) -> &'static str {
///         match value {
///             1 => "Sensor offline",
///             _ => "Unknown error",
///         }
///     }
/// }
///
/// static SENSOR: SensorCategory = SensorCategory { name: "sensor" };
///
/// let code = ErrorCode::new(1, &SENSOR);
/// assert_eq!(code.message(), "Sensor offline");
/// assert!(code.is_error());
/// ```
pub trait ErrorCategory: AsCategory + Send + Sync + 'static {
    /// Stable diagnostic identifier of the category. Never empty.
    fn name(&self) -> &'static str;

    /// Human-readable text for `value` within this category.
    ///
    /// Unrecognized values must yield `"Unknown error"`.
    fn message(&self, value: i32) -> &'static str;

    /// Portable condition for `value`.
    ///
    /// The default maps the value onto a condition of this same category.
    fn default_error_condition(&'static self, value: i32) -> ErrorCondition {
        ErrorCondition::new(value, self.as_category())
    }

    /// Whether a code of this category with `value` matches `condition`.
    ///
    /// Consulted first when an [`ErrorCode`] is compared to an
    /// [`ErrorCondition`].
    fn equivalent(&'static self, value: i32, condition: &ErrorCondition) -> bool {
        self.default_error_condition(value) == *condition
    }

    /// Whether `code` matches a condition of this category with `condition`.
    ///
    /// Consulted second, on the condition's category, when the code's
    /// category did not claim the match.
    fn equivalent_code(&'static self, code: &ErrorCode, condition: i32) -> bool {
        same_category(self.as_category(), code.category()) && code.value() == condition
    }
}

/// Identity comparison of two categories.
pub fn same_category(a: &dyn ErrorCategory, b: &dyn ErrorCategory) -> bool {
    category_key(a) == category_key(b)
}

/// Data address and concrete type of a category, used for identity, ordering
/// and hashing.
pub(crate) fn category_key(category: &dyn ErrorCategory) -> (usize, TypeId) {
    (
        category as *const _ as *const () as usize,
        category.category_type_id(),
    )
}

impl fmt::Debug for dyn ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCategory({})", self.name())
    }
}

struct GenericCategory {
    name: &'static str,
}

impl ErrorCategory for GenericCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        Errc::describe(value)
    }

    // Identity plus value; skips the round trip through default_error_condition.
    fn equivalent(&'static self, value: i32, condition: &ErrorCondition) -> bool {
        value == condition.value() && same_category(self, condition.category())
    }
}

struct SystemCategory {
    name: &'static str,
}

impl ErrorCategory for SystemCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        Errc::describe(value)
    }

    /// Known errno values (and zero) alias into the generic category;
    /// anything else stays in the system category.
    fn default_error_condition(&'static self, value: i32) -> ErrorCondition {
        if value == 0 || Errc::from_raw(value).is_some() {
            ErrorCondition::new(value, generic_category())
        } else {
            ErrorCondition::new(value, self)
        }
    }
}

static GENERIC: GenericCategory = GenericCategory { name: "generic" };
static SYSTEM: SystemCategory = SystemCategory { name: "system" };

/// The category of portable [`Errc`] conditions.
pub fn generic_category() -> &'static dyn ErrorCategory {
    &GENERIC
}

/// The category of raw OS-level error numbers.
pub fn system_category() -> &'static dyn ErrorCategory {
    &SYSTEM
}
