//! Error conditions
//!
//! An [`ErrorCondition`] has the same shape as an [`ErrorCode`] but is used on
//! the testing side: callers compare codes against conditions to ask "does
//! this failure mean X?" without caring which subsystem produced it.

use crate::category::{category_key, generic_category, same_category, ErrorCategory};
use crate::code::ErrorCode;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Registration of an enum as a source of error conditions.
pub trait ErrorConditionEnum: Copy {
    /// Convert the enum value into an error condition.
    fn make_error_condition(self) -> ErrorCondition;
}

/// A portable, origin-independent error meaning: `(category, value)`.
#[derive(Clone, Copy)]
pub struct ErrorCondition {
    value: i32,
    category: &'static dyn ErrorCategory,
}

impl ErrorCondition {
    /// Create a condition in `category`.
    pub fn new(value: i32, category: &'static dyn ErrorCategory) -> Self {
        ErrorCondition { value, category }
    }

    /// Replace value and category.
    pub fn assign(&mut self, value: i32, category: &'static dyn ErrorCategory) {
        self.value = value;
        self.category = category;
    }

    /// Reset to the zero value in the generic category.
    pub fn clear(&mut self) {
        self.assign(0, generic_category());
    }

    /// The integer value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The category the value belongs to.
    pub fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    /// Diagnostic text for this condition.
    pub fn message(&self) -> &'static str {
        self.category.message(self.value)
    }

    /// True iff the value is non-zero.
    pub fn is_error(&self) -> bool {
        self.value != 0
    }
}

impl Default for ErrorCondition {
    fn default() -> Self {
        ErrorCondition::new(0, generic_category())
    }
}

impl<E: ErrorConditionEnum> From<E> for ErrorCondition {
    fn from(value: E) -> Self {
        value.make_error_condition()
    }
}

impl PartialEq for ErrorCondition {
    fn eq(&self, other: &Self) -> bool {
        same_category(self.category, other.category) && self.value == other.value
    }
}

impl Eq for ErrorCondition {}

impl PartialEq<ErrorCode> for ErrorCondition {
    fn eq(&self, other: &ErrorCode) -> bool {
        other == self
    }
}

impl PartialOrd for ErrorCondition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorCondition {
    fn cmp(&self, other: &Self) -> Ordering {
        category_key(self.category)
            .cmp(&category_key(other.category))
            .then(self.value.cmp(&other.value))
    }
}

impl Hash for ErrorCondition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        category_key(self.category).hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCondition")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.value)
    }
}
