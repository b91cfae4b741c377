//! Error domain framework for recstore
//!
//! Every failure in the system is reported as a `(category, integer)` pair:
//! - ErrorCategory: identity-compared domain of meaning, one `static` per domain
//! - ErrorCode: origin-specific failure value
//! - ErrorCondition: portable meaning, for cross-category comparison
//! - Errc: the POSIX condition set (generic category)
//! - raw: normalization of negative-errno medium returns
//!
//! Nothing here allocates and nothing here fails.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod code;
pub mod condition;
pub mod errc;
pub mod raw;

pub use category::{
    generic_category, same_category, system_category, AsCategory, ErrorCategory,
};
pub use code::{ErrorCode, ErrorCodeEnum, Result};
pub use condition::{ErrorCondition, ErrorConditionEnum};
pub use errc::Errc;
pub use raw::{check, check_len, result_to_error_code, MediumError};
