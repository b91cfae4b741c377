//! Error Domain Tests
//!
//! Cross-crate checks of the category model:
//! - zero is "no error" in every category
//! - equal values in distinct categories are distinct codes
//! - code/condition comparison asks the code's category first, then the condition's

use recstore::{
    generic_category, medium_category, message_category, result_to_error_code, same_category,
    store_category, system_category, Errc, ErrorCategory, ErrorCode, ErrorCondition,
    MediumErrc, MessageErrc, StoreErrc,
};
use std::collections::BTreeSet;

fn all_categories() -> [&'static dyn ErrorCategory; 5] {
    [
        generic_category(),
        system_category(),
        medium_category(),
        store_category(),
        message_category(),
    ]
}

/// Flash driver codes that know which portable conditions they resemble.
struct FlashDriverCategory {
    name: &'static str,
}

impl ErrorCategory for FlashDriverCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        match value {
            1 => "Erase in progress",
            2 => "Write protected",
            _ => "Unknown error",
        }
    }

    fn equivalent(&'static self, value: i32, condition: &ErrorCondition) -> bool {
        match value {
            1 => *condition == ErrorCondition::from(Errc::OPERATION_WOULD_BLOCK),
            2 => *condition == ErrorCondition::from(Errc::ReadOnlyFileSystem),
            _ => false,
        }
    }
}

static FLASH_DRIVER: FlashDriverCategory = FlashDriverCategory {
    name: "flash_driver",
};

/// A condition set that recognizes store codes from the outside.
struct RetryableCategory {
    name: &'static str,
}

impl ErrorCategory for RetryableCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        match value {
            1 => "Retryable",
            _ => "Unknown error",
        }
    }

    fn equivalent_code(&'static self, code: &ErrorCode, condition: i32) -> bool {
        condition == 1
            && (*code == ErrorCode::from(Errc::DeviceOrResourceBusy)
                || *code == ErrorCode::from(MediumErrc::DeviceNotReady))
    }
}

static RETRYABLE: RetryableCategory = RetryableCategory { name: "retryable" };

#[test]
fn test_zero_is_no_error_in_every_category() {
    assert!(!ErrorCode::default().is_error());
    for category in all_categories() {
        let code = ErrorCode::new(0, category);
        assert!(!code.is_error(), "{} zero is an error", category.name());
        assert!(code.into_result().is_ok());
    }
    assert!(!result_to_error_code(0).is_error());
    assert!(!result_to_error_code(12).is_error());
}

#[test]
fn test_same_value_distinct_categories() {
    let categories = all_categories();
    for (i, a) in categories.iter().enumerate() {
        for b in &categories[i + 1..] {
            assert!(!same_category(*a, *b));
            assert_ne!(ErrorCode::new(5, *a), ErrorCode::new(5, *b));
        }
    }
}

#[test]
fn test_categories_order_codes_consistently() {
    let codes: BTreeSet<ErrorCode> = all_categories()
        .iter()
        .flat_map(|c| [ErrorCode::new(1, *c), ErrorCode::new(2, *c)])
        .collect();
    assert_eq!(codes.len(), 10);
}

#[test]
fn test_category_names_are_stable() {
    let names: Vec<&str> = all_categories().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "generic",
            "system",
            "storage_medium",
            "record_store",
            "message_codec"
        ]
    );
}

#[test]
fn test_code_category_claims_generic_condition() {
    let erase_busy = ErrorCode::new(1, &FLASH_DRIVER);
    assert!(erase_busy.matches(Errc::OPERATION_WOULD_BLOCK));
    assert!(erase_busy == ErrorCondition::from(Errc::ResourceUnavailableTryAgain));
    assert!(!erase_busy.matches(Errc::ReadOnlyFileSystem));

    let protected = ErrorCode::new(2, &FLASH_DRIVER);
    assert!(protected.matches(Errc::ReadOnlyFileSystem));

    // Still not equal as codes
    assert_ne!(erase_busy, ErrorCode::from(Errc::OPERATION_WOULD_BLOCK));
}

#[test]
fn test_condition_category_consulted_second() {
    let retryable = ErrorCondition::new(1, &RETRYABLE);

    assert!(ErrorCode::from(Errc::DeviceOrResourceBusy) == retryable);
    assert!(ErrorCode::from(MediumErrc::DeviceNotReady) == retryable);
    assert!(retryable == ErrorCode::from(MediumErrc::DeviceNotReady));

    assert!(ErrorCode::from(StoreErrc::WrongDataSize) != retryable);
    assert!(ErrorCode::from(MessageErrc::DecodeFailure) != retryable);
}

#[test]
fn test_generic_category_knows_nothing_of_domains() {
    // The generic category only claims its own values
    let code = ErrorCode::new(1, &FLASH_DRIVER);
    assert!(!generic_category().equivalent_code(&code, Errc::OPERATION_WOULD_BLOCK.as_raw()));
    assert!(!ErrorCode::from(StoreErrc::WrongDataSize).matches(Errc::NoSuchProcess));
}

#[test]
fn test_raw_returns_normalize_once() {
    assert_eq!(result_to_error_code(-28), ErrorCode::from(Errc::NoSpaceOnDevice));
    assert!(result_to_error_code(-28).matches(Errc::NoSpaceOnDevice));

    let opaque = result_to_error_code(-9000);
    assert!(same_category(opaque.category(), system_category()));
    assert_eq!(opaque.message(), "Unknown error");

    let extreme = result_to_error_code(i32::MIN);
    assert!(extreme.is_error());
}

#[test]
fn test_display_names_origin() {
    let code = ErrorCode::from(StoreErrc::WrongDataSize);
    assert_eq!(code.to_string(), "Wrong data size [record_store:3]");

    let code = ErrorCode::from(MessageErrc::EncodeFailure);
    assert_eq!(code.to_string(), "Encode failure [message_codec:1]");
}
