//! Storage error categories.
//!
//! Two categories, so callers can branch on origin:
//!
//! - `storage_medium`: the medium could not be brought up
//! - `record_store`: the medium answered, but not in the shape the store asked for
//!
//! Raw negative medium returns do not live here; they are normalized into the
//! generic or system category by [`recstore_core::raw`].

use recstore_core::{Errc, ErrorCategory, ErrorCode, ErrorCodeEnum, ErrorCondition};

/// Failures bringing up the medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MediumErrc {
    /// The device reported itself not ready.
    DeviceNotReady = 1,
    /// The device could not report its page layout.
    GeometryUnavailable = 2,
}

impl MediumErrc {
    /// Reverse of the `repr(u8)` discriminant.
    pub fn from_raw(value: i32) -> Option<MediumErrc> {
        match value {
            1 => Some(MediumErrc::DeviceNotReady),
            2 => Some(MediumErrc::GeometryUnavailable),
            _ => None,
        }
    }
}

/// Failures of typed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StoreErrc {
    /// The stored record length differs from the requested type's size.
    WrongDataSize = 3,
}

impl StoreErrc {
    /// Reverse of the `repr(u8)` discriminant.
    pub fn from_raw(value: i32) -> Option<StoreErrc> {
        match value {
            3 => Some(StoreErrc::WrongDataSize),
            _ => None,
        }
    }
}

struct MediumCategory {
    name: &'static str,
}

impl ErrorCategory for MediumCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        match MediumErrc::from_raw(value) {
            Some(MediumErrc::DeviceNotReady) => "Device is not ready",
            Some(MediumErrc::GeometryUnavailable) => "Unable to get page info",
            None => "Unknown error",
        }
    }

    /// A device that is not ready resembles a missing device.
    fn default_error_condition(&'static self, value: i32) -> ErrorCondition {
        match MediumErrc::from_raw(value) {
            Some(MediumErrc::DeviceNotReady) => Errc::NoSuchDevice.into(),
            _ => ErrorCondition::new(value, self),
        }
    }
}

struct StoreCategory {
    name: &'static str,
}

impl ErrorCategory for StoreCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        match StoreErrc::from_raw(value) {
            Some(StoreErrc::WrongDataSize) => "Wrong data size",
            None => "Unknown error",
        }
    }
}

static MEDIUM_CATEGORY: MediumCategory = MediumCategory {
    name: "storage_medium",
};

static STORE_CATEGORY: StoreCategory = StoreCategory {
    name: "record_store",
};

/// The category of [`MediumErrc`] codes.
pub fn medium_category() -> &'static dyn ErrorCategory {
    &MEDIUM_CATEGORY
}

/// The category of [`StoreErrc`] codes.
pub fn store_category() -> &'static dyn ErrorCategory {
    &STORE_CATEGORY
}

impl ErrorCodeEnum for MediumErrc {
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self as i32, medium_category())
    }
}

impl ErrorCodeEnum for StoreErrc {
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self as i32, store_category())
    }
}
