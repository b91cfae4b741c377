//! Codec error category.
//!
//! Encode and decode failures get their own category so a caller can tell
//! "the record was unparsable" apart from "the record could not be read".

use recstore_core::{ErrorCategory, ErrorCode, ErrorCodeEnum};

/// Failures of the message adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageErrc {
    /// The value could not be encoded into the bounded buffer.
    EncodeFailure = 1,
    /// The bytes could not be decoded into a value.
    DecodeFailure = 2,
}

impl MessageErrc {
    /// Reverse of the `repr(u8)` discriminant.
    pub fn from_raw(value: i32) -> Option<MessageErrc> {
        match value {
            1 => Some(MessageErrc::EncodeFailure),
            2 => Some(MessageErrc::DecodeFailure),
            _ => None,
        }
    }
}

struct MessageCategory {
    name: &'static str,
}

impl ErrorCategory for MessageCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> &'static str {
        match MessageErrc::from_raw(value) {
            Some(MessageErrc::EncodeFailure) => "Encode failure",
            Some(MessageErrc::DecodeFailure) => "Decode failure",
            None => "Unknown error",
        }
    }
}

static MESSAGE_CATEGORY: MessageCategory = MessageCategory {
    name: "message_codec",
};

/// The category of [`MessageErrc`] codes.
pub fn message_category() -> &'static dyn ErrorCategory {
    &MESSAGE_CATEGORY
}

impl ErrorCodeEnum for MessageErrc {
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self as i32, message_category())
    }
}
