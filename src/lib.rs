//! recstore - Typed persistent record store with an extensible error domain
//!
//! Values live under small integer keys on a log-structured medium and are
//! accessed in one of three shapes: fixed-size scalars, raw byte spans, or
//! structured messages through a codec. Every failure is an [`ErrorCode`]:
//! a `(category, value)` pair that callers branch on by category.
//!
//! # Quick Start
//!
//! ```
//! use recstore::{Errc, ErrorCode, MemoryMedium, RecordStore};
//!
//! let mut store = RecordStore::new(MemoryMedium::new());
//! store.init()?;
//!
//! store.write(1, &5u32)?;
//! assert_eq!(store.read::<u32>(1)?, 5);
//!
//! // Nothing stored under key 2
//! let err = store.read::<u32>(2).unwrap_err();
//! assert!(err.matches(Errc::NoSuchFileOrDirectory));
//! # Ok::<(), ErrorCode>(())
//! ```
//!
//! # Crates
//!
//! - `recstore-core`: categories, codes, conditions, raw return normalization
//! - `recstore-storage`: the record store and the medium capability
//! - `recstore-message`: the message adapter and codecs (feature `message`)

pub use recstore_core::{
    check, check_len, generic_category, result_to_error_code, same_category, system_category,
    AsCategory, Errc, ErrorCategory, ErrorCode, ErrorCodeEnum, ErrorCondition, ErrorConditionEnum,
    MediumError, Result,
};
pub use recstore_storage::{
    medium_category, store_category, Geometry, Medium, MediumErrc, MediumOp, MediumStats,
    MemoryMedium, PageInfo, RecordKey, RecordStore, Scalar, StoreConfig, StoreConfigError,
    StoreErrc,
};

#[cfg(feature = "message")]
pub use recstore_message::{
    message_category, BincodeCodec, CodecFailure, Message, MessageCodec, MessageErrc,
    CHECKSUM_LEN,
};
