//! Record storage for recstore
//!
//! This crate implements keyed persistence on top of a log-structured medium:
//! - Medium: the external key/value engine capability (mount, read, write, clear)
//! - MemoryMedium: in-memory medium with fault injection for tests
//! - RecordStore: typed, raw and message access to records
//! - Scalar: fixed-size plain values
//! - StoreConfig: partition placement
//!
//! Failures are reported as `recstore_core::ErrorCode`s in the
//! `storage_medium`, `record_store`, generic and system categories, plus
//! `message_codec` when the `message` feature is enabled.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod medium;
pub mod scalar;
pub mod store;

pub use config::{StoreConfig, StoreConfigError};
pub use error::{medium_category, store_category, MediumErrc, StoreErrc};
pub use medium::{
    Geometry, Medium, MediumOp, MediumStats, MemoryMedium, PageInfo, RecordKey, ATE_SIZE,
    DEFAULT_PAGE_COUNT, DEFAULT_PAGE_SIZE,
};
pub use scalar::Scalar;
pub use store::RecordStore;
