//! Storage medium abstraction.
//!
//! The medium is the log-structured key/value engine underneath the record
//! store. It owns wear-leveling, sector allocation, garbage collection and
//! durability; the store only hands it geometry at mount time and passes keys
//! and byte buffers through.
//!
//! All fallible medium operations follow the negative-errno convention and are
//! normalized by [`recstore_core::raw`] exactly once, in the store.
//!
//! # Available Media
//!
//! - **`MemoryMedium`**: in-memory medium with fault injection

mod memory;

pub use memory::{
    MediumOp, MediumStats, MemoryMedium, ATE_SIZE, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_SIZE,
};

/// Identifier of a record inside the medium.
///
/// Meaning and uniqueness are up to the caller.
pub type RecordKey = u16;

/// Flash page layout at a given offset, as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Offset of the first byte of the page
    pub start_offset: u64,
    /// Page size in bytes
    pub size: u32,
    /// Page index on the device
    pub index: u32,
}

/// Geometry handed to the medium when mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Partition offset on the device
    pub offset: u64,
    /// Sector size in bytes
    pub sector_size: u32,
    /// Number of sectors in the partition
    pub sector_count: u16,
}

/// Capability consumed from the external storage engine.
///
/// Return values follow the C convention: non-negative is success (a byte
/// count for `read`/`write`), negative is a negated errno.
pub trait Medium {
    /// Device name, for diagnostics.
    fn name(&self) -> &str;

    /// Whether the underlying device is ready for use.
    fn is_ready(&self) -> bool;

    /// Page layout at `offset`, or `None` if the device cannot report it.
    fn page_info(&self, offset: u64) -> Option<PageInfo>;

    /// Mount the log with the given geometry. Mounting an already mounted
    /// medium remounts it.
    fn mount(&mut self, geometry: Geometry) -> i32;

    /// Read the record under `key` into `buf`.
    ///
    /// Returns the stored record length, which may exceed `buf.len()`; at most
    /// `buf.len()` bytes are copied.
    fn read(&self, key: RecordKey, buf: &mut [u8]) -> isize;

    /// Write `data` as the record under `key`. Returns the bytes written.
    fn write(&mut self, key: RecordKey, data: &[u8]) -> isize;

    /// Erase every record.
    fn clear(&mut self) -> i32;
}
