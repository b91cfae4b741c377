//! In-memory medium.
//!
//! Emulates a flash partition running a log-structured key/value store:
//!
//! - Records survive a remount; only `clear()` erases them
//! - `clear()` also unmounts: every access fails with `-EACCES` until the next mount
//! - Missing keys read as `-ENOENT`
//! - One sector is kept free for garbage collection, the rest holds records
//! - Each record costs its data (8-byte aligned) plus an allocation table entry
//! - A zero-length write deletes the record
//! - Rewriting identical data is a no-op returning 0
//!
//! Test hooks allow toggling device readiness and geometry reporting,
//! injecting one-shot failures per operation, corrupting stored bytes, and
//! counting operations.

use super::{Geometry, Medium, PageInfo, RecordKey};
use recstore_core::Errc;
use std::cell::Cell;
use std::collections::BTreeMap;

/// Default flash page size (4KB)
pub const DEFAULT_PAGE_SIZE: u32 = 4096;

/// Default number of pages on the device
pub const DEFAULT_PAGE_COUNT: u32 = 8;

/// Size of one allocation table entry in bytes
pub const ATE_SIZE: usize = 8;

/// Medium operations that accept injected faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediumOp {
    /// `mount()`
    Mount,
    /// `read()`
    Read,
    /// `write()`
    Write,
    /// `clear()`
    Clear,
}

/// Operation counters.
///
/// Every call is counted, including calls that fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediumStats {
    /// Calls to `mount()`
    pub mounts: u64,
    /// Calls to `read()`
    pub reads: u64,
    /// Calls to `write()`
    pub writes: u64,
    /// Calls to `clear()`
    pub clears: u64,
}

/// In-memory flash partition with a key/value log on top.
#[derive(Debug)]
pub struct MemoryMedium {
    name: String,
    page_size: u32,
    page_count: u32,
    ready: bool,
    geometry_available: bool,
    mounted: Option<Geometry>,
    records: BTreeMap<RecordKey, Vec<u8>>,
    faults: [Cell<Option<i32>>; 4],
    stats: Cell<MediumStats>,
}

impl Default for MemoryMedium {
    fn default() -> Self {
        MemoryMedium::new()
    }
}

impl MemoryMedium {
    /// Create a ready, unmounted, empty medium with default geometry.
    pub fn new() -> Self {
        MemoryMedium {
            name: "memory-flash".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_count: DEFAULT_PAGE_COUNT,
            ready: true,
            geometry_available: true,
            mounted: None,
            records: BTreeMap::new(),
            faults: Default::default(),
            stats: Cell::new(MediumStats::default()),
        }
    }

    /// Set the device name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set page size and page count (builder pattern).
    pub fn with_pages(mut self, page_size: u32, page_count: u32) -> Self {
        self.page_size = page_size;
        self.page_count = page_count;
        self
    }

    /// Mark the device ready or not ready.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Make `page_info` succeed or fail.
    pub fn set_geometry_available(&mut self, available: bool) {
        self.geometry_available = available;
    }

    /// Make the next call of `op` return `raw` without doing anything.
    pub fn inject_fault(&mut self, op: MediumOp, raw: i32) {
        self.faults[op as usize].set(Some(raw));
    }

    /// Flip every bit of byte `index` in the record under `key`.
    ///
    /// Returns `false` if there is no such record or byte.
    pub fn corrupt(&mut self, key: RecordKey, index: usize) -> bool {
        match self.records.get_mut(&key).and_then(|data| data.get_mut(index)) {
            Some(byte) => {
                *byte ^= 0xFF;
                true
            }
            None => false,
        }
    }

    /// Raw access to a stored record, bypassing the mount state.
    pub fn record(&self, key: RecordKey) -> Option<&[u8]> {
        self.records.get(&key).map(Vec::as_slice)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Geometry of the current mount, if mounted.
    pub fn mounted(&self) -> Option<Geometry> {
        self.mounted
    }

    /// Operation counters so far.
    pub fn stats(&self) -> MediumStats {
        self.stats.get()
    }

    fn count(&self, op: MediumOp) {
        let mut stats = self.stats.get();
        match op {
            MediumOp::Mount => stats.mounts += 1,
            MediumOp::Read => stats.reads += 1,
            MediumOp::Write => stats.writes += 1,
            MediumOp::Clear => stats.clears += 1,
        }
        self.stats.set(stats);
    }

    fn take_fault(&self, op: MediumOp) -> Option<i32> {
        self.faults[op as usize].take()
    }

    fn device_size(&self) -> u64 {
        u64::from(self.page_size) * u64::from(self.page_count)
    }

    /// Log space taken by a record of `len` bytes.
    fn record_cost(len: usize) -> usize {
        len.div_ceil(ATE_SIZE) * ATE_SIZE + ATE_SIZE
    }

    /// Space available to records: every sector but one.
    fn capacity(geometry: &Geometry) -> usize {
        geometry.sector_size as usize * (usize::from(geometry.sector_count) - 1)
    }

    /// Largest single record: one sector minus two table entries.
    fn max_record_len(geometry: &Geometry) -> usize {
        (geometry.sector_size as usize).saturating_sub(2 * ATE_SIZE)
    }
}

fn neg(errc: Errc) -> i32 {
    -errc.as_raw()
}

impl Medium for MemoryMedium {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn page_info(&self, offset: u64) -> Option<PageInfo> {
        if !self.geometry_available || self.page_size == 0 || offset >= self.device_size() {
            return None;
        }
        let page_size = u64::from(self.page_size);
        Some(PageInfo {
            start_offset: offset - offset % page_size,
            size: self.page_size,
            index: u32::try_from(offset / page_size).ok()?,
        })
    }

    fn mount(&mut self, geometry: Geometry) -> i32 {
        self.count(MediumOp::Mount);
        if let Some(raw) = self.take_fault(MediumOp::Mount) {
            return raw;
        }
        if !self.ready {
            return neg(Errc::NoSuchDevice);
        }
        if geometry.sector_count < 2
            || geometry.sector_size == 0
            || self.page_size == 0
            || geometry.sector_size % self.page_size != 0
        {
            return neg(Errc::InvalidArgument);
        }
        let span = u64::from(geometry.sector_size) * u64::from(geometry.sector_count);
        if geometry.offset.saturating_add(span) > self.device_size() {
            return neg(Errc::InvalidArgument);
        }

        self.mounted = Some(geometry);
        0
    }

    fn read(&self, key: RecordKey, buf: &mut [u8]) -> isize {
        self.count(MediumOp::Read);
        if let Some(raw) = self.take_fault(MediumOp::Read) {
            return raw as isize;
        }
        if self.mounted.is_none() {
            return neg(Errc::PermissionDenied) as isize;
        }

        match self.records.get(&key) {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                data.len() as isize
            }
            None => neg(Errc::NoSuchFileOrDirectory) as isize,
        }
    }

    fn write(&mut self, key: RecordKey, data: &[u8]) -> isize {
        self.count(MediumOp::Write);
        if let Some(raw) = self.take_fault(MediumOp::Write) {
            return raw as isize;
        }
        let Some(geometry) = self.mounted else {
            return neg(Errc::PermissionDenied) as isize;
        };
        if data.len() > Self::max_record_len(&geometry) {
            return neg(Errc::InvalidArgument) as isize;
        }

        if data.is_empty() {
            self.records.remove(&key);
            return 0;
        }
        if self.records.get(&key).is_some_and(|existing| existing == data) {
            return 0;
        }

        let used: usize = self
            .records
            .iter()
            .filter(|(k, _)| **k != key)
            .map(|(_, v)| Self::record_cost(v.len()))
            .sum();
        if used + Self::record_cost(data.len()) > Self::capacity(&geometry) {
            return neg(Errc::NoSpaceOnDevice) as isize;
        }

        self.records.insert(key, data.to_vec());
        data.len() as isize
    }

    fn clear(&mut self) -> i32 {
        self.count(MediumOp::Clear);
        if let Some(raw) = self.take_fault(MediumOp::Clear) {
            return raw;
        }
        if self.mounted.is_none() {
            return neg(Errc::PermissionDenied);
        }

        self.records.clear();
        self.mounted = None;
        0
    }
}
