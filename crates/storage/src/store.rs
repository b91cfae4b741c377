//! Record store.
//!
//! A thin handle over a [`Medium`] exposing three views of a record:
//!
//! - **Typed**: a [`Scalar`] of fixed size; any other stored length is `WrongDataSize`
//! - **Raw**: an opaque byte span of caller-given capacity
//! - **Message**: a structured value through its codec, bounded by the message's maximum size
//!
//! Every view funnels through the same byte primitive, and every raw medium
//! return is normalized exactly once, by [`recstore_core::raw`].
//!
//! # Lifecycle
//!
//! `init()` mounts the medium and may be called again at any time to remount.
//! `clear()` erases every record and leaves the medium unmounted: access fails
//! with a medium error (`PermissionDenied`) until the next `init()`.
//!
//! # Example
//!
//! ```
//! use recstore_storage::{MemoryMedium, RecordStore};
//!
//! let mut store = RecordStore::new(MemoryMedium::new());
//! store.init().unwrap();
//!
//! store.write(1, &42u32).unwrap();
//! assert_eq!(store.read::<u32>(1).unwrap(), 42);
//! ```

use crate::config::{StoreConfig, StoreConfigError};
use crate::error::{MediumErrc, StoreErrc};
use crate::medium::{Geometry, Medium, RecordKey};
use crate::scalar::Scalar;
use recstore_core::{check, check_len, ErrorCode, Result};
use tracing::{debug, error, warn};

#[cfg(feature = "message")]
use recstore_message::{Message, MessageErrc};

/// Keyed persistence over a log-structured medium.
///
/// Not synchronized: one owner issues operations at a time. Wrap it in a
/// mutex to share it.
#[derive(Debug)]
pub struct RecordStore<M: Medium> {
    medium: M,
    config: StoreConfig,
}

impl<M: Medium> RecordStore<M> {
    /// Create a store with the default configuration. Call `init()` before use.
    pub fn new(medium: M) -> Self {
        RecordStore {
            medium,
            config: StoreConfig::default(),
        }
    }

    /// Create a store with a validated configuration.
    pub fn with_config(
        medium: M,
        config: StoreConfig,
    ) -> std::result::Result<Self, StoreConfigError> {
        config.validate()?;
        Ok(RecordStore { medium, config })
    }

    /// The underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Mutable access to the underlying medium.
    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Consume the store, returning the medium.
    pub fn into_medium(self) -> M {
        self.medium
    }

    /// Check the device and mount the medium.
    ///
    /// The sector size is the page size reported at the partition offset.
    /// Safe to call again after success; the medium is remounted.
    ///
    /// # Errors
    ///
    /// - `DeviceNotReady` if the device is not ready
    /// - `GeometryUnavailable` if the page layout cannot be read
    /// - the normalized medium error if mounting fails
    pub fn init(&mut self) -> Result<()> {
        let device = self.medium.name();
        if !self.medium.is_ready() {
            error!(device, "Flash device is not ready");
            return Err(MediumErrc::DeviceNotReady.into());
        }

        let offset = self.config.partition_offset;
        let Some(page) = self.medium.page_info(offset) else {
            error!(device, offset, "Unable to get page info");
            return Err(MediumErrc::GeometryUnavailable.into());
        };

        let geometry = Geometry {
            offset,
            sector_size: page.size,
            sector_count: self.config.sector_count,
        };
        check(self.medium.mount(geometry)).map_err(|err| {
            error!(device = self.medium.name(), ?geometry, error = %err, "Mount failed");
            ErrorCode::from(err)
        })?;

        debug!(
            device = self.medium.name(),
            offset,
            sector_size = geometry.sector_size,
            sector_count = geometry.sector_count,
            "Medium mounted"
        );
        Ok(())
    }

    /// Erase every record.
    ///
    /// The medium is left unmounted: call `init()` again before further access.
    pub fn clear(&mut self) -> Result<()> {
        check(self.medium.clear())?;
        debug!(device = self.medium.name(), "Medium cleared");
        Ok(())
    }

    /// Read a fixed-size value.
    ///
    /// # Errors
    ///
    /// - the normalized medium error, category preserved
    /// - `WrongDataSize` if the stored record is not exactly `T::size()` bytes
    pub fn read<T: Scalar>(&self, key: RecordKey) -> Result<T> {
        let mut bytes = T::zeroed();
        let stored = check_len(self.medium.read(key, bytes.as_mut()))?;

        if stored != T::size() {
            warn!(
                key,
                stored,
                expected = T::size(),
                "Stored record size does not match requested type"
            );
            return Err(StoreErrc::WrongDataSize.into());
        }

        Ok(T::from_bytes(&bytes))
    }

    /// Write a fixed-size value as exactly `T::size()` bytes.
    pub fn write<T: Scalar>(&mut self, key: RecordKey, value: &T) -> Result<()> {
        self.write_bytes(key, value.to_bytes().as_ref())
    }

    /// Read a record into `buffer`.
    ///
    /// Returns the prefix of `buffer` holding the record. A record longer than
    /// `buffer` is cut to its capacity.
    pub fn read_bytes<'b>(&self, key: RecordKey, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
        let stored = check_len(self.medium.read(key, buffer))?;
        let len = stored.min(buffer.len());
        Ok(&mut buffer[..len])
    }

    /// Write `data` verbatim as the record under `key`.
    ///
    /// An empty `data` follows the medium's contract, which treats a
    /// zero-length write as a delete: the record is removed and a later read
    /// fails with `NoSuchFileOrDirectory`. The same holds for `write` with a
    /// zero-sized scalar such as `[u8; 0]`.
    pub fn write_bytes(&mut self, key: RecordKey, data: &[u8]) -> Result<()> {
        check_len(self.medium.write(key, data))?;
        Ok(())
    }

    /// Read a record and decode it into `message`.
    ///
    /// Uses a stack buffer of the message's maximum encoded size. A failed
    /// read is returned as is and nothing is decoded. A record longer than the
    /// maximum encoded size, or an unparsable one, is a `DecodeFailure`.
    #[cfg(feature = "message")]
    pub fn read_message<V, const N: usize>(
        &self,
        key: RecordKey,
        message: &mut Message<'_, V, N>,
    ) -> Result<()> {
        let mut buffer = [0u8; N];
        let stored = check_len(self.medium.read(key, &mut buffer))?;

        if stored > N {
            warn!(
                key,
                stored,
                maximum = N,
                codec = message.codec().name(),
                "Stored record exceeds maximum encoded message size"
            );
            return Err(MessageErrc::DecodeFailure.into());
        }

        message.decode(&buffer[..stored])
    }

    /// Encode `message` and write it under `key`.
    ///
    /// Uses a stack buffer of the message's maximum encoded size. If encoding
    /// fails the medium is not touched and `EncodeFailure` is returned.
    #[cfg(feature = "message")]
    pub fn write_message<V, const N: usize>(
        &mut self,
        key: RecordKey,
        message: &Message<'_, V, N>,
    ) -> Result<()> {
        let mut buffer = [0u8; N];
        let encoded = message.encode(&mut buffer)?;
        self.write_bytes(key, encoded)
    }
}
