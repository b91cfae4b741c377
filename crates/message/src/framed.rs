//! Checksummed bincode codec.
//!
//! ## Frame Format
//!
//! ```text
//! [payload: bincode bytes][crc32: u32 LE]
//! ```
//!
//! - **payload**: bincode-serialized value (fixed-width little-endian integers)
//! - **crc32**: CRC32 over the payload
//!
//! The checksum turns any single corrupted byte into a decode failure instead
//! of a silently different value.

use crate::codec::{CodecFailure, MessageCodec};
use byteorder::{ByteOrder, LittleEndian};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Size of the trailing checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// bincode codec with a CRC32 trailer.
///
/// `new` is `const`, so descriptors can be declared as statics next to the
/// message type:
///
/// ```
/// use recstore_message::{BincodeCodec, MessageCodec};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Counter {
///     count: u32,
/// }
///
/// static COUNTER: BincodeCodec<Counter> = BincodeCodec::new("Counter");
///
/// let mut buf = [0u8; 16];
/// let written = COUNTER.encode(&Counter { count: 3 }, &mut buf).unwrap();
/// assert_eq!(written, 8);
///
/// let mut decoded = Counter::default();
/// COUNTER.decode(&buf[..written], &mut decoded).unwrap();
/// assert_eq!(decoded, Counter { count: 3 });
/// ```
pub struct BincodeCodec<V> {
    name: &'static str,
    _marker: PhantomData<fn() -> V>,
}

impl<V> BincodeCodec<V> {
    /// Create a codec for the message type named `name`.
    pub const fn new(name: &'static str) -> Self {
        BincodeCodec {
            name,
            _marker: PhantomData,
        }
    }
}

impl<V> fmt::Debug for BincodeCodec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BincodeCodec")
            .field("name", &self.name)
            .finish()
    }
}

impl<V: Serialize + DeserializeOwned> MessageCodec<V> for BincodeCodec<V> {
    fn name(&self) -> &str {
        self.name
    }

    fn encode(&self, value: &V, out: &mut [u8]) -> Result<usize, CodecFailure> {
        let payload_len = bincode::serialized_size(value)
            .map_err(|e| CodecFailure::Serialize(e.to_string()))?;
        let payload_len = usize::try_from(payload_len)
            .map_err(|e| CodecFailure::Serialize(e.to_string()))?;

        let needed = payload_len + CHECKSUM_LEN;
        if needed > out.len() {
            return Err(CodecFailure::BufferTooSmall {
                needed,
                capacity: out.len(),
            });
        }

        let (payload, trailer) = out.split_at_mut(payload_len);
        bincode::serialize_into(&mut *payload, value)
            .map_err(|e| CodecFailure::Serialize(e.to_string()))?;
        LittleEndian::write_u32(&mut trailer[..CHECKSUM_LEN], crc32fast::hash(payload));

        Ok(needed)
    }

    fn decode(&self, input: &[u8], value: &mut V) -> Result<(), CodecFailure> {
        if input.len() < CHECKSUM_LEN {
            return Err(CodecFailure::Truncated { len: input.len() });
        }

        let (payload, trailer) = input.split_at(input.len() - CHECKSUM_LEN);
        let expected = LittleEndian::read_u32(trailer);
        let actual = crc32fast::hash(payload);
        if expected != actual {
            return Err(CodecFailure::ChecksumMismatch { expected, actual });
        }

        *value =
            bincode::deserialize(payload).map_err(|e| CodecFailure::Deserialize(e.to_string()))?;
        Ok(())
    }
}
