//! Message codec trait definitions.

/// Wire codec for a structured message type `V`.
///
/// A codec instance plays the role of the message descriptor: it knows the
/// wire shape of `V` and nothing about where the bytes end up. The
/// [`Message`](crate::Message) wrapper holds a non-owning reference to one.
pub trait MessageCodec<V> {
    /// Diagnostic name of the message type.
    fn name(&self) -> &str;

    /// Encode `value` into `out`.
    ///
    /// Returns the number of bytes written, which never exceeds `out.len()`.
    fn encode(&self, value: &V, out: &mut [u8]) -> Result<usize, CodecFailure>;

    /// Decode `input` into `value`.
    ///
    /// On failure `value` is left untouched.
    fn decode(&self, input: &[u8], value: &mut V) -> Result<(), CodecFailure>;
}

/// Codec failures, as reported by a [`MessageCodec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecFailure {
    /// Encoded form does not fit into the output buffer.
    #[error("Encoded size {needed} exceeds buffer capacity {capacity}")]
    BufferTooSmall {
        /// Bytes the encoded form requires
        needed: usize,
        /// Bytes available
        capacity: usize,
    },

    /// Value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Bytes could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Input is shorter than the smallest valid frame.
    #[error("Truncated input: {len} bytes")]
    Truncated {
        /// Bytes present
        len: usize,
    },

    /// Frame checksum does not match its payload.
    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum stored in the frame
        expected: u32,
        /// Checksum computed over the payload
        actual: u32,
    },
}
