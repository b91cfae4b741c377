//! Message wrapper binding a value to its codec and maximum encoded size.

use crate::codec::MessageCodec;
use crate::error::MessageErrc;
use recstore_core::Result;
use std::fmt;
use tracing::warn;

/// A structured message value, its codec, and its maximum encoded size `N`.
///
/// `N` is fixed when the message type is declared and sizes every scratch
/// buffer used to store or load the message. The wrapper owns exactly one
/// value; it never caches the encoded form. The codec is borrowed and must
/// outlive the wrapper.
pub struct Message<'d, V, const N: usize> {
    value: V,
    codec: &'d dyn MessageCodec<V>,
}

impl<'d, V, const N: usize> Message<'d, V, N> {
    /// Upper bound on the encoded size of this message type.
    pub const MAXIMUM_ENCODED_SIZE: usize = N;

    /// Create a message holding the default value.
    pub fn new(codec: &'d dyn MessageCodec<V>) -> Self
    where
        V: Default,
    {
        Self::with_value(codec, V::default())
    }

    /// Create a message holding `value`.
    pub fn with_value(codec: &'d dyn MessageCodec<V>, value: V) -> Self {
        Message { value, codec }
    }

    /// Shared access to the contained value.
    pub fn data(&self) -> &V {
        &self.value
    }

    /// Mutable access to the contained value.
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consume the wrapper, returning the value.
    pub fn into_inner(self) -> V {
        self.value
    }

    /// The codec describing the wire shape.
    pub fn codec(&self) -> &'d dyn MessageCodec<V> {
        self.codec
    }

    /// Encode the value into `buffer`.
    ///
    /// At most `N` bytes of `buffer` are used. Returns the prefix of `buffer`
    /// holding the encoded form, or an `EncodeFailure` code.
    pub fn encode<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b [u8]> {
        let capacity = buffer.len().min(N);

        let written = match self.codec.encode(&self.value, &mut buffer[..capacity]) {
            Ok(written) if written <= capacity => written,
            Ok(written) => {
                warn!(
                    codec = self.codec.name(),
                    written, capacity, "Codec reported more bytes than the buffer holds"
                );
                return Err(MessageErrc::EncodeFailure.into());
            }
            Err(err) => {
                warn!(codec = self.codec.name(), error = %err, "Encoding failed");
                return Err(MessageErrc::EncodeFailure.into());
            }
        };

        Ok(&buffer[..written])
    }

    /// Decode `buffer` into the contained value.
    ///
    /// On failure the value keeps its previous content and a
    /// `DecodeFailure` code is returned.
    pub fn decode(&mut self, buffer: &[u8]) -> Result<()> {
        self.codec.decode(buffer, &mut self.value).map_err(|err| {
            warn!(
                codec = self.codec.name(),
                len = buffer.len(),
                error = %err,
                "Decoding failed"
            );
            MessageErrc::DecodeFailure.into()
        })
    }
}

impl<V: fmt::Debug, const N: usize> fmt::Debug for Message<'_, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("codec", &self.codec.name())
            .field("maximum_encoded_size", &N)
            .field("value", &self.value)
            .finish()
    }
}
