//! Message adapter for recstore
//!
//! Binds a structured message type to:
//! - MessageCodec: the external wire codec (descriptor), borrowed
//! - a maximum encoded size, fixed as a const generic
//!
//! and exposes bounded encode/decode reporting through the error domain.
//! BincodeCodec is a ready-made codec with a CRC32 trailer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod framed;
pub mod message;

pub use codec::{CodecFailure, MessageCodec};
pub use error::{message_category, MessageErrc};
pub use framed::{BincodeCodec, CHECKSUM_LEN};
pub use message::Message;
