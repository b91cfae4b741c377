//! Fixed-size plain values.
//!
//! A [`Scalar`] has a byte representation of a known, constant size. Typed
//! record access reads and writes exactly that many bytes, and treats any other
//! stored length as a type mismatch.
//!
//! All multi-byte primitives are encoded little-endian.

use byteorder::{ByteOrder, LittleEndian};

/// A value with a constant-size byte representation.
///
/// Implemented for every primitive integer, `f32`, `f64`, `bool` and byte
/// arrays. Plain structs implement it by hand:
///
/// ```
/// use recstore_storage::Scalar;
///
/// #[derive(Debug, PartialEq)]
/// struct Window {
///     start: u32,
///     end: u32,
/// }
///
/// impl Scalar for Window {
///     type Bytes = [u8; 8];
///
///     fn zeroed() -> [u8; 8] {
///         [0; 8]
///     }
///
///     fn to_bytes(&self) -> [u8; 8] {
///         let mut out = [0; 8];
///         out[..4].copy_from_slice(&self.start.to_bytes());
///         out[4..].copy_from_slice(&self.end.to_bytes());
///         out
///     }
///
///     fn from_bytes(bytes: &[u8; 8]) -> Self {
///         let (start, end) = bytes.split_at(4);
///         Window {
///             start: u32::from_bytes(&start.try_into().unwrap()),
///             end: u32::from_bytes(&end.try_into().unwrap()),
///         }
///     }
/// }
///
/// assert_eq!(Window::size(), 8);
/// let w = Window { start: 1, end: 9 };
/// assert_eq!(Window::from_bytes(&w.to_bytes()), w);
/// ```
pub trait Scalar: Sized {
    /// Byte representation, a fixed-size array.
    type Bytes: AsRef<[u8]> + AsMut<[u8]>;

    /// An all-zero byte representation, used as the read buffer.
    fn zeroed() -> Self::Bytes;

    /// Encode the value.
    fn to_bytes(&self) -> Self::Bytes;

    /// Decode a value. Every bit pattern decodes to some value.
    fn from_bytes(bytes: &Self::Bytes) -> Self;

    /// Size of the byte representation.
    fn size() -> usize {
        Self::zeroed().as_ref().len()
    }
}

macro_rules! impl_scalar_le {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl Scalar for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn zeroed() -> Self::Bytes {
                    [0; std::mem::size_of::<$ty>()]
                }

                fn to_bytes(&self) -> Self::Bytes {
                    let mut out = Self::zeroed();
                    LittleEndian::$write(&mut out, *self);
                    out
                }

                fn from_bytes(bytes: &Self::Bytes) -> Self {
                    LittleEndian::$read(bytes)
                }
            }
        )*
    };
}

impl_scalar_le! {
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    u128 => read_u128, write_u128;
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
    i128 => read_i128, write_i128;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

impl Scalar for u8 {
    type Bytes = [u8; 1];

    fn zeroed() -> [u8; 1] {
        [0]
    }

    fn to_bytes(&self) -> [u8; 1] {
        [*self]
    }

    fn from_bytes(bytes: &[u8; 1]) -> Self {
        bytes[0]
    }
}

impl Scalar for i8 {
    type Bytes = [u8; 1];

    fn zeroed() -> [u8; 1] {
        [0]
    }

    fn to_bytes(&self) -> [u8; 1] {
        self.to_le_bytes()
    }

    fn from_bytes(bytes: &[u8; 1]) -> Self {
        i8::from_le_bytes(*bytes)
    }
}

// Any non-zero byte reads back as true.
impl Scalar for bool {
    type Bytes = [u8; 1];

    fn zeroed() -> [u8; 1] {
        [0]
    }

    fn to_bytes(&self) -> [u8; 1] {
        [u8::from(*self)]
    }

    fn from_bytes(bytes: &[u8; 1]) -> Self {
        bytes[0] != 0
    }
}

impl<const N: usize> Scalar for [u8; N] {
    type Bytes = [u8; N];

    fn zeroed() -> [u8; N] {
        [0; N]
    }

    fn to_bytes(&self) -> [u8; N] {
        *self
    }

    fn from_bytes(bytes: &[u8; N]) -> Self {
        *bytes
    }
}
