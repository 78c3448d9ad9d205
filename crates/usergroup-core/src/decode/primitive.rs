use std::marker::PhantomData;

use super::cursor::ByteCursor;
use super::error::DecodeError;

/// A composable decoder for one field of a binary layout.
///
/// Decoders are immutable descriptions of a layout; all position state
/// lives in the [`ByteCursor`] passed to [`Decoder::decode`].
pub trait Decoder {
    type Output;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<Self::Output, DecodeError>;

    /// Bytes consumed on success, or `None` when the width depends on the data.
    fn width(&self) -> Option<usize>;
}

/// Byte order of a multi-byte integer field.
///
/// `Natural` is most-significant byte first, the order single bytes are read
/// in. `Swapped` is the reversed (little-endian) order every multi-byte
/// integer of the user-group program is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Natural,
    Swapped,
}

/// Fixed-width integer types readable from a cursor.
pub trait WireInt: Sized + Copy {
    const WIDTH: usize;

    fn read(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, DecodeError>;
}

macro_rules! impl_wire_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireInt for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn read(
                    cursor: &mut ByteCursor<'_>,
                    order: ByteOrder,
                ) -> Result<Self, DecodeError> {
                    let bytes = cursor.take_array::<{ std::mem::size_of::<$ty>() }>()?;
                    Ok(match order {
                        ByteOrder::Natural => <$ty>::from_be_bytes(bytes),
                        ByteOrder::Swapped => <$ty>::from_le_bytes(bytes),
                    })
                }
            }
        )*
    };
}

impl_wire_int!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Integer decoder with a per-field byte order.
#[derive(Debug, Clone, Copy)]
pub struct Int<T> {
    order: ByteOrder,
    _marker: PhantomData<T>,
}

impl<T: WireInt> Int<T> {
    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            _marker: PhantomData,
        }
    }
}

impl<T: WireInt> Decoder for Int<T> {
    type Output = T;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<T, DecodeError> {
        T::read(cursor, self.order)
    }

    fn width(&self) -> Option<usize> {
        Some(T::WIDTH)
    }
}

/// Integer stored most-significant byte first.
pub const fn natural<T: WireInt>() -> Int<T> {
    Int::new(ByteOrder::Natural)
}

/// Integer stored least-significant byte first.
pub const fn swapped<T: WireInt>() -> Int<T> {
    Int::new(ByteOrder::Swapped)
}

/// Single unsigned byte.
pub const fn u8() -> Int<u8> {
    natural()
}

/// Opaque fixed-size byte span.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytes<const N: usize>;

impl<const N: usize> Decoder for Bytes<N> {
    type Output = [u8; N];

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<[u8; N], DecodeError> {
        cursor.take_array::<N>()
    }

    fn width(&self) -> Option<usize> {
        Some(N)
    }
}

/// Bytes that are consumed and discarded (padding, reserved headers).
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    len: usize,
}

impl Skip {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Decoder for Skip {
    type Output = ();

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
        cursor.skip(self.len)
    }

    fn width(&self) -> Option<usize> {
        Some(self.len)
    }
}

/// Variable-length bytes preceded by a swapped `u32` length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedBytes;

impl PrefixedBytes {
    pub const PREFIX_LEN: usize = 4;
}

impl Decoder for PrefixedBytes {
    type Output = Vec<u8>;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<Vec<u8>, DecodeError> {
        let len = swapped::<u32>().decode(cursor)?;
        let bytes = cursor.take(len as usize)?;
        Ok(bytes.to_vec())
    }

    fn width(&self) -> Option<usize> {
        None
    }
}
