use super::cursor::ByteCursor;
use super::error::{DecodeError, DecodeErrorKind};
use super::primitive::{Bytes, Decoder, PrefixedBytes, swapped, u8};
use super::value::{PUBLIC_KEY_LEN, PublicKey, Timestamp};

/// Decoder whose output is passed through a pure function.
#[derive(Debug, Clone, Copy)]
pub struct Map<D, F> {
    inner: D,
    f: F,
}

impl<D, F, U> Decoder for Map<D, F>
where
    D: Decoder,
    F: Fn(D::Output) -> U,
{
    type Output = U;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<U, DecodeError> {
        self.inner.decode(cursor).map(&self.f)
    }

    fn width(&self) -> Option<usize> {
        self.inner.width()
    }
}

/// Decoder whose output is passed through a fallible function.
///
/// A rejected value is reported at the offset where the inner decoder
/// started reading.
#[derive(Debug, Clone, Copy)]
pub struct TryMap<D, F> {
    inner: D,
    f: F,
}

impl<D, F, U> Decoder for TryMap<D, F>
where
    D: Decoder,
    F: Fn(D::Output) -> Result<U, DecodeErrorKind>,
{
    type Output = U;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<U, DecodeError> {
        let start = cursor.position();
        let raw = self.inner.decode(cursor)?;
        (self.f)(raw).map_err(|kind| DecodeError::new(kind, start))
    }

    fn width(&self) -> Option<usize> {
        self.inner.width()
    }
}

/// Combinators available on every decoder.
pub trait DecoderExt: Decoder + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, DecodeErrorKind>,
    {
        TryMap { inner: self, f }
    }
}

impl<D: Decoder> DecoderExt for D {}

/// Closed set of named constants stored as a single byte.
pub trait WireEnum: Sized {
    /// Type name used in `InvalidEnumValue` errors.
    const NAME: &'static str;

    fn from_discriminant(value: u8) -> Option<Self>;
}

pub fn public_key() -> impl Decoder<Output = PublicKey> {
    Bytes::<PUBLIC_KEY_LEN>.map(PublicKey::new)
}

/// `0` is false, `1` is true; any other byte is rejected.
pub fn boolean() -> impl Decoder<Output = bool> {
    u8().try_map(|value| match value {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeErrorKind::InvalidEnumValue {
            type_name: "bool",
            value,
        }),
    })
}

pub fn timestamp() -> impl Decoder<Output = Timestamp> {
    swapped::<i64>().map(Timestamp::from_seconds)
}

pub fn wire_enum<E: WireEnum>() -> impl Decoder<Output = E> {
    u8().try_map(|value| {
        E::from_discriminant(value).ok_or(DecodeErrorKind::InvalidEnumValue {
            type_name: E::NAME,
            value,
        })
    })
}

/// Length-prefixed UTF-8 text.
pub fn utf8_string() -> impl Decoder<Output = String> {
    PrefixedBytes.try_map(|bytes| {
        String::from_utf8(bytes).map_err(|err| DecodeErrorKind::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        })
    })
}
