use super::error::DecodeError;
use super::primitive::Decoder;

/// Bounds-checked read position over an immutable byte buffer.
///
/// Every read advances the cursor by the bytes it consumed; a read that
/// would run past the end fails with `TruncatedInput` and leaves the
/// position untouched. Offsets reported by [`ByteCursor::position`] are
/// absolute in the buffer the outermost cursor was created from, including
/// for cursors split off with [`ByteCursor::split_span`].
///
/// # Examples
/// ```
/// use usergroup_core::decode::{ByteCursor, swapped};
///
/// let data = [0xaa, 0x64, 0x00, 0x00, 0x00];
/// let mut cursor = ByteCursor::new(&data);
/// cursor.skip(1)?;
/// let value = cursor.field("max_manager", &swapped::<u32>())?;
/// assert_eq!(value, 100);
/// assert_eq!(cursor.remaining(), 0);
/// # Ok::<(), usergroup_core::DecodeError>(())
/// ```
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            base: 0,
        }
    }

    /// Absolute offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or_else(|| DecodeError::truncated(self.position(), len, self.remaining()))?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.take(len).map(|_| ())
    }

    /// Read the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, DecodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or_else(|| DecodeError::truncated(self.position(), 1, self.remaining()))
    }

    /// Consume `len` bytes and return a cursor bounded to exactly those bytes.
    pub fn split_span(&mut self, len: usize) -> Result<ByteCursor<'a>, DecodeError> {
        let base = self.position();
        let data = self.take(len)?;
        Ok(ByteCursor { data, pos: 0, base })
    }

    /// Decode one named field, tagging any failure with `name`.
    pub fn field<D: Decoder>(&mut self, name: &str, decoder: &D) -> Result<D::Output, DecodeError> {
        decoder.decode(self).map_err(|err| err.with_field(name))
    }
}
