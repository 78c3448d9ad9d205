use std::marker::PhantomData;

use super::cursor::ByteCursor;
use super::error::DecodeError;
use super::primitive::Decoder;

/// Sum type stored in a fixed-size span whose first byte selects the variant.
///
/// The span is reserved in full whatever the variant, so records keep a
/// predictable size. Variants only read the bytes they need; the rest of
/// the span is skipped without inspection.
pub trait TaggedUnion: Sized {
    /// Type name used in `InvalidEnumValue` errors.
    const NAME: &'static str;
    /// Bytes reserved for the union.
    const SPAN: usize;

    /// Decode the variant selected by `tag`.
    ///
    /// `span` is positioned at the start of the union (the tag byte has not
    /// been consumed) and is bounded to [`TaggedUnion::SPAN`] bytes. Returns
    /// `Ok(None)` when `tag` names no variant.
    fn decode_variant(tag: u8, span: &mut ByteCursor<'_>) -> Result<Option<Self>, DecodeError>;
}

/// Decoder for a [`TaggedUnion`].
#[derive(Debug)]
pub struct Union<U> {
    _marker: PhantomData<fn() -> U>,
}

impl<U> Clone for Union<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Union<U> {}

pub const fn tagged<U: TaggedUnion>() -> Union<U> {
    Union {
        _marker: PhantomData,
    }
}

impl<U: TaggedUnion> Decoder for Union<U> {
    type Output = U;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<U, DecodeError> {
        let start = cursor.position();
        let mut span = cursor.split_span(U::SPAN)?;
        let tag = span.peek_u8()?;
        U::decode_variant(tag, &mut span)?
            .ok_or_else(|| DecodeError::invalid_enum(start, U::NAME, tag))
    }

    fn width(&self) -> Option<usize> {
        Some(U::SPAN)
    }
}

#[cfg(test)]
mod tests {
    use super::{TaggedUnion, tagged};
    use crate::decode::cursor::ByteCursor;
    use crate::decode::error::{DecodeError, DecodeErrorKind};
    use crate::decode::primitive::{Decoder, Skip, swapped};

    #[derive(Debug, PartialEq)]
    enum Shape {
        Empty,
        Sized { len: u16 },
    }

    impl TaggedUnion for Shape {
        const NAME: &'static str = "Shape";
        const SPAN: usize = 6;

        fn decode_variant(tag: u8, span: &mut ByteCursor<'_>) -> Result<Option<Self>, DecodeError> {
            Ok(match tag {
                0 => Some(Self::Empty),
                1 => {
                    span.field("header", &Skip::new(2))?;
                    let len = span.field("len", &swapped::<u16>())?;
                    Some(Self::Sized { len })
                }
                _ => None,
            })
        }
    }

    #[test]
    fn consumes_whole_span_for_empty_variant() {
        let data = [0, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 7];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(tagged::<Shape>().decode(&mut cursor).unwrap(), Shape::Empty);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn variant_reads_from_span_start() {
        let data = [1, 0, 0x10, 0x00, 0xff, 0xff];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(
            tagged::<Shape>().decode(&mut cursor).unwrap(),
            Shape::Sized { len: 16 }
        );
    }

    #[test]
    fn unknown_tag_is_invalid_enum_value() {
        let data = [5, 0, 0, 0, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        let err = tagged::<Shape>().decode(&mut cursor).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::InvalidEnumValue {
                type_name: "Shape",
                value: 5
            }
        );
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn short_span_is_truncated_even_for_empty_variant() {
        let data = [0, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        let err = tagged::<Shape>().decode(&mut cursor).unwrap_err();
        assert!(err.is_truncated());
    }
}
