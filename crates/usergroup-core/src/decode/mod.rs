//! Composable binary decoders.
//!
//! The layers build on each other:
//! - `cursor`: bounds-checked position over the input buffer
//! - `primitive`: integers with a per-field byte order, byte spans, padding,
//!   length-prefixed bytes
//! - `adapter`: pure reinterpretation of a primitive (`map`/`try_map`), plus
//!   the public key, boolean, timestamp, enum and UTF-8 adapters
//! - `union`: fixed-span tagged unions
//! - `array`: fixed-count sequences
//!
//! Decoders hold no state; a decode call owns its cursor, so the same
//! decoder may be used from several threads at once.

pub mod adapter;
pub mod array;
pub mod cursor;
pub mod error;
pub mod primitive;
pub mod union;
pub mod value;

pub use adapter::{
    DecoderExt, Map, TryMap, WireEnum, boolean, public_key, timestamp, utf8_string, wire_enum,
};
pub use array::{Array, array};
pub use cursor::ByteCursor;
pub use error::{DecodeError, DecodeErrorKind};
pub use primitive::{
    ByteOrder, Bytes, Decoder, Int, PrefixedBytes, Skip, WireInt, natural, swapped, u8,
};
pub use union::{TaggedUnion, Union, tagged};
pub use value::{PUBLIC_KEY_LEN, PublicKey, Timestamp};
