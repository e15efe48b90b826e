//! Byte-to-text codecs
//!
//! The only codec currently implemented is Base64, in both its standard and
//! URL-safe variants. The codec is written from the bit level up rather than
//! delegating to an existing engine, since the point of this workspace is to
//! carry its own primitives end to end.

#![forbid(unsafe_code)]

pub mod base64;
pub mod error;

pub use base64::{Base64Codec, ALPHABET_STANDARD, ALPHABET_URL};
pub use error::{EncodingError, Result};
