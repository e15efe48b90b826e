//! Base64 codec built on 6-bit symbol groups
//!
//! Encodes 3-byte blocks into four 6-bit alphabet indices and decodes by
//! re-accumulating 6 bits per symbol. Both the standard and the URL-safe
//! alphabet are supported; decoding accepts either one.

use once_cell::sync::Lazy;

use crate::error::Result;

/// Standard alphabet (RFC 4648 section 4): `A-Z a-z 0-9 + /`.
pub const ALPHABET_STANDARD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe alphabet (RFC 4648 section 5): `A-Z a-z 0-9 - _`.
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Inverse symbol map shared by both alphabets. `-` and `_` alias onto the
/// slots of `+` and `/`, so one table decodes either variant. Entries of -1
/// mark characters outside the alphabet.
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    let mut idx = 0i8;
    for &symbol in ALPHABET_STANDARD {
        map[symbol as usize] = idx;
        idx += 1;
    }
    map[b'-' as usize] = map[b'+' as usize];
    map[b'_' as usize] = map[b'/' as usize];
    map
});

/// Byte-to-text codec over a 64-symbol alphabet.
///
/// A codec value is a cheap copyable configuration: which alphabet to emit
/// and whether trailing `=` padding is written. The URL-safe variant never
/// emits padding, matching its use in compact token serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Codec {
    url: bool,
    no_padding: bool,
}

impl Base64Codec {
    /// Codec for the standard alphabet with `=` padding.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            url: false,
            no_padding: false,
        }
    }

    /// Codec for the URL-safe alphabet. Implies unpadded output.
    #[must_use]
    pub const fn url_safe() -> Self {
        Self {
            url: true,
            no_padding: false,
        }
    }

    /// Suppress trailing `=` padding on encode.
    #[must_use]
    pub const fn no_padding(mut self) -> Self {
        self.no_padding = true;
        self
    }

    const fn alphabet(&self) -> &'static [u8; 64] {
        if self.url {
            ALPHABET_URL
        } else {
            ALPHABET_STANDARD
        }
    }

    const fn pads_output(&self) -> bool {
        !(self.no_padding || self.url)
    }

    /// Encode raw bytes into Base64 text.
    #[must_use]
    pub fn encode_bytes(&self, data: &[u8]) -> String {
        let alphabet = self.alphabet();
        let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

        let mut blocks = data.chunks_exact(3);
        for block in blocks.by_ref() {
            let bits =
                (u32::from(block[0]) << 16) | (u32::from(block[1]) << 8) | u32::from(block[2]);
            for shift in [18u32, 12, 6, 0] {
                out.push(char::from(alphabet[((bits >> shift) & 0x3f) as usize]));
            }
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            // Zero-fill the final block; each fill byte becomes one
            // padding position in the output.
            let padding = 3 - rest.len();
            let bits = (u32::from(rest[0]) << 16)
                | (u32::from(rest.get(1).copied().unwrap_or(0)) << 8);
            for shift in [18u32, 12, 6, 0].iter().take(4 - padding) {
                out.push(char::from(alphabet[((bits >> shift) & 0x3f) as usize]));
            }
            if self.pads_output() {
                for _ in 0..padding {
                    out.push('=');
                }
            }
        }
        out
    }

    /// Encode a UTF-8 string into Base64 text.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        self.encode_bytes(text.as_bytes())
    }

    /// Decode Base64 text into raw bytes.
    ///
    /// Decoding is best-effort: `=` and any character outside the combined
    /// alphabets are skipped rather than rejected. Six bits are accumulated
    /// per symbol and every completed byte is emitted; a trailing group of
    /// fewer than 8 bits only ever stems from the zero-fill applied during
    /// encoding and is discarded.
    #[must_use]
    pub fn decode_bytes(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() / 4 * 3);
        let mut acc: u32 = 0;
        let mut acc_bits: u8 = 0;
        for byte in text.bytes() {
            let value = DECODE_MAP[byte as usize];
            if value < 0 {
                continue;
            }
            acc = (acc << 6) | u32::from(value.unsigned_abs());
            acc_bits += 6;
            if acc_bits >= 8 {
                acc_bits -= 8;
                out.push((acc >> acc_bits) as u8);
            }
        }
        out
    }

    /// Decode Base64 text into a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EncodingError::InvalidUtf8`] when the decoded bytes
    /// do not form valid UTF-8.
    pub fn decode(&self, text: &str) -> Result<String> {
        Ok(String::from_utf8(self.decode_bytes(text))?)
    }
}
