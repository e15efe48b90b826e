//! Grouping byte streams into 32-bit words

/// Group a byte sequence into big-endian 32-bit words.
///
/// The caller is expected to pass a stream whose length is a multiple of
/// four; padded message blocks always are.
#[must_use]
pub fn group_be_words(bytes: &[u8]) -> Vec<u32> {
    debug_assert_eq!(bytes.len() % 4, 0, "byte stream must align to whole words");
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
