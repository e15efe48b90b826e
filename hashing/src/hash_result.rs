//! Hash result type with encoding support

use geheim_encoding::Base64Codec;

/// Result of a hash or MAC operation with encoding helpers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    /// Raw digest bytes
    bytes: Vec<u8>,
}

impl HashResult {
    /// Create a new hash result from raw bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the digest as a standard Base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        Base64Codec::standard().encode_bytes(&self.bytes)
    }

    /// Get the digest as an unpadded base64url string
    #[must_use]
    pub fn to_base64url(&self) -> String {
        Base64Codec::url_safe().encode_bytes(&self.bytes)
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for HashResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<[u8; 32]> for HashResult {
    fn from(bytes: [u8; 32]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
