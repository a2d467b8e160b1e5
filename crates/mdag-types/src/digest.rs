use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content digest identifying a stored object.
///
/// A `Digest` is whatever the injected hash primitive produced over an
/// object's canonical bytes. Its length is fixed by the algorithm, not by
/// this type, so it owns a byte vector rather than a fixed array. Identical
/// content hashed with the same algorithm always yields an equal `Digest`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Wrap raw digest bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Copy raw digest bytes from a slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length digest, which never names an object.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        let end = self.0.len().min(4);
        hex::encode(&self.0[..end])
    }

    /// Parse from a hex string of any even length.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse from a hex string, requiring exactly `expected` bytes.
    pub fn from_hex_exact(s: &str, expected: usize) -> Result<Self, TypeError> {
        let digest = Self::from_hex(s)?;
        if digest.len() != expected {
            return Err(TypeError::InvalidLength {
                expected,
                actual: digest.len(),
            });
        }
        Ok(digest)
    }

    /// Consume the digest and return its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::from_vec(vec![0xde, 0xad, 0xbe, 0xef, 0x01]);
        let parsed = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        let err = Digest::from_hex("not-hex").unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn from_hex_exact_checks_length() {
        let err = Digest::from_hex_exact("abcd", 32).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
        assert!(Digest::from_hex_exact("abcd", 2).is_ok());
    }

    #[test]
    fn short_hex_is_8_chars() {
        let digest = Digest::from([7u8; 32]);
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn short_hex_of_tiny_digest() {
        let digest = Digest::from_vec(vec![0xab]);
        assert_eq!(digest.short_hex(), "ab");
    }

    #[test]
    fn display_is_full_hex() {
        let digest = Digest::from([0x11u8; 32]);
        let display = format!("{digest}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn empty_digest() {
        let digest = Digest::from_vec(Vec::new());
        assert!(digest.is_empty());
        assert_eq!(digest.len(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let digest = Digest::from([3u8; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn ordering_is_bytewise() {
        let a = Digest::from([0u8; 32]);
        let b = Digest::from([1u8; 32]);
        assert!(a < b);
    }
}
