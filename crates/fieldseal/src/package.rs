//! The sealed package: `base64(salt ‖ nonce ‖ ciphertext+tag)`.
//!
//! Salt and nonce are fixed-width, so the string carries no framing beyond
//! plain concatenation. Storage and transport layers must round-trip the
//! string byte-for-byte — base64 is case- and padding-sensitive.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::SealError;
use crate::kdf::SALT_LEN;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// A parsed sealed package.
///
/// Everything needed to attempt decryption except the secret itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPackage {
    /// Salt mixed into key derivation for this package.
    pub salt: [u8; SALT_LEN],
    /// AES-GCM nonce, unique per seal call.
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the authentication tag appended.
    pub ciphertext: Vec<u8>,
}

impl SealedPackage {
    /// Encode this package to its canonical opaque string form.
    pub fn encode(&self) -> String {
        let mut combined =
            Vec::with_capacity(SALT_LEN + NONCE_LEN + self.ciphertext.len());
        combined.extend_from_slice(&self.salt);
        combined.extend_from_slice(&self.nonce);
        combined.extend_from_slice(&self.ciphertext);
        STANDARD.encode(combined)
    }

    /// Parse an opaque package string back into a [`SealedPackage`].
    ///
    /// # Errors
    ///
    /// Returns [`SealError::MalformedPackage`] if the string is not valid
    /// base64 or decodes to fewer than `SALT_LEN + NONCE_LEN + TAG_LEN`
    /// bytes (even an empty plaintext carries the full tag).
    pub fn decode(s: &str) -> Result<Self, SealError> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|_| SealError::MalformedPackage)?;
        if bytes.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(SealError::MalformedPackage);
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[SALT_LEN..SALT_LEN + NONCE_LEN]);
        let ciphertext = bytes[SALT_LEN + NONCE_LEN..].to_vec();

        Ok(Self {
            salt,
            nonce,
            ciphertext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SealedPackage {
        SealedPackage {
            salt: [0xAA; SALT_LEN],
            nonce: [0xBB; NONCE_LEN],
            ciphertext: vec![0xCC; TAG_LEN + 5],
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let pkg = sample();
        let s = pkg.encode();
        let parsed = SealedPackage::decode(&s).unwrap();
        assert_eq!(parsed, pkg);
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = SealedPackage::decode("not-valid-base64!!").unwrap_err();
        assert!(matches!(err, SealError::MalformedPackage));
    }

    #[test]
    fn rejects_truncated_package() {
        // 27 bytes: shorter than even salt + nonce.
        let short = STANDARD.encode(vec![0u8; SALT_LEN + NONCE_LEN - 1]);
        assert!(matches!(
            SealedPackage::decode(&short),
            Err(SealError::MalformedPackage)
        ));

        // Salt and nonce present but no room for the tag.
        let tagless = STANDARD.encode(vec![0u8; SALT_LEN + NONCE_LEN + TAG_LEN - 1]);
        assert!(matches!(
            SealedPackage::decode(&tagless),
            Err(SealError::MalformedPackage)
        ));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(
            SealedPackage::decode(""),
            Err(SealError::MalformedPackage)
        ));
    }

    #[test]
    fn minimum_package_encodes_to_at_least_56_chars() {
        // 16 + 12 bytes of overhead alone base64-expand past 37 chars; with
        // the mandatory tag the smallest real package is 60 chars.
        let pkg = SealedPackage {
            salt: [0; SALT_LEN],
            nonce: [0; NONCE_LEN],
            ciphertext: vec![0; TAG_LEN],
        };
        assert!(pkg.encode().len() >= 56);
    }
}
