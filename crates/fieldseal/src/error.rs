//! Error taxonomy for seal/open operations.

use thiserror::Error;

/// Errors produced by the encryption core.
///
/// Messages are deliberately generic: they never contain salt, nonce, or key
/// material, and [`SealError::DecryptionFailed`] never reveals *why* a
/// decrypt was rejected (wrong key and tampered data are indistinguishable).
/// None of these are retryable with the same inputs.
#[derive(Debug, Error)]
pub enum SealError {
    /// No secret was supplied at seal or open time. The caller must
    /// re-establish identity before retrying.
    #[error("secret required for encryption")]
    MissingSecret,

    /// The package string is not valid base64, or decodes to fewer bytes
    /// than salt + nonce + tag. Surfaced to users the same way as
    /// [`SealError::DecryptionFailed`]; kept distinct for diagnosing
    /// data corruption versus wrong-key scenarios.
    #[error("sealed package is malformed")]
    MalformedPackage,

    /// Decryption failed: wrong secret, tampered ciphertext or tag, or the
    /// decrypted bytes were not the expected UTF-8/JSON shape.
    #[error("unable to decrypt sealed package")]
    DecryptionFailed,

    /// The plaintext value could not be JSON-serialized at seal time.
    #[error("plaintext serialization failed")]
    Serialize(#[source] serde_json::Error),

    /// An internal cryptographic primitive failed during sealing (AEAD
    /// encrypt or KDF expansion). Should be unreachable with a valid key
    /// and nonce.
    #[error("seal operation failed")]
    Aead,
}

impl SealError {
    /// Whether user-facing code should render this as a generic
    /// "unable to decrypt" placeholder rather than an input error.
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(
            self,
            SealError::MalformedPackage | SealError::DecryptionFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_failures_grouped_for_display() {
        assert!(SealError::MalformedPackage.is_decrypt_failure());
        assert!(SealError::DecryptionFailed.is_decrypt_failure());
        assert!(!SealError::MissingSecret.is_decrypt_failure());
        assert!(!SealError::Aead.is_decrypt_failure());
    }

    #[test]
    fn messages_stay_generic() {
        // Wrong-key and tamper failures must read identically.
        let msg = SealError::DecryptionFailed.to_string();
        assert_eq!(msg, "unable to decrypt sealed package");
        assert!(!msg.contains("salt"));
        assert!(!msg.contains("key"));
    }
}
