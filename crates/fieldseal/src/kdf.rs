//! Key derivation: PBKDF2-HMAC-SHA256 from a per-user secret.
//!
//! The secret is a low-entropy string held only by the client (the identity
//! layer supplies it; this module treats it as opaque). A fresh 16-byte salt
//! is mixed in per seal call, so the same secret yields an unrelated key for
//! every package and precomputed tables are useless.
//!
//! # Iteration count
//!
//! [`PBKDF2_ITERATIONS`] is a versioned deployment parameter: the count is
//! not embedded in the package, so every call site in a deployment must use
//! the same value or previously sealed packages become unopenable. Change it
//! only together with a data migration.

use hmac::Hmac;
use sha2::Sha256;

use crate::error::SealError;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of the per-package random salt.
pub const SALT_LEN: usize = 16;

/// PBKDF2 work factor applied to every derivation.
pub const PBKDF2_ITERATIONS: u32 = 250_000;

/// Tunable key-derivation parameters.
///
/// [`KdfParams::default`] is the deployment value; tests and benchmarks may
/// lower `iterations` via the `*_with` codec entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2-HMAC-SHA256 iteration count.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Fixed-size buffer holding exactly [`KEY_LEN`] bytes of derived key.
///
/// The memory is overwritten with zeroes on drop to minimise the window
/// during which key material lives in RAM.
pub struct KeyBytes(Box<[u8; KEY_LEN]>);

impl Drop for KeyBytes {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl AsRef<[u8]> for KeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl std::fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("KeyBytes([REDACTED])")
    }
}

/// Derive a 256-bit key from `(secret, salt)` via PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same `(secret, salt, iterations)` always yields the
/// same key. Salt generation is the caller's responsibility.
///
/// # Errors
///
/// Returns [`SealError::MissingSecret`] if `secret` is empty.
pub fn derive_key(
    secret: &str,
    salt: &[u8; SALT_LEN],
    params: &KdfParams,
) -> Result<KeyBytes, SealError> {
    if secret.is_empty() {
        return Err(SealError::MissingSecret);
    }

    let mut output = Box::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(secret.as_bytes(), salt, params.iterations, &mut output[..])
        .map_err(|_| SealError::Aead)?;

    Ok(KeyBytes(output))
}
