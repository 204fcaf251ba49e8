//! Seal and open: the two operations this crate exposes to the app.
//!
//! `seal` runs before an encrypted field (`title_enc`, `description_enc`,
//! `content_encrypted`, `tags_encrypted`, …) is handed to the transport
//! layer; `open` runs after one is received, before display. Both are
//! stateless single-shot transforms — a failed open is terminal, retrying
//! with the same inputs cannot succeed.
//!
//! String fields use [`seal`]/[`open`]; structured fields (objects, tag
//! lists) use [`seal_value`]/[`open_value`], which JSON-serialize before
//! encrypting. Pick one form per field type and keep it consistent.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SealError;
use crate::kdf::{derive_key, KdfParams, SALT_LEN};
use crate::package::{SealedPackage, NONCE_LEN};

/// Encrypt a string field under `secret` with the default KDF parameters.
///
/// Draws a fresh 16-byte salt and 12-byte nonce from the OS CSPRNG, so the
/// same `(secret, plaintext)` pair produces a different package string on
/// every call. All outputs open to the same plaintext under `secret`.
///
/// # Errors
///
/// Returns [`SealError::MissingSecret`] if `secret` is empty.
pub fn seal(secret: &str, plaintext: &str) -> Result<String, SealError> {
    seal_with(secret, plaintext, &KdfParams::default())
}

/// [`seal`] with explicit KDF parameters.
pub fn seal_with(secret: &str, plaintext: &str, params: &KdfParams) -> Result<String, SealError> {
    Ok(seal_bytes(secret, plaintext.as_bytes(), params)?.encode())
}

/// Encrypt a JSON-serializable value under `secret`.
///
/// # Errors
///
/// Returns [`SealError::MissingSecret`] if `secret` is empty, or
/// [`SealError::Serialize`] if `value` cannot be JSON-serialized.
pub fn seal_value<T: Serialize>(secret: &str, value: &T) -> Result<String, SealError> {
    seal_value_with(secret, value, &KdfParams::default())
}

/// [`seal_value`] with explicit KDF parameters.
pub fn seal_value_with<T: Serialize>(
    secret: &str,
    value: &T,
    params: &KdfParams,
) -> Result<String, SealError> {
    let json = serde_json::to_string(value).map_err(SealError::Serialize)?;
    Ok(seal_bytes(secret, json.as_bytes(), params)?.encode())
}

/// Decrypt a package string back into the original string field.
///
/// # Errors
///
/// - [`SealError::MissingSecret`] if `secret` is empty.
/// - [`SealError::MalformedPackage`] if `package` is not valid base64 or is
///   truncated.
/// - [`SealError::DecryptionFailed`] for a wrong secret, tampered data, or
///   decrypted bytes that are not UTF-8. These cases are deliberately
///   indistinguishable.
pub fn open(secret: &str, package: &str) -> Result<String, SealError> {
    open_with(secret, package, &KdfParams::default())
}

/// [`open`] with explicit KDF parameters (must match the ones used to seal).
pub fn open_with(secret: &str, package: &str, params: &KdfParams) -> Result<String, SealError> {
    let bytes = open_bytes(secret, package, params)?;
    String::from_utf8(bytes).map_err(|_| SealError::DecryptionFailed)
}

/// Decrypt a package string and JSON-parse the plaintext into `T`.
///
/// # Errors
///
/// As [`open`]; a JSON parse failure after successful decryption also
/// surfaces as [`SealError::DecryptionFailed`].
pub fn open_value<T: DeserializeOwned>(secret: &str, package: &str) -> Result<T, SealError> {
    open_value_with(secret, package, &KdfParams::default())
}

/// [`open_value`] with explicit KDF parameters.
pub fn open_value_with<T: DeserializeOwned>(
    secret: &str,
    package: &str,
    params: &KdfParams,
) -> Result<T, SealError> {
    let bytes = open_bytes(secret, package, params)?;
    serde_json::from_slice(&bytes).map_err(|_| SealError::DecryptionFailed)
}

fn seal_bytes(
    secret: &str,
    plaintext: &[u8],
    params: &KdfParams,
) -> Result<SealedPackage, SealError> {
    if secret.is_empty() {
        return Err(SealError::MissingSecret);
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(secret, &salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_ref()).map_err(|_| SealError::Aead)?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| SealError::Aead)?;

    Ok(SealedPackage {
        salt,
        nonce: nonce_bytes,
        ciphertext,
    })
}

fn open_bytes(secret: &str, package: &str, params: &KdfParams) -> Result<Vec<u8>, SealError> {
    if secret.is_empty() {
        return Err(SealError::MissingSecret);
    }

    let pkg = SealedPackage::decode(package)?;
    let key = derive_key(secret, &pkg.salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_ref()).map_err(|_| SealError::Aead)?;
    cipher
        .decrypt(Nonce::from_slice(&pkg.nonce), pkg.ciphertext.as_ref())
        .map_err(|_| SealError::DecryptionFailed)
}
