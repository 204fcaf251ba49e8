//! `fieldseal` — client-side end-to-end encryption for field-level payloads.
//!
//! The productivity app stores task titles, descriptions, diary content and
//! tags as opaque ciphertext. This crate is the only place plaintext and key
//! material exist: a per-user secret is stretched into a 256-bit key with
//! PBKDF2-HMAC-SHA256 (fresh random salt per call), the field is encrypted
//! with AES-256-GCM (fresh random nonce per call), and the result travels to
//! the server as a single base64 string the server cannot read.
//!
//! # Package format
//!
//! ```text
//! base64( salt(16) ‖ nonce(12) ‖ ciphertext+tag )
//! ```
//!
//! Salt and nonce have fixed widths, so no length prefixes are needed. Because
//! both are drawn fresh from the OS CSPRNG on every call, sealing the same
//! plaintext twice produces two different strings — both of which open to the
//! same value under the same secret.
//!
//! # Security model
//!
//! - The server (and any storage/transport layer) sees only the opaque
//!   package string; it must round-trip it byte-for-byte.
//! - The secret is never persisted, never embedded in a package, and never
//!   appears in errors, logs, or `Debug` output.
//! - Opening fails closed: a wrong secret, a flipped bit, or a truncated
//!   package yields an error, never garbage plaintext.
//!
//! # Example
//!
//! ```
//! use fieldseal::{seal, open};
//!
//! let pkg = seal("user-42", "Buy milk")?;
//! assert_eq!(open("user-42", &pkg)?, "Buy milk");
//! assert!(open("user-43", &pkg).is_err());
//! # Ok::<(), fieldseal::SealError>(())
//! ```

pub mod batch;
pub mod codec;
pub mod error;
pub mod kdf;
pub mod package;

pub use batch::{open_all, open_all_with, seal_all, seal_all_with};
pub use codec::{
    open, open_value, open_value_with, open_with, seal, seal_value, seal_value_with, seal_with,
};
pub use error::SealError;
pub use kdf::{derive_key, KdfParams, KeyBytes, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use package::{SealedPackage, NONCE_LEN, TAG_LEN};
