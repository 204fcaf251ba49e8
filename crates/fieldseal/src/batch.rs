//! Concurrent fan-out over collections of fields.
//!
//! Rendering a page means opening N titles and descriptions at once, and the
//! KDF makes each open CPU-bound, so these helpers offload every item to the
//! blocking pool and join the results through a [`JoinSet`]. Opening is
//! best-effort: one undecryptable record yields a per-item error (for the
//! caller to render as a placeholder) and never aborts the rest of the page.

use tokio::task::JoinSet;
use tracing::warn;

use crate::codec::{open_with, seal_with};
use crate::error::SealError;
use crate::kdf::KdfParams;

/// Open every package under `secret`, best-effort, preserving input order.
///
/// Each element of the result corresponds to the package at the same index.
/// Failures are logged at `warn` with the item index only — never the
/// package contents.
pub async fn open_all(secret: &str, packages: Vec<String>) -> Vec<Result<String, SealError>> {
    open_all_with(secret, packages, &KdfParams::default()).await
}

/// [`open_all`] with explicit KDF parameters.
pub async fn open_all_with(
    secret: &str,
    packages: Vec<String>,
    params: &KdfParams,
) -> Vec<Result<String, SealError>> {
    let count = packages.len();
    let params = *params;
    let mut set = JoinSet::new();
    for (index, package) in packages.into_iter().enumerate() {
        let secret = secret.to_owned();
        set.spawn_blocking(move || (index, open_with(&secret, &package, &params)));
    }

    let mut results: Vec<Option<Result<String, SealError>>> =
        (0..count).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, result)) => {
                if let Err(error) = &result {
                    warn!(index, %error, "failed to open sealed package");
                }
                results[index] = Some(result);
            }
            // A panicked worker surfaces as a decrypt failure for its slot;
            // the index is unknown, so the sentinel fill below covers it.
            Err(error) => warn!(%error, "open worker did not complete"),
        }
    }

    results
        .into_iter()
        .map(|slot| slot.unwrap_or(Err(SealError::DecryptionFailed)))
        .collect()
}

/// Seal every plaintext under `secret`, preserving input order.
///
/// Unlike opening, sealing has no best-effort mode: any failure means the
/// secret is missing or the process is broken, so the whole batch fails.
pub async fn seal_all(secret: &str, plaintexts: Vec<String>) -> Result<Vec<String>, SealError> {
    seal_all_with(secret, plaintexts, &KdfParams::default()).await
}

/// [`seal_all`] with explicit KDF parameters.
pub async fn seal_all_with(
    secret: &str,
    plaintexts: Vec<String>,
    params: &KdfParams,
) -> Result<Vec<String>, SealError> {
    let count = plaintexts.len();
    let params = *params;
    let mut set = JoinSet::new();
    for (index, plaintext) in plaintexts.into_iter().enumerate() {
        let secret = secret.to_owned();
        set.spawn_blocking(move || (index, seal_with(&secret, &plaintext, &params)));
    }

    let mut results: Vec<Option<String>> = (0..count).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined.map_err(|_| SealError::Aead)?;
        results[index] = Some(result?);
    }

    // Every slot is filled once all workers have joined without error.
    results
        .into_iter()
        .map(|slot| slot.ok_or(SealError::Aead))
        .collect()
}
