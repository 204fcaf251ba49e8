//! End-to-end tests of the seal/open surface as the app consumes it.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use fieldseal::{
    open, open_all_with, open_value, open_with, seal, seal_value, seal_with, KdfParams,
    SealError, SealedPackage,
};

/// Low work factor for tests that hammer the KDF. Deployment code always
/// goes through the default [`KdfParams`].
const FAST: KdfParams = KdfParams { iterations: 1_000 };

#[test]
fn concrete_scenario_task_title() {
    let pkg = seal("user-42", "Buy milk").unwrap();

    // 16 bytes of salt + 12 of nonce + tag, base64-expanded.
    assert!(pkg.len() >= 56);

    assert_eq!(open("user-42", &pkg).unwrap(), "Buy milk");
    assert!(matches!(
        open("user-43", &pkg),
        Err(SealError::DecryptionFailed)
    ));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct DiaryEntry {
    title: String,
    tags: Vec<String>,
}

#[test]
fn concrete_scenario_structured_payload() {
    let entry = DiaryEntry {
        title: "Plan trip".into(),
        tags: vec!["travel".into(), "2025".into()],
    };

    let pkg = seal_value("abc", &entry).unwrap();
    let opened: DiaryEntry = open_value("abc", &pkg).unwrap();
    assert_eq!(opened, entry);
}

#[test]
fn every_ciphertext_byte_is_authenticated() {
    let pkg = seal_with("user-42", "integrity", &FAST).unwrap();
    let parsed = SealedPackage::decode(&pkg).unwrap();

    for i in 0..parsed.ciphertext.len() {
        let mut tampered = parsed.clone();
        tampered.ciphertext[i] ^= 0x01;
        assert!(
            matches!(
                open_with("user-42", &tampered.encode(), &FAST),
                Err(SealError::DecryptionFailed)
            ),
            "flipped ciphertext byte {i} was not detected"
        );
    }
}

#[test]
fn empty_secret_rejected_before_any_crypto() {
    assert!(matches!(seal("", "v"), Err(SealError::MissingSecret)));
    assert!(matches!(open("", "pkg"), Err(SealError::MissingSecret)));
}

#[tokio::test]
async fn page_of_tasks_decrypts_best_effort() {
    let titles: Vec<String> = (0..8).map(|i| format!("task #{i}")).collect();
    let mut packages = Vec::with_capacity(titles.len());
    for title in &titles {
        packages.push(seal_with("user-42", title, &FAST).unwrap());
    }
    // Simulate one row corrupted in storage.
    packages[3].truncate(20);

    let opened = open_all_with("user-42", packages, &FAST).await;
    for (i, result) in opened.iter().enumerate() {
        if i == 3 {
            assert!(result.is_err());
        } else {
            assert_eq!(result.as_deref().unwrap(), titles[i]);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn round_trip_any_plaintext(secret in "[!-~]{1,24}", plaintext in ".*") {
        let pkg = seal_with(&secret, &plaintext, &FAST).unwrap();
        prop_assert_eq!(open_with(&secret, &pkg, &FAST).unwrap(), plaintext);
    }

    #[test]
    fn sealed_packages_never_repeat(secret in "[!-~]{1,24}", plaintext in ".*") {
        let a = seal_with(&secret, &plaintext, &FAST).unwrap();
        let b = seal_with(&secret, &plaintext, &FAST).unwrap();
        prop_assert_ne!(a, b);
    }
}
