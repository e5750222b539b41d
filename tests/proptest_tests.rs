//! Property-based tests for the verification dispatcher.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use bizverify::core::*;
use proptest::prelude::*;

/// Answers every lookup as "not registered".
struct Unregistered;

impl ViesTransport for Unregistered {
    async fn lookup(&self, _: &str, _: &str) -> Result<ViesLookup, ViesError> {
        Ok(ViesLookup {
            valid: false,
            name: None,
            address: None,
            request_date: None,
        })
    }
}

fn verify(country: &str, id: &str) -> VerificationResult {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(Verifier::new(Unregistered).verify_business(country, id))
}

/// How the registry answers in [`outcomes_follow_registry_behaviour`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Registry {
    Registered,
    Unregistered,
    Down,
    Panics,
}

impl ViesTransport for Registry {
    async fn lookup(&self, _: &str, _: &str) -> Result<ViesLookup, ViesError> {
        match self {
            Registry::Registered => Ok(ViesLookup {
                valid: true,
                name: Some("ACME".into()),
                address: None,
                request_date: None,
            }),
            Registry::Unregistered => Unregistered.lookup("", "").await,
            Registry::Down => Err(ViesError::Timeout(5000)),
            Registry::Panics => panic!("registry client bug"),
        }
    }
}

fn registry() -> impl Strategy<Value = Registry> {
    prop_oneof![
        Just(Registry::Registered),
        Just(Registry::Unregistered),
        Just(Registry::Down),
        Just(Registry::Panics),
    ]
}

fn country() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("INDIA".to_string()),
        Just("usa".to_string()),
        Just("United Kingdom".to_string()),
        Just("UAE".to_string()),
        Just("Canada".to_string()),
        Just("australia".to_string()),
        Just("Germany".to_string()),
        Just("EU".to_string()),
        "[A-Za-z ]{0,20}",
    ]
}

proptest! {
    #[test]
    fn never_panics_and_is_well_formed(c in country(), id in "\\PC{0,40}") {
        let r = verify(&c, &id);
        prop_assert!(r.verification_type != VerificationType::Error);
        if r.verified {
            prop_assert!(r.reason.is_none());
            prop_assert!(r.error.is_none());
        }
        if r.verification_type == VerificationType::Manual {
            prop_assert!(r.next_step.is_some());
        } else {
            prop_assert!(r.next_step.is_none());
        }
    }

    #[test]
    fn outcomes_follow_registry_behaviour(
        registry in registry(),
        c in country(),
        id in "\\PC{0,40}",
    ) {
        let r = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(Verifier::new(registry).verify_business(&c, &id));
        if r.verification_type == VerificationType::Error {
            prop_assert_eq!(registry, Registry::Panics);
            prop_assert_eq!(r.country.as_str(), "EU");
            prop_assert!(r.error.is_some());
        }
        if r.error.is_some() {
            prop_assert!(!r.verified);
        }
    }

    #[test]
    fn local_rules_are_idempotent(c in country(), id in "[A-Za-z0-9 -]{0,20}") {
        prop_assert_eq!(verify(&c, &id), verify(&c, &id));
    }

    #[test]
    fn country_matching_ignores_case(c in country(), id in "[0-9]{5,12}") {
        prop_assert_eq!(verify(&c.to_lowercase(), &id), verify(&c.to_uppercase(), &id));
    }

    #[test]
    fn ein_depends_only_on_digit_count(id in "[0-9 -]{0,16}") {
        let digits = id.chars().filter(char::is_ascii_digit).count();
        prop_assert_eq!(verify("USA", &id).verified, digits == 9);
    }

    #[test]
    fn gst_placeholder_name_is_pan_segment(
        state in "[0-9]{2}",
        name in "[A-Z]{5}",
        num in "[0-9]{4}",
        tail in "[A-Z][1-9A-Z]Z[0-9A-Z]",
    ) {
        let gstin = format!("{state}{name}{num}{tail}");
        let r = verify("INDIA", &gstin.to_lowercase());
        prop_assert!(r.verified);
        prop_assert_eq!(r.business_name, Some(name));
    }

    #[test]
    fn abn_single_digit_change_breaks_checksum(pos in 0usize..11, delta in 1u8..10) {
        let mut digits = [5u8, 1, 8, 2, 4, 7, 5, 3, 5, 5, 6];
        digits[pos] = (digits[pos] + delta) % 10;
        // weights are all coprime with 89 and smaller than it, so a single
        // digit change can never keep the sum divisible
        prop_assert!(!abn_checksum_valid(&digits));
    }
}
