#![no_main]

use bizverify::core::*;
use libfuzzer_sys::fuzz_target;

/// Registry answers the fuzzer can pick from. Panicking transports are
/// left out: libfuzzer aborts on any panic, caught or not.
enum Registry {
    Registered,
    Unregistered,
    Offline,
    TimedOut,
    Unavailable,
}

impl Registry {
    fn pick(selector: u8) -> Self {
        match selector % 5 {
            0 => Registry::Registered,
            1 => Registry::Unregistered,
            2 => Registry::Offline,
            3 => Registry::TimedOut,
            _ => Registry::Unavailable,
        }
    }
}

impl ViesTransport for Registry {
    async fn lookup(&self, _: &str, _: &str) -> Result<ViesLookup, ViesError> {
        let valid = match self {
            Registry::Registered => true,
            Registry::Unregistered => false,
            Registry::Offline => return Err(ViesError::Network("offline".into())),
            Registry::TimedOut => return Err(ViesError::Timeout(5000)),
            Registry::Unavailable => return Err(ViesError::ApiError("MS_UNAVAILABLE".into())),
        };
        Ok(ViesLookup {
            valid,
            name: valid.then(|| "---".to_string()),
            address: None,
            request_date: None,
        })
    }
}

fuzz_target!(|data: (u8, &str, &str)| {
    let (selector, country, business_id) = data;
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let r = rt.block_on(Verifier::new(Registry::pick(selector)).verify_business(country, business_id));
    // Internal errors mean a validator failed or panicked.
    assert_ne!(r.verification_type, VerificationType::Error);
    if r.verified {
        assert!(r.error.is_none());
    }
});
