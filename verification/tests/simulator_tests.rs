use idkit_nullables::NullRandom;
use idkit_types::{Address, AddressValue, IdentityInput, IdentityStatus};
use idkit_verification::{
    SimulatedVerifier, VerificationError, VerificationMethod, VerifyOptions,
};

fn form_input() -> IdentityInput {
    IdentityInput {
        selfie_url: "data:image/jpeg;base64,AAAA".into(),
        phone: "+15551234567".into(),
        address: AddressValue {
            line1: "123 Main St".into(),
            line2: "Apt 4".into(),
            city: "Springfield".into(),
            region: "IL".into(),
            postal_code: "62701".into(),
            country: "US".into(),
        }
        .into(),
    }
}

fn canonical() -> Address {
    Address {
        street: "1 Infinite Loop".into(),
        city: "Cupertino".into(),
        state: "CA".into(),
        country: "US".into(),
        postal_code: "95014".into(),
    }
}

#[tokio::test]
async fn outage_consumes_a_single_draw() {
    let mut rng = NullRandom::new(vec![0.01, 0.9, 0.9]);
    let result = SimulatedVerifier::new(VerifyOptions::default(), &mut rng)
        .verify(form_input())
        .await;

    assert_eq!(result, Err(VerificationError::ServiceUnavailable));
    assert_eq!(
        VerificationError::ServiceUnavailable.to_string(),
        "Verification service unavailable. Please try again."
    );
    assert_eq!(rng.draws(), 1);
}

#[tokio::test]
async fn failing_score_normalizes_form_address() {
    let mut rng = NullRandom::new(vec![0.5, 0.1, 0.99]);
    let data = SimulatedVerifier::new(VerifyOptions::default(), &mut rng)
        .verify(form_input())
        .await
        .unwrap();

    assert_eq!(data.score, 49);
    assert_eq!(data.status, IdentityStatus::Failed);
    assert!(!data.is_verified());
    assert_eq!(data.address.street, "123 Main St, Apt 4");
    assert_eq!(data.address.state, "IL");
    assert_eq!(data.address.postal_code, "62701");
    assert_eq!(data.phone, "+15551234567");
    assert_eq!(data.selfie_url, "data:image/jpeg;base64,AAAA");
    assert_eq!(rng.draws(), 3);
}

#[tokio::test]
async fn passing_score_keeps_canonical_address() {
    let input = IdentityInput {
        address: canonical().into(),
        ..form_input()
    };
    let rng = NullRandom::new(vec![0.5, 0.9, 0.0]);
    let data = SimulatedVerifier::new(VerifyOptions::default(), rng)
        .verify(input)
        .await
        .unwrap();

    assert_eq!(data.score, 50);
    assert_eq!(data.status, IdentityStatus::Verified);
    assert_eq!(data.address, canonical());
}

#[tokio::test]
async fn zero_pass_rate_always_fails() {
    let options = VerifyOptions {
        error_rate: 0.0,
        pass_rate: 0.0,
    };
    let data = SimulatedVerifier::new(options, NullRandom::new(vec![0.5, 0.999, 0.99]))
        .verify(form_input())
        .await
        .unwrap();
    assert_eq!(data.score, 49);
    assert_eq!(data.status, IdentityStatus::Failed);
}

#[tokio::test]
async fn full_pass_rate_always_passes() {
    let options = VerifyOptions {
        error_rate: 0.0,
        pass_rate: 1.0,
    };
    let data = SimulatedVerifier::new(options, NullRandom::new(vec![0.5, 0.0, 0.0]))
        .verify(form_input())
        .await
        .unwrap();
    assert_eq!(data.score, 50);
    assert_eq!(data.status, IdentityStatus::Verified);
}

#[tokio::test]
async fn out_of_range_pass_rates_are_clamped() {
    let below = VerifyOptions {
        error_rate: 0.0,
        pass_rate: -1.0,
    };
    let above = VerifyOptions {
        error_rate: 0.0,
        pass_rate: 2.0,
    };
    let draws = vec![0.5, 0.999, 0.5];

    let low = SimulatedVerifier::new(below, NullRandom::new(draws.clone()))
        .verify(form_input())
        .await
        .unwrap();
    let high = SimulatedVerifier::new(above, NullRandom::new(draws))
        .verify(form_input())
        .await
        .unwrap();

    assert_eq!(low.status, IdentityStatus::Failed);
    assert_eq!(high.status, IdentityStatus::Verified);
}

#[tokio::test]
async fn error_rate_zero_never_fails_with_outage() {
    let options = VerifyOptions {
        error_rate: 0.0,
        pass_rate: 0.7,
    };
    let mut verifier = SimulatedVerifier::new(options, NullRandom::new(vec![0.0, 0.5, 0.5]));
    for _ in 0..5 {
        assert!(verifier.verify(form_input()).await.is_ok());
    }
}

#[tokio::test]
async fn repeated_calls_consume_draws_in_order() {
    let mut rng = NullRandom::new(vec![0.9, 0.9, 0.0, 0.9, 0.1, 0.0]);
    let mut verifier = SimulatedVerifier::new(VerifyOptions::default(), &mut rng);

    let first = verifier.verify(form_input()).await.unwrap();
    let second = verifier.verify(form_input()).await.unwrap();
    drop(verifier);

    assert_eq!(first.status, IdentityStatus::Verified);
    assert_eq!(second.status, IdentityStatus::Failed);
    assert_eq!(rng.draws(), 6);
}

async fn run_method<M: VerificationMethod>(
    method: &mut M,
) -> Result<IdentityStatus, VerificationError> {
    method.verify(form_input()).await.map(|data| data.status)
}

#[tokio::test]
async fn usable_through_the_method_trait() {
    let mut verifier = SimulatedVerifier::new(
        VerifyOptions::default(),
        NullRandom::new(vec![0.5, 0.9, 0.5]),
    );
    assert_eq!(verifier.name(), "simulated");
    assert_eq!(run_method(&mut verifier).await, Ok(IdentityStatus::Verified));
}
