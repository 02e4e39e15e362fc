use idkit_camera::{CameraController, CaptureSettings};
use idkit_nullables::{NullMediaDevices, NullRandom, NullStream, NullSurface, NullVideoSink};
use idkit_session::{IdkitConfig, SessionError, VerificationFlow, VerificationStep};
use idkit_types::{AddressValue, IdentityData, IdentityInput, IdentityStatus};
use idkit_verification::{SimulatedVerifier, VerificationError, VerificationMethod, VerifyOptions};
use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::task::Poll;

fn address() -> AddressValue {
    AddressValue {
        line1: "10 Downing St".into(),
        line2: String::new(),
        city: "London".into(),
        region: "Greater London".into(),
        postal_code: "SW1A 2AA".into(),
        country: "GB".into(),
    }
}

fn ready_flow<V: VerificationMethod>(verifier: V) -> VerificationFlow<V> {
    VerificationFlow::resume(
        verifier,
        &IdkitConfig::default(),
        Some("data:image/jpeg;base64,AAAA".into()),
        Some("+442071234567"),
        address(),
    )
}

/// Yields once before delegating, so a second submission can overlap.
struct Slow<V>(V);

impl<V: VerificationMethod> VerificationMethod for Slow<V> {
    fn name(&self) -> &str {
        "slow"
    }

    async fn verify(&mut self, input: IdentityInput) -> Result<IdentityData, VerificationError> {
        tokio::task::yield_now().await;
        self.0.verify(input).await
    }
}

#[tokio::test]
async fn simulated_pass_through_the_flow() {
    let verifier = SimulatedVerifier::new(
        VerifyOptions::default(),
        NullRandom::new(vec![0.5, 0.9, 0.5]),
    );
    let flow = ready_flow(verifier);
    assert_eq!(flow.step(), VerificationStep::Address);
    assert!(flow.can_continue());

    let data = flow.submit().await.unwrap();
    assert_eq!(data.score, 75);
    assert_eq!(data.status, IdentityStatus::Verified);
    assert_eq!(data.phone, "+442071234567");
    assert_eq!(data.address.street, "10 Downing St");
    assert_eq!(data.address.state, "Greater London");
}

#[tokio::test]
async fn outage_is_recorded_as_last_error() {
    let verifier = SimulatedVerifier::new(VerifyOptions::default(), NullRandom::new(vec![0.0]));
    let flow = ready_flow(verifier);

    let err = flow.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Verification(VerificationError::ServiceUnavailable)
    ));
    assert_eq!(
        flow.last_error().as_deref(),
        Some("Verification service unavailable. Please try again.")
    );
    assert!(!flow.is_verifying());
}

#[tokio::test]
async fn next_submission_clears_last_error() {
    let verifier =
        SimulatedVerifier::new(VerifyOptions::default(), NullRandom::new(vec![0.0, 0.5, 0.9, 0.5]));
    let flow = ready_flow(verifier);

    assert!(flow.submit().await.is_err());
    assert!(flow.last_error().is_some());
    assert!(flow.submit().await.is_ok());
    assert_eq!(flow.last_error(), None);
}

#[tokio::test]
async fn overlapping_submission_is_refused() {
    let verifier = SimulatedVerifier::new(
        VerifyOptions::default(),
        NullRandom::new(vec![0.5, 0.9, 0.5]),
    );
    let flow = ready_flow(Slow(verifier));

    let (first, second) = tokio::join!(flow.submit(), async {
        while !flow.is_verifying() {
            tokio::task::yield_now().await;
        }
        assert!(!flow.can_continue());
        flow.submit().await
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(SessionError::VerificationInFlight)));
    assert!(!flow.is_verifying());
    assert_eq!(flow.last_error(), None);
}

#[tokio::test]
async fn dropped_submission_returns_the_verifier() {
    let verifier = SimulatedVerifier::new(
        VerifyOptions::default(),
        NullRandom::new(vec![0.5, 0.9, 0.5]),
    );
    let flow = ready_flow(Slow(verifier));

    {
        let pending = flow.submit();
        tokio::pin!(pending);
        let polled = poll_once(pending.as_mut()).await;
        assert!(polled.is_none());
        assert!(flow.is_verifying());
    }

    assert!(!flow.is_verifying());
    assert!(flow.submit().await.is_ok());
}

/// Poll a future exactly once.
async fn poll_once<F: Future + Unpin>(mut fut: F) -> Option<F::Output> {
    poll_fn(move |cx| {
        Poll::Ready(match Pin::new(&mut fut).poll(cx) {
            Poll::Ready(out) => Some(out),
            Poll::Pending => None,
        })
    })
    .await
}

#[tokio::test]
async fn selfie_captured_from_camera() {
    let sink = NullVideoSink::with_frame(1280, 720);
    let camera: CameraController<NullMediaDevices, NullVideoSink, NullSurface> =
        CameraController::new(
            NullMediaDevices::granting(NullStream::default()),
            CaptureSettings::default(),
        );
    camera.attach_sink(sink);
    camera.attach_surface(NullSurface::new(b"me"));

    let verifier = SimulatedVerifier::new(VerifyOptions::default(), NullRandom::constant(0.5));
    let mut flow = VerificationFlow::new(verifier, &IdkitConfig::default());

    assert!(matches!(flow.capture_selfie(&camera), Err(SessionError::NoFrame)));

    camera.start().await.unwrap();
    flow.capture_selfie(&camera).unwrap();
    assert_eq!(flow.selfie(), Some("data:image/jpeg;base64,bWU="));
    assert!(flow.advance());
    assert_eq!(flow.step(), VerificationStep::Phone);
}

#[tokio::test]
async fn camera_failure_surfaces_through_capture() {
    let camera: CameraController<NullMediaDevices, NullVideoSink, NullSurface> =
        CameraController::new(NullMediaDevices::unsupported(), CaptureSettings::default());
    let verifier = SimulatedVerifier::new(VerifyOptions::default(), NullRandom::constant(0.5));
    let mut flow = VerificationFlow::new(verifier, &IdkitConfig::default());

    assert!(camera.start().await.is_err());
    match flow.capture_selfie(&camera) {
        Err(SessionError::Camera(err)) => {
            assert_eq!(err.to_string(), "Camera not supported in this browser")
        }
        other => panic!("expected camera error, got {other:?}"),
    }
    assert_eq!(flow.selfie(), None);
}
