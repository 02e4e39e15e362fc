//! The selfie → phone → address verification flow.

use crate::config::IdkitConfig;
use crate::error::SessionError;
use idkit_address::AddressForm;
use idkit_camera::{CameraController, MediaDevices, Surface, VideoSink};
use idkit_phone::PhoneController;
use idkit_types::{AddressInput, AddressValue, IdentityData, IdentityInput};
use idkit_verification::VerificationMethod;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStep {
    Selfie,
    Phone,
    Address,
}

impl fmt::Display for VerificationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selfie => "selfie",
            Self::Phone => "phone",
            Self::Address => "address",
        })
    }
}

/// Holds the verifier taken from `slot` for one submission and puts it back
/// on drop, including when the submission is dropped mid-flight.
struct Lease<'a, V> {
    slot: &'a RefCell<Option<V>>,
    verifier: Option<V>,
}

impl<V> Drop for Lease<'_, V> {
    fn drop(&mut self) {
        if let Some(verifier) = self.verifier.take() {
            *self.slot.borrow_mut() = Some(verifier);
        }
    }
}

/// Collects a selfie, a phone number and an address, then runs one
/// verification.
///
/// Editing goes through `&mut self`; [`submit`](Self::submit) takes `&self`
/// and holds the verifier for the duration of the call, so overlapping
/// submissions are refused rather than queued.
pub struct VerificationFlow<V> {
    step: VerificationStep,
    selfie: Option<String>,
    phone: PhoneController,
    address: AddressForm,
    verifier: RefCell<Option<V>>,
    last_error: RefCell<Option<String>>,
}

impl<V: VerificationMethod> VerificationFlow<V> {
    /// A fresh flow starting at the selfie step.
    pub fn new(verifier: V, config: &IdkitConfig) -> Self {
        Self::resume(verifier, config, None, None, AddressValue::default())
    }

    /// Rebuild a flow from previously collected data. The starting step is
    /// the first one whose data is missing or invalid, never past `Address`.
    pub fn resume(
        verifier: V,
        config: &IdkitConfig,
        selfie: Option<String>,
        phone: Option<&str>,
        address: AddressValue,
    ) -> Self {
        let mut controller = PhoneController::new(&config.default_country);
        if let Some(phone) = phone {
            controller.sync_external(phone);
        }
        let mut flow = Self {
            step: VerificationStep::Selfie,
            selfie,
            phone: controller,
            address: AddressForm::new(address, config.required_fields.clone()),
            verifier: RefCell::new(Some(verifier)),
            last_error: RefCell::new(None),
        };
        flow.step = flow.initial_step();
        flow
    }

    fn initial_step(&self) -> VerificationStep {
        if self.selfie.is_none() {
            VerificationStep::Selfie
        } else if self.phone_ready() {
            VerificationStep::Address
        } else {
            VerificationStep::Phone
        }
    }

    fn phone_ready(&self) -> bool {
        self.phone.value().is_some() && self.phone.error().is_none()
    }

    pub fn step(&self) -> VerificationStep {
        self.step
    }

    pub fn selfie(&self) -> Option<&str> {
        self.selfie.as_deref()
    }

    pub fn phone(&self) -> &PhoneController {
        &self.phone
    }

    pub fn phone_mut(&mut self) -> &mut PhoneController {
        &mut self.phone
    }

    pub fn address(&self) -> &AddressForm {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut AddressForm {
        &mut self.address
    }

    /// Whether a submission is currently running.
    pub fn is_verifying(&self) -> bool {
        self.verifier.borrow().is_none()
    }

    /// Message of the most recent failed submission, cleared when a new one
    /// starts.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// Record or clear the captured selfie.
    pub fn set_selfie(&mut self, selfie: Option<String>) {
        debug!(present = selfie.is_some(), "selfie updated");
        self.selfie = selfie;
    }

    /// Take a still from `camera` as the selfie.
    ///
    /// Fails with the camera's recorded error when it has one, otherwise with
    /// [`SessionError::NoFrame`].
    pub fn capture_selfie<D, K, F>(
        &mut self,
        camera: &CameraController<D, K, F>,
    ) -> Result<(), SessionError>
    where
        D: MediaDevices,
        K: VideoSink<D::Stream>,
        F: Surface<K>,
    {
        match camera.capture_image() {
            Some(url) => {
                self.set_selfie(Some(url));
                Ok(())
            }
            None => Err(camera.error().map_or(SessionError::NoFrame, SessionError::Camera)),
        }
    }

    /// Whether the current step's data allows moving on.
    pub fn can_continue(&self) -> bool {
        match self.step {
            VerificationStep::Selfie => self.selfie.is_some(),
            VerificationStep::Phone => self.phone_ready(),
            VerificationStep::Address => self.address.errors().is_none() && !self.is_verifying(),
        }
    }

    /// Move to the next step if allowed. The address step is final; it is
    /// left by [`submit`](Self::submit).
    pub fn advance(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        let next = match self.step {
            VerificationStep::Selfie => VerificationStep::Phone,
            VerificationStep::Phone => VerificationStep::Address,
            VerificationStep::Address => return false,
        };
        debug!(from = %self.step, to = %next, "flow advanced");
        self.step = next;
        true
    }

    /// Build the verifier input from the collected data.
    pub fn identity_input(&self) -> Result<IdentityInput, SessionError> {
        let selfie_url = self.selfie.clone().ok_or(SessionError::MissingSelfie)?;
        if let Some(errors) = self.address.errors() {
            return Err(SessionError::IncompleteAddress(errors));
        }
        Ok(IdentityInput {
            selfie_url,
            phone: self
                .phone
                .value()
                .map(|e164| e164.as_str().to_string())
                .unwrap_or_default(),
            address: AddressInput::Form(self.address.value().clone()),
        })
    }

    /// Run the verifier once over the collected data.
    ///
    /// A failed verification records its message in
    /// [`last_error`](Self::last_error). Refused with
    /// [`SessionError::VerificationInFlight`] while another submission holds
    /// the verifier.
    pub async fn submit(&self) -> Result<IdentityData, SessionError> {
        let input = self.identity_input()?;
        let Some(verifier) = self.verifier.borrow_mut().take() else {
            debug!("submit refused: verification in flight");
            return Err(SessionError::VerificationInFlight);
        };
        let mut lease = Lease {
            slot: &self.verifier,
            verifier: None,
        };
        let verifier = lease.verifier.insert(verifier);
        *self.last_error.borrow_mut() = None;

        let result = verifier.verify(input).await;
        drop(lease);

        match result {
            Ok(data) => {
                info!(score = data.score, status = %data.status, "identity verified");
                Ok(data)
            }
            Err(err) => {
                warn!(%err, "verification failed");
                *self.last_error.borrow_mut() = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
