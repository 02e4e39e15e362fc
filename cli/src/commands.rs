//! Subcommand implementations. Each returns a serializable report that
//! `main` prints as JSON.

use anyhow::{bail, Context};
use idkit_address::{
    format_city_line, normalize_address, parse_address_input, validate_required, FieldErrors,
};
use idkit_camera::data_url;
use idkit_phone::{PhoneController, COUNTRIES};
use idkit_session::{IdkitConfig, VerificationFlow};
use idkit_types::{Address, AddressInput, AddressValue, CountryOption, IdentityData};
use idkit_verification::{
    RandomSource, SeededRandom, SimulatedVerifier, ThreadRandom, VerifyOptions,
};
use serde::Serialize;
use std::path::Path;

pub fn countries() -> &'static [CountryOption] {
    COUNTRIES
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneReport {
    pub value: Option<String>,
    pub country: &'static str,
    pub dial_code: &'static str,
    pub local_digits: String,
    pub error: Option<String>,
    pub warning: Option<String>,
}

pub fn phone(raw: &str, country: &str) -> PhoneReport {
    let mut controller = PhoneController::new(country);
    let update = controller.set_raw_input(raw);
    PhoneReport {
        value: controller.value().map(|e164| e164.as_str().to_string()),
        country: controller.country().code,
        dial_code: controller.country().dial_code,
        local_digits: controller.local_digits().to_string(),
        error: update.error.map(|e| e.to_string()),
        warning: update.warning.map(|w| w.to_string()),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressReport {
    pub address: Address,
    pub city_line: String,
    pub errors: Option<FieldErrors>,
}

/// Normalize either the form fields or a JSON document of either shape.
/// Required fields are only checked for form input.
pub fn address(
    form: AddressValue,
    json: Option<&str>,
    config: &IdkitConfig,
) -> anyhow::Result<AddressReport> {
    let input = match json {
        Some(text) => {
            let value = serde_json::from_str(text).context("address JSON is not valid JSON")?;
            parse_address_input(value)?
        }
        None => AddressInput::Form(form),
    };
    let errors = match &input {
        AddressInput::Form(value) => validate_required(value, &config.required_fields),
        AddressInput::Canonical(_) => None,
    };
    let address = normalize_address(input);
    Ok(AddressReport {
        city_line: format_city_line(&address.city, &address.state, &address.postal_code),
        address,
        errors,
    })
}

/// A `data:` URL as-is, otherwise a path to an image file.
pub fn load_selfie(selfie: &str, config: &IdkitConfig) -> anyhow::Result<String> {
    if selfie.starts_with("data:") {
        return Ok(selfie.to_string());
    }
    let bytes = std::fs::read(Path::new(selfie))
        .with_context(|| format!("failed to read selfie image {selfie}"))?;
    Ok(data_url(config.capture.image_format, &bytes))
}

pub async fn verify(
    selfie: String,
    raw_phone: &str,
    address: AddressValue,
    options: VerifyOptions,
    seed: Option<u64>,
    config: &IdkitConfig,
) -> anyhow::Result<IdentityData> {
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let verifier = SimulatedVerifier::new(options, rng);
    let mut flow = VerificationFlow::resume(verifier, config, Some(selfie), None, address);

    flow.phone_mut().set_raw_input(raw_phone);
    if let Some(err) = flow.phone().error() {
        bail!("invalid phone number: {err}");
    }
    if flow.phone().value().is_none() {
        bail!("a phone number is required");
    }

    Ok(flow.submit().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use idkit_types::IdentityStatus;
    use std::io::Write;

    fn form() -> AddressValue {
        AddressValue {
            line1: "350 5th Ave".into(),
            line2: "Floor 34".into(),
            city: "New York".into(),
            region: "NY".into(),
            postal_code: "10118".into(),
            country: "US".into(),
        }
    }

    #[test]
    fn phone_report_detects_country() {
        let report = phone("+81 3-1234-5678", "US");
        assert_eq!(report.country, "JP");
        assert_eq!(report.value.as_deref(), Some("+81312345678"));
        assert_eq!(report.warning.as_deref(), Some("Only numbers are allowed."));
        assert_eq!(report.error, None);
    }

    #[test]
    fn phone_report_carries_validation_message() {
        let report = phone("12", "GB");
        assert_eq!(report.value.as_deref(), Some("+4412"));
        assert_eq!(
            report.error.as_deref(),
            Some("Phone number must be at least 7 digits.")
        );
    }

    #[test]
    fn address_report_from_form() {
        let report = address(form(), None, &IdkitConfig::default()).unwrap();
        assert_eq!(report.address.street, "350 5th Ave, Floor 34");
        assert_eq!(report.city_line, "New York, NY, 10118");
        assert!(report.errors.is_none());
    }

    #[test]
    fn address_report_flags_blank_fields() {
        let report = address(AddressValue::default(), None, &IdkitConfig::default()).unwrap();
        assert_eq!(report.errors.map(|e| e.len()), Some(5));
    }

    #[test]
    fn address_report_from_canonical_json() {
        let json = r#"{
            "street": "1 Main St",
            "city": "Austin",
            "state": "TX",
            "country": "US",
            "postalCode": "73301"
        }"#;
        let report = address(AddressValue::default(), Some(json), &IdkitConfig::default()).unwrap();
        assert_eq!(report.address.street, "1 Main St");
        assert!(report.errors.is_none());
    }

    #[test]
    fn address_rejects_non_object_json() {
        assert!(address(AddressValue::default(), Some("[1,2]"), &IdkitConfig::default()).is_err());
        assert!(address(AddressValue::default(), Some("{"), &IdkitConfig::default()).is_err());
    }

    #[test]
    fn selfie_file_becomes_data_url() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"hi").expect("write");
        let path = file.path().to_str().expect("utf-8 path").to_string();

        let url = load_selfie(&path, &IdkitConfig::default()).unwrap();
        assert_eq!(url, "data:image/jpeg;base64,aGk=");
        assert_eq!(load_selfie("data:x", &IdkitConfig::default()).unwrap(), "data:x");
        assert!(load_selfie("/nonexistent/selfie.jpg", &IdkitConfig::default()).is_err());
    }

    #[tokio::test]
    async fn seeded_verification_is_reproducible() {
        let config = IdkitConfig::default();
        let options = VerifyOptions {
            error_rate: 0.0,
            ..VerifyOptions::default()
        };
        let a = verify("data:x".into(), "4155552671", form(), options, Some(9), &config)
            .await
            .unwrap();
        let b = verify("data:x".into(), "4155552671", form(), options, Some(9), &config)
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.phone, "+14155552671");
        assert_eq!(a.status, IdentityStatus::from_score(a.score));
    }

    #[tokio::test]
    async fn verification_rejects_bad_phone() {
        let err = verify(
            "data:x".into(),
            "12ab",
            form(),
            VerifyOptions::default(),
            Some(1),
            &IdkitConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Digits only"));
    }
}
