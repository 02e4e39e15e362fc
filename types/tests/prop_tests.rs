use proptest::prelude::*;

use idkit_types::{AddressField, AddressValue, IdentityStatus, E164, PASS_THRESHOLD};

proptest! {
    /// E164 from digit-only parts always parses back to itself.
    #[test]
    fn e164_parts_parse_back(dial in "[1-9][0-9]{0,2}", local in "[0-9]{0,15}") {
        let value = E164::from_parts(&dial, &local);
        let parsed: E164 = value.as_str().parse().unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.digits().len(), dial.len() + local.len());
    }

    /// Status is verified exactly when the score reaches the threshold.
    #[test]
    fn status_matches_threshold(score in 0u8..=100) {
        let status = IdentityStatus::from_score(score);
        prop_assert_eq!(status == IdentityStatus::Verified, score >= PASS_THRESHOLD);
    }

    /// Setting one field never disturbs the others.
    #[test]
    fn address_value_set_is_isolated(idx in 0usize..6, text in ".{0,20}") {
        let field = AddressField::ALL[idx];
        let mut value = AddressValue::default();
        value.set(field, text.clone());
        for other in AddressField::ALL {
            if other == field {
                prop_assert_eq!(value.get(other), text.as_str());
            } else {
                prop_assert_eq!(value.get(other), "");
            }
        }
    }
}
