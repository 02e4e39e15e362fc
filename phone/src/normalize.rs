//! Pure normalization helpers.

use crate::countries::COUNTRIES;
use idkit_types::{CountryOption, E164};
use std::sync::OnceLock;

/// Remove every character that is not an ASCII digit.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Directory entries ordered by descending dial-code length. The sort is
/// stable, so entries sharing a dial code keep their table order.
fn by_dial_code_length() -> &'static [&'static CountryOption] {
    static SORTED: OnceLock<Vec<&'static CountryOption>> = OnceLock::new();
    SORTED.get_or_init(|| {
        let mut sorted: Vec<_> = COUNTRIES.iter().collect();
        sorted.sort_by(|a, b| b.dial_code.len().cmp(&a.dial_code.len()));
        sorted
    })
}

/// Detect the country whose dial code prefixes `digits`, preferring the
/// longest matching dial code.
pub fn find_country_by_dial_code(digits: &str) -> Option<&'static CountryOption> {
    by_dial_code_length()
        .iter()
        .find(|country| digits.starts_with(country.dial_code))
        .copied()
}

/// `+<dial_code><local_digits>`, no grouping or formatting.
pub fn build_e164(dial_code: &str, local_digits: &str) -> E164 {
    E164::from_parts(dial_code, local_digits)
}
