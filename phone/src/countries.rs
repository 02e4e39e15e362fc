//! Country directory.

use idkit_types::CountryOption;

/// Supported countries, in display order. Codes are unique; dial codes are not
/// (US and CA share `1`), so lookups by dial code resolve ties by table order.
pub static COUNTRIES: &[CountryOption] = &[
    CountryOption::new("US", "United States", "1"),
    CountryOption::new("CA", "Canada", "1"),
    CountryOption::new("GB", "United Kingdom", "44"),
    CountryOption::new("DE", "Germany", "49"),
    CountryOption::new("FR", "France", "33"),
    CountryOption::new("ES", "Spain", "34"),
    CountryOption::new("IT", "Italy", "39"),
    CountryOption::new("NL", "Netherlands", "31"),
    CountryOption::new("BR", "Brazil", "55"),
    CountryOption::new("MX", "Mexico", "52"),
    CountryOption::new("AR", "Argentina", "54"),
    CountryOption::new("CL", "Chile", "56"),
    CountryOption::new("AU", "Australia", "61"),
    CountryOption::new("NZ", "New Zealand", "64"),
    CountryOption::new("JP", "Japan", "81"),
    CountryOption::new("CN", "China", "86"),
    CountryOption::new("KR", "South Korea", "82"),
    CountryOption::new("IN", "India", "91"),
];

/// Used when a requested default country is not in the directory.
pub fn default_country() -> &'static CountryOption {
    &COUNTRIES[0]
}

/// Look up a country by its ISO code (exact, case-sensitive).
pub fn country_by_code(code: &str) -> Option<&'static CountryOption> {
    COUNTRIES.iter().find(|country| country.code == code)
}
