//! Single-line display helpers.

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"123 Main St, Apt 4"`; blank lines are skipped.
pub fn format_address_line(line1: &str, line2: &str) -> String {
    join_non_empty(&[line1, line2])
}

/// `"San Francisco, CA, 94102"`; blank parts are skipped.
pub fn format_city_line(city: &str, region: &str, postal_code: &str) -> String {
    join_non_empty(&[city, region, postal_code])
}
