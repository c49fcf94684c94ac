/// Formats an integer with `,` grouping separators (`214118` -> `214,118`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a non-negative quantity rounded to the nearest integer with grouping.
///
/// Non-finite and negative inputs format as `0`.
#[must_use]
pub fn group_thousands_f64(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_owned();
    }
    group_thousands(value.round() as u64)
}

/// Formats a quantity in millions with one decimal (`28_500_000` -> `28.5M`).
#[must_use]
pub fn format_millions(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}
