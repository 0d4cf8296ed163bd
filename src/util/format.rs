//! Text formatting helpers for money, masked values and report blocks.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as `$` followed by exactly two decimal places.
///
/// Halves round away from zero.
///
/// # Examples
///
/// ```
/// use employee_directory::util::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(5000, 0)), "$5000.00");
/// assert_eq!(format_currency(Decimal::new(500099, 2)), "$5000.99");
/// assert_eq!(format_currency(Decimal::new(10005, 3)), "$10.01");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Formats an amount as `$` followed by the amount rounded to a whole number.
pub fn format_whole_dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.0}", rounded)
}

/// Masks all but the last four characters of a sensitive value.
///
/// Values shorter than four characters, or missing values, are fully masked.
///
/// # Examples
///
/// ```
/// use employee_directory::util::mask_sensitive_data;
///
/// assert_eq!(mask_sensitive_data(Some("1234567890")), "****7890");
/// assert_eq!(mask_sensitive_data(Some("123")), "****");
/// assert_eq!(mask_sensitive_data(None), "****");
/// ```
pub fn mask_sensitive_data(data: Option<&str>) -> String {
    match data {
        Some(data) if data.chars().count() >= 4 => {
            let tail: String = data
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("****{}", tail)
        }
        _ => "****".to_string(),
    }
}

/// Wraps `content` in a titled report block with a footer line.
pub fn generate_report(title: &str, content: &str, footer: &str) -> String {
    let mut report = String::new();
    report.push_str("========================================\n");
    report.push_str(&format!("         {}\n", title));
    report.push_str("========================================\n");
    report.push('\n');
    report.push_str(content);
    report.push('\n');
    report.push_str("----------------------------------------\n");
    report.push_str(&format!("{}\n", footer));
    report.push_str("========================================\n");
    report
}
