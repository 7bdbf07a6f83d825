use rust_decimal::Decimal;
use std::str::FromStr;

/// A classified usage line: description, optional quantity/unit pair, and
/// the raw trailing amount string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLine {
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub amount: String,
}

/// Classify a leaf usage line.
///
/// The line is split at its last "USD"; the left part is scanned for a
/// trailing `<number><whitespace><unit-word>` token which, when present,
/// becomes the quantity/unit pair. Lines whose description ends up empty
/// are rejected (skipped, not an error).
pub fn match_usage_line(line: &str) -> Option<UsageLine> {
    let pos = line.rfind("USD")?;
    let left = line[..pos].trim();
    let amount = line[pos..].trim();
    if amount.is_empty() {
        return None;
    }

    let (description, quantity, unit) = match split_trailing_quantity(left) {
        Some((desc, qty, unit)) => (desc, qty, unit),
        None => (left, "", ""),
    };

    if description.is_empty() {
        return None;
    }

    Some(UsageLine {
        description: description.to_string(),
        quantity: quantity.to_string(),
        unit: unit.to_string(),
        amount: amount.to_string(),
    })
}

/// Scan backwards for a trailing quantity token:
/// `<digits-with-commas-and-one-optional-dot> <unit-word>` anchored at the
/// end of the string. The unit-word is any run of ASCII alphanumerics,
/// hyphens and slashes; no check that it is a real unit of measure.
fn split_trailing_quantity(left: &str) -> Option<(&str, &str, &str)> {
    let bytes = left.as_bytes();
    let mut i = left.len();

    // Unit word
    let unit_end = i;
    while i > 0 && is_unit_byte(bytes[i - 1]) {
        i -= 1;
    }
    let unit_start = i;
    if unit_start == unit_end {
        return None;
    }

    // At least one whitespace char between number and unit
    let ws_end = i;
    while i > 0 && bytes[i - 1].is_ascii_whitespace() {
        i -= 1;
    }
    if i == ws_end {
        return None;
    }

    // Number: digits and commas, at most one decimal point
    let num_end = i;
    let mut seen_dot = false;
    let mut seen_digit = false;
    while i > 0 {
        match bytes[i - 1] {
            b'0'..=b'9' => {
                seen_digit = true;
                i -= 1;
            }
            b',' => i -= 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                i -= 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let num_start = i;

    Some((
        left[..num_start].trim_end(),
        &left[num_start..num_end],
        &left[unit_start..unit_end],
    ))
}

fn is_unit_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'/'
}

/// Normalize an amount string ("USD 1,234.56") to a decimal.
///
/// Locates the first numeric substring after stripping commas; malformed
/// trailing text yields zero, never an error.
pub fn parse_amount(raw: &str) -> Decimal {
    let stripped: String = raw.chars().filter(|c| *c != ',').collect();

    let start = match stripped.find(|c: char| c.is_ascii_digit()) {
        Some(i) => i,
        None => return Decimal::ZERO,
    };

    let mut end = start;
    let mut seen_dot = false;
    for (i, c) in stripped[start..].char_indices() {
        match c {
            '0'..='9' => end = start + i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = start + i + 1;
            }
            _ => break,
        }
    }

    let number = stripped[start..end].trim_end_matches('.');
    Decimal::from_str(number).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usage_line_with_quantity() {
        let u = match_usage_line("$0.0000002 per request 60,000,000 Requests USD 12.00").unwrap();
        assert_eq!(u.description, "$0.0000002 per request");
        assert_eq!(u.quantity, "60,000,000");
        assert_eq!(u.unit, "Requests");
        assert_eq!(u.amount, "USD 12.00");
    }

    #[test]
    fn test_usage_line_decimal_quantity() {
        let u = match_usage_line(
            "$0.059 per GB Data Processed by NAT Gateways 2,023.848 GB USD 119.41",
        )
        .unwrap();
        assert_eq!(u.description, "$0.059 per GB Data Processed by NAT Gateways");
        assert_eq!(u.quantity, "2,023.848");
        assert_eq!(u.unit, "GB");
        assert_eq!(u.amount, "USD 119.41");
    }

    #[test]
    fn test_usage_line_without_quantity() {
        let u = match_usage_line("Late fee adjustment USD 3.50").unwrap();
        assert_eq!(u.description, "Late fee adjustment");
        assert_eq!(u.quantity, "");
        assert_eq!(u.unit, "");
        assert_eq!(u.amount, "USD 3.50");
    }

    #[test]
    fn test_usage_line_slash_unit() {
        let u = match_usage_line("Requests tier 1 1,000 Req/Month USD 0.40").unwrap();
        assert_eq!(u.quantity, "1,000");
        assert_eq!(u.unit, "Req/Month");
    }

    #[test]
    fn test_usage_line_splits_on_last_usd() {
        let u = match_usage_line("Data out to USD-billed endpoint 5 GB USD 0.45").unwrap();
        assert_eq!(u.description, "Data out to USD-billed endpoint");
        assert_eq!(u.amount, "USD 0.45");
    }

    #[test]
    fn test_usage_line_requires_usd() {
        assert!(match_usage_line("Some description 5 GB").is_none());
    }

    #[test]
    fn test_usage_line_empty_description_rejected() {
        assert!(match_usage_line("60,000,000 Requests USD 12.00").is_none());
        assert!(match_usage_line("USD 12.00").is_none());
    }

    #[test]
    fn test_quantity_requires_whitespace_before_unit() {
        // "12.00" alone must not be split into a 12./00 quantity pair.
        let u = match_usage_line("Flat charge 12.00x USD 1.00").unwrap();
        assert_eq!(u.quantity, "");
        assert_eq!(u.description, "Flat charge 12.00x");
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("USD 12.00"), dec!(12.00));
    }

    #[test]
    fn test_parse_amount_commas() {
        assert_eq!(parse_amount("USD 1,234.56"), dec!(1234.56));
    }

    #[test]
    fn test_parse_amount_no_digits() {
        assert_eq!(parse_amount("USD -"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_trailing_noise() {
        assert_eq!(parse_amount("USD 42.10 (estimated)"), dec!(42.10));
    }
}
