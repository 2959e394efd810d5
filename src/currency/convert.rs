//! Amount parsing, conversion and formatting.

/// Parse the longest leading decimal number in `amount`, the way a browser's
/// `parseFloat` does: `"12.5kg"` → 12.5, `"abc"` → `None`.
pub fn parse_amount(amount: &str) -> Option<f64> {
    let trimmed = amount.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    // Optional exponent, only consumed when followed by digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Multiply `amount` by `rate`. Unparseable amounts and missing or zero rates
/// give 0.
pub fn convert(amount: &str, rate: Option<f64>) -> f64 {
    match (parse_amount(amount), rate) {
        (Some(value), Some(rate)) if rate != 0.0 && rate.is_finite() => value * rate,
        _ => 0.0,
    }
}

/// Two decimals with thousands separators: `1,234.50`. Non-finite values
/// render as `0.00`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Four decimals, as in `1 USD = 0.9213 EUR`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}
