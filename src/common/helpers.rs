// Helper functions for HTML output and safe logging

/// Escapes text for use inside HTML element bodies and quoted attributes.
///
/// # Example
/// ```
/// let escaped = escape_html(r#"<b>"Tom" & 'Jerry'</b>"#);
/// // Returns: "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
/// ```
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Formats a price with two decimals and comma thousands separators.
///
/// Rounds half away from zero on the shortest decimal form of the value, so
/// `1.005` becomes `1.01` even though the nearest binary double is below it.
///
/// # Example
/// ```
/// let formatted = format_price(1499.99);
/// // Returns: "1,499.99"
/// ```
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Display for f64 never uses exponent notation
    let plain = value.abs().to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let fraction = format!("{:0<3}", fraction);

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 3);
    for (i, digit) in whole.iter().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }
    grouped.push('.');
    grouped.extend(cents.iter().map(|digit| char::from(*digit)));

    let is_zero = digits.iter().all(|digit| *digit == b'0');
    if value < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Shortens free text for log lines so request bodies never flood the log
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#039;y&#039;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("قلم أزرق"), "قلم أزرق");
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1499.99), "1,499.99");
        assert_eq!(format_price(1234567.0), "1,234,567.00");
        assert_eq!(format_price(4.5), "4.50");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(999.999), "1,000.00");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(1.005), "1.01");
        assert_eq!(format_price(1.115), "1.12");
        assert_eq!(format_price(2.675), "2.68");
        assert_eq!(format_price(0.004), "0.00");
        assert_eq!(format_price(-1.005), "-1.01");
        assert_eq!(format_price(-0.001), "0.00");
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("abcdef", 3), "abc...");
        assert_eq!(truncate_for_log("abc", 3), "abc");
    }
}
