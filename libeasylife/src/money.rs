//! Price formatting for the `ru-RU` locale
//!
//! Thousands are grouped with a no-break space, the decimal separator is a
//! comma, at most three fraction digits are shown and trailing zeros are
//! dropped, so whole prices carry no decimals at all.

/// Currency suffix appended to every price
pub const CURRENCY_SYMBOL: &str = "₽";

const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number the way `ru-RU` locale formatting does.
///
/// ```
/// use libeasylife::money::format_number;
///
/// assert_eq!(format_number(45990.0), "45\u{a0}990");
/// assert_eq!(format_number(12.5), "12,5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "не число".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let (whole, fraction) = round_fraction(&value.abs().to_string(), MAX_FRACTION_DIGITS);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + fraction.len() + 2);
    // Rounding may produce "-0"; treat it as zero
    if value.is_sign_negative() && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

/// Format a price with the trailing currency symbol, e.g. `45 990 ₽`
pub fn format_price(value: f64) -> String {
    format!("{} {}", format_number(value), CURRENCY_SYMBOL)
}

/// Round a plain decimal string to `digits` fraction digits, halves away
/// from zero.
///
/// Works on the shortest decimal form of the float, so `0.0625` rounds up
/// to `0.063` as locale formatting does, not down to the even neighbour.
fn round_fraction(decimal: &str, digits: usize) -> (String, String) {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    if fraction.len() <= digits {
        return (whole.to_string(), fraction.to_string());
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = whole.bytes().chain(fraction[..digits].bytes()).collect();
    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let whole = kept[..split].iter().map(|&b| char::from(b)).collect();
    let fraction = kept[split..].iter().map(|&b| char::from(b)).collect();
    (whole, fraction)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
