/// IPv4 address parser supporting decimal, octal, and hexadecimal notation
/// Based on the WHATWG URL Standard
use crate::compat::{String, Vec, format};
use crate::error::{ParseError, Result, ValidationError};

/// Parse an IPv4 address string into a u32.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Mixed: 192.0x00A80001
/// - Fewer parts, where the last one fills the remaining bytes: 127.1
///
/// Recoverable problems (trailing dot, non-decimal parts) are pushed onto `errors`.
pub fn parse_ipv4(input: &str, errors: &mut Vec<ValidationError>) -> Result<u32> {
    let mut parts: Vec<&str> = input.split('.').collect();

    if parts.last().is_some_and(|part| part.is_empty()) {
        errors.push(ValidationError::Ipv4EmptyPart);
        if parts.len() > 1 {
            parts.pop();
        }
    }

    if parts.len() > 4 {
        errors.push(ValidationError::Ipv4TooManyParts);
        return Err(ParseError::InvalidIpv4);
    }

    let mut numbers: Vec<u64> = Vec::with_capacity(parts.len());
    for part in &parts {
        let Some((number, non_decimal)) = parse_ipv4_number(part) else {
            errors.push(ValidationError::Ipv4NonNumericPart);
            return Err(ParseError::InvalidIpv4);
        };
        if non_decimal {
            errors.push(ValidationError::Ipv4NonDecimalPart);
        }
        numbers.push(number);
    }

    let part_count = numbers.len();
    for (i, &number) in numbers.iter().enumerate() {
        if number > 255 {
            errors.push(ValidationError::Ipv4OutOfRangePart);
            // Only the last part may span several bytes
            if i != part_count - 1 {
                return Err(ParseError::InvalidIpv4);
            }
        }
    }

    // Validate: last number must be < 256^(5-n)
    let last = numbers[part_count - 1];
    if last >= 256u64.pow((5 - part_count) as u32) {
        return Err(ParseError::InvalidIpv4);
    }

    // Each of the first (n-1) numbers represents a single byte,
    // the last number fills the remaining bytes
    let mut ipv4 = last as u32;
    for (i, &number) in numbers.iter().enumerate().take(part_count - 1) {
        ipv4 += (number as u32) << (8 * (3 - i));
    }

    Ok(ipv4)
}

/// Parse a single IPv4 number component (supports decimal, hex, octal).
///
/// Returns the value and whether it was written in a non-decimal radix, or
/// `None` when the part is empty or has digits outside its radix.
/// Values too large for `u64` saturate, they are out of range either way.
pub fn parse_ipv4_number(input: &str) -> Option<(u64, bool)> {
    if input.is_empty() {
        return None;
    }

    let (digits, radix) = if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (hex, 16)
    } else if input.len() >= 2 && input.starts_with('0') {
        (&input[1..], 8)
    } else {
        (input, 10)
    };
    let non_decimal = radix != 10;

    // Bare "0x" or "0X" is zero
    if digits.is_empty() {
        return Some((0, true));
    }

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }

    Some((value, non_decimal))
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}
