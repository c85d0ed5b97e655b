use crate::ipv4::parse_ipv4_number;

/// Check whether a host string ends in a number (the IPv4 "ends in a number" checker).
/// Hosts that do are handed to the IPv4 parser instead of becoming a domain.
pub fn ends_in_a_number(input: &str) -> bool {
    let mut parts = input.rsplit('.');
    let Some(mut last) = parts.next() else {
        return false;
    };

    // A single trailing dot is ignored, unless it is the only part
    if last.is_empty() {
        match parts.next() {
            Some(previous) => last = previous,
            None => return false,
        }
    }

    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    parse_ipv4_number(last).is_some()
}

/// A Windows drive letter: an ASCII alpha followed by `:` or `|`.
pub fn is_windows_drive_letter(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// A Windows drive letter whose second code point is `:`.
pub fn is_normalized_windows_drive_letter(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Check if code points start with a Windows drive letter.
/// A valid drive letter is: [a-zA-Z][:|] followed by [/\?#] or end of input.
pub fn starts_with_windows_drive_letter(chars: &[char]) -> bool {
    if chars.len() < 2 {
        return false;
    }
    if !chars[0].is_ascii_alphabetic() || !matches!(chars[1], ':' | '|') {
        return false;
    }
    chars.len() == 2 || matches!(chars[2], '/' | '\\' | '?' | '#')
}

/// `.` or `%2e`, ASCII case-insensitive
pub fn is_single_dot_segment(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

/// `..`, `.%2e`, `%2e.` or `%2e%2e`, ASCII case-insensitive
pub fn is_double_dot_segment(segment: &str) -> bool {
    match segment.len() {
        2 => segment == "..",
        4 => segment.eq_ignore_ascii_case(".%2e") || segment.eq_ignore_ascii_case("%2e."),
        6 => segment.eq_ignore_ascii_case("%2e%2e"),
        _ => false,
    }
}

/// Check whether the code points start with two ASCII hex digits.
pub fn starts_with_two_hex_digits(chars: &[char]) -> bool {
    chars.len() >= 2 && chars[0].is_ascii_hexdigit() && chars[1].is_ascii_hexdigit()
}
