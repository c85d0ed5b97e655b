use crate::compat::{String, ToString};
use crate::error::ValidationError;
use idna::AsciiDenyList;

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    // Check for .xn-- patterns using memchr for faster scanning
    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Process a domain using the UTS #46 `ToASCII` algorithm with the URL
/// standard's flags (`CheckBidi`, `CheckJoiners`, no `CheckHyphens`,
/// nontransitional). `be_strict` adds `UseSTD3ASCIIRules` and `VerifyDnsLength`.
///
/// Forbidden domain code points are not rejected here, the host parser
/// checks them on the result.
pub fn domain_to_ascii(domain: &str, be_strict: bool) -> Result<String, ValidationError> {
    // Fast path: ASCII without Punycode labels only needs lowercasing
    if !be_strict && domain.is_ascii() && !has_punycode(domain) {
        if domain.is_empty() {
            return Err(ValidationError::DomainToAscii);
        }
        return Ok(domain.to_ascii_lowercase());
    }

    let result = if be_strict {
        idna::domain_to_ascii_strict(domain).ok()
    } else {
        idna::domain_to_ascii_cow(domain.as_bytes(), AsciiDenyList::EMPTY)
            .ok()
            .map(|ascii| ascii.to_string())
    };

    match result {
        Some(ascii) if !ascii.is_empty() => Ok(ascii),
        _ => Err(ValidationError::DomainToAscii),
    }
}

/// Process a domain using the UTS #46 `ToUnicode` algorithm.
///
/// Always produces a result. A recorded `ToUnicode` error is returned
/// alongside it as `domain-to-Unicode`.
pub fn domain_to_unicode(domain: &str) -> (String, Option<ValidationError>) {
    let (unicode, result) = idna::domain_to_unicode(domain);
    let error = result.err().map(|_| ValidationError::DomainToUnicode);
    (unicode, error)
}
