use crate::compat::{String, Vec};
use percent_encoding::{AsciiSet, CONTROLS, percent_encode as encode_bytes, utf8_percent_encode};

// Encode sets following the WHATWG URL standard
// https://url.spec.whatwg.org/#percent-encoded-bytes

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (for special URLs like http, https, etc.)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set
/// Query + ?, ^, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET
    .add(b'?')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Component percent-encode set
/// Userinfo + $, %, &, +, ,
pub const COMPONENT_SET: &AsciiSet = &USERINFO_SET
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',');

/// application/x-www-form-urlencoded percent-encode set
/// Component + !, ', (, ), ~
pub const FORM_URLENCODED_SET: &AsciiSet = &COMPONENT_SET
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'~');

/// Percent-encode a string using the provided encode set
pub fn percent_encode(input: &str, encode_set: &'static AsciiSet) -> String {
    let mut result = String::with_capacity(input.len());
    percent_encode_into(&mut result, input, encode_set);
    result
}

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode raw bytes, e.g. the output of an encoding override.
/// Bytes outside ASCII are always encoded.
pub fn percent_encode_bytes(input: &[u8], encode_set: &'static AsciiSet) -> String {
    let mut result = String::with_capacity(input.len());
    for chunk in encode_bytes(input, encode_set) {
        result.push_str(chunk);
    }
    result
}

/// Percent-decode a byte sequence.
///
/// Never fails: a `%` that is not followed by two hex digits is kept as is.
pub fn percent_decode(input: &[u8]) -> Vec<u8> {
    percent_encoding::percent_decode(input).collect()
}
