/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// C0 control: U+0000 NULL to U+001F
pub fn is_c0_control(c: char) -> bool {
    c <= '\u{1F}'
}

/// C0 control or U+0020 SPACE
pub fn is_c0_control_or_space(c: char) -> bool {
    is_c0_control(c) || c == ' '
}

/// Host code point classification
/// Bit 0 = forbidden host code point, bit 1 = forbidden domain code point
const FORBIDDEN_HOST: u8 = 1;
const FORBIDDEN_DOMAIN: u8 = 2;

const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // C0 controls are forbidden in domains, only some of them in opaque hosts
    let mut i = 0;
    while i <= 0x1F {
        table[i] = FORBIDDEN_DOMAIN;
        i += 1;
    }
    table[0x7F] = FORBIDDEN_DOMAIN;
    table[b'%' as usize] = FORBIDDEN_DOMAIN;

    let forbidden_host = [
        0x00, b'\t', b'\n', b'\r', b' ', b'#', b'/', b':', b'<', b'>', b'?', b'@', b'[', b'\\',
        b']', b'^', b'|',
    ];
    let mut i = 0;
    while i < forbidden_host.len() {
        table[forbidden_host[i] as usize] = FORBIDDEN_HOST | FORBIDDEN_DOMAIN;
        i += 1;
    }

    table
};

/// Forbidden host code point (opaque hosts)
pub fn is_forbidden_host_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] & FORBIDDEN_HOST != 0
}

/// Forbidden domain code point: forbidden host code points plus C0 controls, `%` and DEL
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] & FORBIDDEN_DOMAIN != 0
}

/// Unicode noncharacter: U+FDD0 to U+FDEF and the last two code points of every plane
pub fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE
}

/// URL code point
///
/// ASCII alphanumeric, `!$&'()*+,-./:;=?@_~`, and U+00A0 to U+10FFFD excluding
/// surrogates (unrepresentable in `char`) and noncharacters.
pub fn is_url_code_point(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '$'
                    | '&'
                    | '\''
                    | '('
                    | ')'
                    | '*'
                    | '+'
                    | ','
                    | '-'
                    | '.'
                    | '/'
                    | ':'
                    | ';'
                    | '='
                    | '?'
                    | '@'
                    | '_'
                    | '~'
            );
    }
    c >= '\u{A0}' && !is_noncharacter(c)
}
