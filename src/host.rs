//! Host parsing and serialization.
//!
//! <https://url.spec.whatwg.org/#host-parsing>

use crate::character_sets::{
    is_forbidden_domain_code_point, is_forbidden_host_code_point, is_url_code_point,
};
use crate::checkers::{ends_in_a_number, starts_with_two_hex_digits};
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result, ValidationError};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{C0_CONTROL_SET, percent_decode, percent_encode};
use core::fmt;

/// A parsed host.
///
/// A URL without a host stores `None`, so there is no null variant here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// ASCII domain, lowercase and IDNA processed
    Domain(String),
    /// IPv4 address as a big-endian 32-bit number
    Ipv4(u32),
    /// IPv6 address as 8 pieces
    Ipv6([u16; 8]),
    /// Host of a non-special URL, percent-encoded
    Opaque(String),
    /// The empty host
    Empty,
}

impl Host {
    /// Parse a host string.
    ///
    /// `is_opaque` is true for non-special URLs. Recoverable problems are pushed
    /// onto `errors`, and a fatal outcome records its validation error there
    /// before returning.
    pub fn parse(input: &str, is_opaque: bool, errors: &mut Vec<ValidationError>) -> Result<Self> {
        if let Some(rest) = input.strip_prefix('[') {
            let Some(address) = rest.strip_suffix(']') else {
                errors.push(ValidationError::Ipv6Unclosed);
                return Err(ParseError::InvalidIpv6);
            };
            return parse_ipv6(address, errors).map(Self::Ipv6);
        }

        if is_opaque {
            return parse_opaque_host(input, errors);
        }

        let decoded = percent_decode(input.as_bytes());
        let domain = String::from_utf8_lossy(&decoded);

        let ascii_domain = match domain_to_ascii(&domain, false) {
            Ok(ascii) => ascii,
            Err(error) => {
                errors.push(error);
                return Err(ParseError::IdnaError);
            }
        };

        if ascii_domain.chars().any(is_forbidden_domain_code_point) {
            errors.push(ValidationError::DomainInvalidCodePoint);
            return Err(ParseError::InvalidDomainCharacter);
        }

        if ends_in_a_number(&ascii_domain) {
            return parse_ipv4(&ascii_domain, errors).map(Self::Ipv4);
        }

        Ok(Self::Domain(ascii_domain))
    }

    /// Whether this is the domain `localhost`
    pub fn is_localhost(&self) -> bool {
        matches!(self, Self::Domain(domain) if domain == "localhost")
    }
}

/// Parse the host of a non-special URL.
///
/// Only forbidden host code points are fatal. Other non-URL code points and
/// stray `%` signs are reported and then kept, percent-encoded with the C0
/// control set. An empty input is the empty host.
pub fn parse_opaque_host(input: &str, errors: &mut Vec<ValidationError>) -> Result<Host> {
    if input.is_empty() {
        return Ok(Host::Empty);
    }

    if input.chars().any(is_forbidden_host_code_point) {
        errors.push(ValidationError::HostInvalidCodePoint);
        return Err(ParseError::InvalidHost);
    }

    let chars: Vec<char> = input.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '%' {
            if !starts_with_two_hex_digits(&chars[i + 1..]) {
                errors.push(ValidationError::InvalidUrlUnit);
            }
        } else if !is_url_code_point(c) {
            errors.push(ValidationError::InvalidUrlUnit);
        }
    }

    Ok(Host::Opaque(percent_encode(input, C0_CONTROL_SET)))
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(domain) | Self::Opaque(domain) => f.write_str(domain),
            Self::Ipv4(address) => f.write_str(&serialize_ipv4(*address)),
            Self::Ipv6(pieces) => write!(f, "[{}]", serialize_ipv6(pieces)),
            Self::Empty => Ok(()),
        }
    }
}
