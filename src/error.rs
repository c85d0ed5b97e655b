/// Fatal URL parsing failures.
///
/// A `ParseError` means the input has no URL record at all. Recoverable
/// problems are reported as [`ValidationError`]s instead and never end a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Invalid scheme format (only reachable through a scheme override)
    InvalidScheme,
    /// Relative URL without a usable base
    RelativeUrlWithoutBase,
    /// Special URL or credentials without a host
    HostMissing,
    /// Forbidden host code point in an opaque host
    InvalidHost,
    /// Forbidden domain code point after IDNA processing
    InvalidDomainCharacter,
    /// IDNA processing error or empty domain
    IdnaError,
    /// Invalid IPv4 address
    InvalidIpv4,
    /// Invalid IPv6 address
    InvalidIpv6,
    /// Non-digit in port
    InvalidPort,
    /// Port larger than 65535
    PortOutOfRange,
    /// Setter state override could not be applied
    InvalidUrl,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::RelativeUrlWithoutBase => "Relative URL without base",
            Self::HostMissing => "Missing host",
            Self::InvalidHost => "Invalid host",
            Self::InvalidDomainCharacter => "Invalid domain character",
            Self::IdnaError => "IDNA processing error",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidPort => "Invalid port",
            Self::PortOutOfRange => "Port out of range",
            Self::InvalidUrl => "Invalid URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

macro_rules! validation_errors {
    ($($variant:ident => $name:literal, $description:literal;)+) => {
        /// Named validation errors of the URL Standard.
        ///
        /// Most of them are recoverable and only observable through the error
        /// sink. The ones that end a parse are recorded right before the
        /// matching [`ParseError`] is returned.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ValidationError {
            $(
                #[doc = $description]
                $variant,
            )+
        }

        impl ValidationError {
            /// The identifier used by the URL Standard, e.g. `"invalid-URL-unit"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Human readable description.
            pub fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }
        }
    };
}

validation_errors! {
    DomainToAscii => "domain-to-ASCII",
        "Unicode ToASCII records an error or returns the empty string.";
    DomainToUnicode => "domain-to-Unicode",
        "Unicode ToUnicode records an error.";
    DomainInvalidCodePoint => "domain-invalid-code-point",
        "The input's host contains a forbidden domain code point.";
    HostInvalidCodePoint => "host-invalid-code-point",
        "An opaque host contains a forbidden host code point.";
    Ipv4EmptyPart => "IPv4-empty-part",
        "An IPv4 address ends with a U+002E (.).";
    Ipv4TooManyParts => "IPv4-too-many-parts",
        "An IPv4 address does not consist of exactly 4 parts.";
    Ipv4NonNumericPart => "IPv4-non-numeric-part",
        "An IPv4 address part is not numeric.";
    Ipv4NonDecimalPart => "IPv4-non-decimal-part",
        "The IPv4 address contains numbers expressed using hexadecimal or octal digits.";
    Ipv4OutOfRangePart => "IPv4-out-of-range-part",
        "An IPv4 address part exceeds 255.";
    Ipv6Unclosed => "IPv6-unclosed",
        "An IPv6 address is missing the closing U+005D (]).";
    Ipv6InvalidCompression => "IPv6-invalid-compression",
        "An IPv6 address begins with improper compression.";
    Ipv6TooManyPieces => "IPv6-too-many-pieces",
        "An IPv6 address contains more than 8 pieces.";
    Ipv6MultipleCompression => "IPv6-multiple-compression",
        "An IPv6 address is compressed in more than one spot.";
    Ipv6InvalidCodePoint => "IPv6-invalid-code-point",
        "An IPv6 address contains a code point that is neither an ASCII hex digit nor a U+003A (:), or it unexpectedly ends.";
    Ipv6TooFewPieces => "IPv6-too-few-pieces",
        "An uncompressed IPv6 address contains fewer than 8 pieces.";
    Ipv4InIpv6TooManyPieces => "IPv4-in-IPv6-too-many-pieces",
        "An IPv6 address with IPv4 address syntax has more than 6 pieces.";
    Ipv4InIpv6InvalidCodePoint => "IPv4-in-IPv6-invalid-code-point",
        "An IPv4 part of an IPv6 address is empty, has a leading 0, is not a digit, or there are too many parts.";
    Ipv4InIpv6OutOfRangePart => "IPv4-in-IPv6-out-of-range-part",
        "An IPv4 part of an IPv6 address exceeds 255.";
    Ipv4InIpv6TooFewParts => "IPv4-in-IPv6-too-few-parts",
        "An IPv4 address embedded in an IPv6 address contains too few parts.";
    InvalidUrlUnit => "invalid-URL-unit",
        "A code point is found that is not a URL unit.";
    SpecialSchemeMissingFollowingSolidus => "special-scheme-missing-following-solidus",
        "The input's scheme is not followed by \"//\".";
    MissingSchemeNonRelativeUrl => "missing-scheme-non-relative-URL",
        "The input is missing a scheme and there is no base URL that can resolve it.";
    InvalidReverseSolidus => "invalid-reverse-solidus",
        "The URL has a special scheme and it uses U+005C (\\) instead of U+002F (/).";
    InvalidCredentials => "invalid-credentials",
        "The input includes credentials.";
    HostMissing => "host-missing",
        "The input has a special scheme, but does not contain a host.";
    PortOutOfRange => "port-out-of-range",
        "The input's port is too big.";
    PortInvalid => "port-invalid",
        "The input's port is invalid.";
    FileInvalidWindowsDriveLetter => "file-invalid-Windows-drive-letter",
        "A relative-URL string starts with a Windows drive letter and the base URL's scheme is \"file\".";
    FileInvalidWindowsDriveLetterHost => "file-invalid-Windows-drive-letter-host",
        "A file: URL's host is a Windows drive letter.";
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_validation_error_names() {
        assert_eq!(ValidationError::InvalidUrlUnit.name(), "invalid-URL-unit");
        assert_eq!(ValidationError::Ipv6Unclosed.name(), "IPv6-unclosed");
        assert_eq!(
            ValidationError::Ipv4InIpv6TooFewParts.to_string(),
            "IPv4-in-IPv6-too-few-parts"
        );
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::InvalidIpv6.to_string(), "Invalid IPv6 address");
        assert_eq!(ParseError::PortOutOfRange.to_string(), "Port out of range");
    }
}
