use super::State;
use crate::character_sets::is_url_code_point;
use crate::checkers::{
    is_double_dot_segment, is_normalized_windows_drive_letter, is_single_dot_segment,
    is_windows_drive_letter, starts_with_two_hex_digits, starts_with_windows_drive_letter,
};
use crate::compat::{Cow, String, Vec};
use crate::error::{ParseError, Result, ValidationError};
use crate::helpers::{remove_tabs_and_newlines, trim_c0_control_or_space};
use crate::host::Host;
use crate::types::SchemeType;
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    percent_encode, percent_encode_bytes, percent_encode_into,
};
use crate::url::{Url, UrlPath};
use percent_encoding::AsciiSet;
use tracing::{debug, trace};

/// Turns query text into bytes for a legacy document encoding.
/// `None` means UTF-8.
pub type EncodingOverride<'a> = Option<&'a dyn Fn(&str) -> Cow<'_, [u8]>>;

/// What the main loop does after a state has handled the current code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Move on to the next code point, or stop at the end of input
    Advance,
    /// Run the (new) state on the same code point
    Reconsume,
    /// Restart from the first code point in the no scheme state
    StartOver,
    /// Stop, the URL record is complete
    Return,
}

/// Parse a URL string into a new URL record.
///
/// Leading and trailing C0 controls and spaces are trimmed, ASCII tabs and
/// newlines are removed. Each of those records `invalid-URL-unit`.
///
/// # Errors
///
/// Returns an error if the input is invalid according to the WHATWG URL Standard.
pub fn basic_parse(
    input: &str,
    base: Option<&Url>,
    encoding_override: EncodingOverride<'_>,
    errors: &mut Vec<ValidationError>,
) -> Result<Url> {
    let (input, trimmed) = trim_c0_control_or_space(input);
    if trimmed {
        trace!(error = ValidationError::InvalidUrlUnit.name(), "trimmed input");
        errors.push(ValidationError::InvalidUrlUnit);
    }

    let mut url = Url::empty();
    run(input, base, &mut url, None, encoding_override, errors)?;
    Ok(url)
}

/// Re-run the state machine on an existing URL record, starting in
/// `state_override`. This is how setters update a single component.
///
/// The record may be partially updated when an error is returned.
///
/// # Errors
///
/// Returns an error if the input cannot be applied to the record.
pub fn basic_parse_with_override(
    input: &str,
    url: &mut Url,
    state_override: State,
    errors: &mut Vec<ValidationError>,
) -> Result<()> {
    trace!(state = ?state_override, "state override");
    run(input, None, url, Some(state_override), None, errors)
}

fn run(
    input: &str,
    base: Option<&Url>,
    url: &mut Url,
    state_override: Option<State>,
    encoding_override: EncodingOverride<'_>,
    errors: &mut Vec<ValidationError>,
) -> Result<()> {
    let (input, removed) = remove_tabs_and_newlines(input);
    if removed {
        trace!(
            error = ValidationError::InvalidUrlUnit.name(),
            "removed tab or newline"
        );
        errors.push(ValidationError::InvalidUrlUnit);
    }

    let mut parser = Parser {
        input: input.chars().collect(),
        pointer: 0,
        buffer: String::new(),
        base,
        url,
        state: state_override.unwrap_or(State::SchemeStart),
        state_override,
        encoding_override,
        errors,
        at_sign_seen: false,
        inside_brackets: false,
        password_token_seen: false,
    };
    parser.run()
}

struct Parser<'a> {
    input: Vec<char>,
    pointer: usize,
    buffer: String,
    base: Option<&'a Url>,
    url: &'a mut Url,
    state: State,
    state_override: Option<State>,
    encoding_override: EncodingOverride<'a>,
    errors: &'a mut Vec<ValidationError>,
    at_sign_seen: bool,
    inside_brackets: bool,
    password_token_seen: bool,
}

impl Parser<'_> {
    fn run(&mut self) -> Result<()> {
        loop {
            // None is the EOF code point
            let c = self.input.get(self.pointer).copied();

            let step = match self.state {
                State::SchemeStart => self.scheme_start(c),
                State::Scheme => self.scheme(c),
                State::NoScheme => self.no_scheme(c),
                State::SpecialRelativeOrAuthority => self.special_relative_or_authority(c),
                State::PathOrAuthority => Ok(self.path_or_authority(c)),
                State::Relative => self.relative(c),
                State::RelativeSlash => Ok(self.relative_slash(c)),
                State::SpecialAuthoritySlashes => Ok(self.special_authority_slashes(c)),
                State::SpecialAuthorityIgnoreSlashes => {
                    Ok(self.special_authority_ignore_slashes(c))
                }
                State::Authority => self.authority(c),
                State::Host | State::Hostname => self.host(c),
                State::Port => self.port(c),
                State::File => Ok(self.file(c)),
                State::FileSlash => Ok(self.file_slash(c)),
                State::FileHost => self.file_host(c),
                State::PathStart => Ok(self.path_start(c)),
                State::Path => Ok(self.path(c)),
                State::OpaquePath => Ok(self.opaque_path(c)),
                State::Query => Ok(self.query(c)),
                State::Fragment => Ok(self.fragment(c)),
            }?;

            match step {
                Step::Advance => {
                    if self.pointer >= self.input.len() {
                        return Ok(());
                    }
                    self.pointer += 1;
                }
                Step::Reconsume => {}
                Step::StartOver => self.pointer = 0,
                Step::Return => return Ok(()),
            }
        }
    }

    fn validation_error(&mut self, error: ValidationError) {
        trace!(
            error = error.name(),
            pointer = self.pointer,
            state = ?self.state,
            "validation error"
        );
        self.errors.push(error);
    }

    /// Record a validation error and fail
    fn fail(&mut self, error: ValidationError, failure: ParseError) -> Result<Step> {
        self.validation_error(error);
        self.failure(failure)
    }

    fn failure(&self, failure: ParseError) -> Result<Step> {
        debug!(%failure, pointer = self.pointer, state = ?self.state, "URL parsing failed");
        Err(failure)
    }

    /// Code points after the current one
    fn remaining(&self) -> &[char] {
        self.input.get(self.pointer + 1..).unwrap_or(&[])
    }

    fn remaining_starts_with(&self, prefix: char) -> bool {
        self.remaining().first() == Some(&prefix)
    }

    /// From the current code point to the end of input
    fn rest(&self) -> &[char] {
        self.input.get(self.pointer..).unwrap_or(&[])
    }

    /// Check a code point that is about to be percent-encoded
    fn check_url_unit(&mut self, c: char) {
        if c == '%' {
            if !starts_with_two_hex_digits(self.remaining()) {
                self.validation_error(ValidationError::InvalidUrlUnit);
            }
        } else if !is_url_code_point(c) {
            self.validation_error(ValidationError::InvalidUrlUnit);
        }
    }

    /// Run the host parser on the buffer
    fn parse_host(&mut self, is_opaque: bool) -> Result<Host> {
        let recorded = self.errors.len();
        let result = Host::parse(&self.buffer, is_opaque, self.errors);
        for error in &self.errors[recorded..] {
            trace!(error = error.name(), pointer = self.pointer, "host validation error");
        }
        if let Err(failure) = result {
            debug!(%failure, host = %self.buffer, "host parsing failed");
        }
        result
    }

    fn scheme_start(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_alphabetic() => {
                self.buffer.push(c.to_ascii_lowercase());
                self.state = State::Scheme;
                Ok(Step::Advance)
            }
            _ if self.state_override.is_none() => {
                self.state = State::NoScheme;
                Ok(Step::Reconsume)
            }
            _ => self.failure(ParseError::InvalidScheme),
        }
    }

    fn scheme(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {
                self.buffer.push(c.to_ascii_lowercase());
                Ok(Step::Advance)
            }
            Some(':') => self.end_of_scheme(),
            _ if self.state_override.is_none() => {
                self.buffer.clear();
                self.state = State::NoScheme;
                Ok(Step::StartOver)
            }
            _ => self.failure(ParseError::InvalidScheme),
        }
    }

    fn end_of_scheme(&mut self) -> Result<Step> {
        if self.state_override.is_some() {
            let new_type = SchemeType::from_scheme(&self.buffer);
            // Special and non-special schemes cannot be swapped
            if self.url.is_special() != new_type.is_special() {
                return Ok(Step::Return);
            }
            if (self.url.includes_credentials() || self.url.port.is_some())
                && new_type == SchemeType::File
            {
                return Ok(Step::Return);
            }
            if self.url.scheme_type == SchemeType::File && self.url.host == Some(Host::Empty) {
                return Ok(Step::Return);
            }
        }

        let scheme = core::mem::take(&mut self.buffer);
        self.url.set_scheme(scheme);

        if self.state_override.is_some() {
            if self.url.port.is_some() && self.url.port == self.url.scheme_type.default_port() {
                self.url.port = None;
            }
            return Ok(Step::Return);
        }

        let same_scheme_as_base = self
            .base
            .is_some_and(|base| base.scheme == self.url.scheme);

        if self.url.scheme_type == SchemeType::File {
            if !self.remaining().starts_with(&['/', '/']) {
                self.validation_error(ValidationError::SpecialSchemeMissingFollowingSolidus);
            }
            self.state = State::File;
        } else if self.url.is_special() && same_scheme_as_base {
            self.state = State::SpecialRelativeOrAuthority;
        } else if self.url.is_special() {
            self.state = State::SpecialAuthoritySlashes;
        } else if self.remaining_starts_with('/') {
            self.state = State::PathOrAuthority;
            self.pointer += 1;
        } else {
            self.url.path = UrlPath::Opaque(String::new());
            self.state = State::OpaquePath;
        }
        Ok(Step::Advance)
    }

    fn no_scheme(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return self.fail(
                ValidationError::MissingSchemeNonRelativeUrl,
                ParseError::RelativeUrlWithoutBase,
            );
        };

        if base.has_opaque_path() {
            if c != Some('#') {
                return self.fail(
                    ValidationError::MissingSchemeNonRelativeUrl,
                    ParseError::RelativeUrlWithoutBase,
                );
            }
            self.url.set_scheme(base.scheme.clone());
            self.url.path = base.path.clone();
            self.url.query.clone_from(&base.query);
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
            return Ok(Step::Advance);
        }

        self.state = if base.scheme_type == SchemeType::File {
            State::File
        } else {
            State::Relative
        };
        Ok(Step::Reconsume)
    }

    fn special_relative_or_authority(&mut self, c: Option<char>) -> Result<Step> {
        if c == Some('/') && self.remaining_starts_with('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer += 1;
            Ok(Step::Advance)
        } else {
            self.validation_error(ValidationError::SpecialSchemeMissingFollowingSolidus);
            self.state = State::Relative;
            Ok(Step::Reconsume)
        }
    }

    fn path_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') {
            self.state = State::Authority;
            Step::Advance
        } else {
            self.state = State::Path;
            Step::Reconsume
        }
    }

    fn relative(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return self.failure(ParseError::RelativeUrlWithoutBase);
        };
        self.url.set_scheme(base.scheme.clone());

        match c {
            Some('/') => self.state = State::RelativeSlash,
            Some('\\') if self.url.is_special() => {
                self.validation_error(ValidationError::InvalidReverseSolidus);
                self.state = State::RelativeSlash;
            }
            _ => {
                self.url.copy_authority(base);
                self.url.path = base.path.clone();
                self.url.query.clone_from(&base.query);

                match c {
                    Some('?') => {
                        self.url.query = Some(String::new());
                        self.state = State::Query;
                    }
                    Some('#') => {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    }
                    Some(_) => {
                        self.url.query = None;
                        self.url.shorten_path();
                        self.state = State::Path;
                        return Ok(Step::Reconsume);
                    }
                    None => {}
                }
            }
        }
        Ok(Step::Advance)
    }

    fn relative_slash(&mut self, c: Option<char>) -> Step {
        if self.url.is_special() && matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation_error(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::SpecialAuthorityIgnoreSlashes;
            Step::Advance
        } else if c == Some('/') {
            self.state = State::Authority;
            Step::Advance
        } else {
            if let Some(base) = self.base {
                self.url.copy_authority(base);
            }
            self.state = State::Path;
            Step::Reconsume
        }
    }

    fn special_authority_slashes(&mut self, c: Option<char>) -> Step {
        self.state = State::SpecialAuthorityIgnoreSlashes;
        if c == Some('/') && self.remaining_starts_with('/') {
            self.pointer += 1;
            Step::Advance
        } else {
            self.validation_error(ValidationError::SpecialSchemeMissingFollowingSolidus);
            Step::Reconsume
        }
    }

    fn special_authority_ignore_slashes(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            self.validation_error(ValidationError::SpecialSchemeMissingFollowingSolidus);
            Step::Advance
        } else {
            self.state = State::Authority;
            Step::Reconsume
        }
    }

    fn authority(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some('@') => {
                self.validation_error(ValidationError::InvalidCredentials);
                if self.at_sign_seen {
                    self.buffer.insert_str(0, "%40");
                }
                self.at_sign_seen = true;

                let buffer = core::mem::take(&mut self.buffer);
                for code_point in buffer.chars() {
                    if code_point == ':' && !self.password_token_seen {
                        self.password_token_seen = true;
                        continue;
                    }
                    let target = if self.password_token_seen {
                        &mut self.url.password
                    } else {
                        &mut self.url.username
                    };
                    push_encoded(target, code_point, USERINFO_SET);
                }
                Ok(Step::Advance)
            }
            None | Some('/' | '?' | '#') => self.end_of_authority(),
            Some('\\') if self.url.is_special() => self.end_of_authority(),
            Some(c) => {
                self.buffer.push(c);
                Ok(Step::Advance)
            }
        }
    }

    fn end_of_authority(&mut self) -> Result<Step> {
        if self.at_sign_seen && self.buffer.is_empty() {
            return self.fail(ValidationError::HostMissing, ParseError::HostMissing);
        }
        // Go back to the start of the host and parse it in the host state
        self.pointer -= self.buffer.chars().count();
        self.buffer.clear();
        self.state = State::Host;
        Ok(Step::Reconsume)
    }

    fn host(&mut self, c: Option<char>) -> Result<Step> {
        if self.state_override.is_some() && self.url.scheme_type == SchemeType::File {
            self.state = State::FileHost;
            return Ok(Step::Reconsume);
        }

        let special = self.url.is_special();
        match c {
            Some(':') if !self.inside_brackets => {
                if self.buffer.is_empty() {
                    return self.fail(ValidationError::HostMissing, ParseError::HostMissing);
                }
                if self.state_override == Some(State::Hostname) {
                    return self.failure(ParseError::InvalidUrl);
                }
                let host = self.parse_host(!special)?;
                self.url.host = Some(host);
                self.buffer.clear();
                self.state = State::Port;
                Ok(Step::Advance)
            }
            None | Some('/' | '?' | '#') => self.end_of_host(),
            Some('\\') if special => self.end_of_host(),
            Some(c) => {
                if c == '[' {
                    self.inside_brackets = true;
                } else if c == ']' {
                    self.inside_brackets = false;
                }
                self.buffer.push(c);
                Ok(Step::Advance)
            }
        }
    }

    fn end_of_host(&mut self) -> Result<Step> {
        let special = self.url.is_special();
        if special && self.buffer.is_empty() {
            return self.fail(ValidationError::HostMissing, ParseError::HostMissing);
        }
        if self.state_override.is_some()
            && self.buffer.is_empty()
            && (self.url.includes_credentials() || self.url.port.is_some())
        {
            trace!("empty host ignored, the URL has credentials or a port");
            return Ok(Step::Return);
        }

        let host = self.parse_host(!special)?;
        self.url.host = Some(host);
        self.buffer.clear();
        self.state = State::PathStart;
        if self.state_override.is_some() {
            return Ok(Step::Return);
        }
        Ok(Step::Reconsume)
    }

    fn port(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_digit() => {
                self.buffer.push(c);
                Ok(Step::Advance)
            }
            None | Some('/' | '?' | '#') => self.end_of_port(),
            Some('\\') if self.url.is_special() => self.end_of_port(),
            _ if self.state_override.is_some() => self.end_of_port(),
            _ => self.fail(ValidationError::PortInvalid, ParseError::InvalidPort),
        }
    }

    fn end_of_port(&mut self) -> Result<Step> {
        if !self.buffer.is_empty() {
            let port = self.buffer.bytes().fold(0u32, |port, digit| {
                port.saturating_mul(10)
                    .saturating_add(u32::from(digit - b'0'))
            });
            let Ok(port) = u16::try_from(port) else {
                return self.fail(ValidationError::PortOutOfRange, ParseError::PortOutOfRange);
            };
            self.url.port = if self.url.scheme_type.default_port() == Some(port) {
                None
            } else {
                Some(port)
            };
            self.buffer.clear();
            if self.state_override.is_some() {
                return Ok(Step::Return);
            }
        }
        if self.state_override.is_some() {
            return self.failure(ParseError::InvalidPort);
        }
        self.state = State::PathStart;
        Ok(Step::Reconsume)
    }

    fn file(&mut self, c: Option<char>) -> Step {
        self.url.set_scheme(String::from("file"));
        self.url.host = Some(Host::Empty);

        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation_error(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileSlash;
            return Step::Advance;
        }

        let Some(base) = self
            .base
            .filter(|base| base.scheme_type == SchemeType::File)
        else {
            self.state = State::Path;
            return Step::Reconsume;
        };

        self.url.host.clone_from(&base.host);
        self.url.path = base.path.clone();
        self.url.query.clone_from(&base.query);

        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(_) => {
                self.url.query = None;
                if starts_with_windows_drive_letter(self.rest()) {
                    self.validation_error(ValidationError::FileInvalidWindowsDriveLetter);
                    self.url.path = UrlPath::List(Vec::new());
                } else {
                    self.url.shorten_path();
                }
                self.state = State::Path;
                return Step::Reconsume;
            }
            None => {}
        }
        Step::Advance
    }

    fn file_slash(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation_error(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileHost;
            return Step::Advance;
        }

        if let Some(base) = self
            .base
            .filter(|base| base.scheme_type == SchemeType::File)
        {
            self.url.host.clone_from(&base.host);
            if !starts_with_windows_drive_letter(self.rest()) {
                if let UrlPath::List(base_path) = &base.path {
                    if let Some(first) = base_path.first() {
                        if is_normalized_windows_drive_letter(first) {
                            self.url.push_path_segment(first.clone());
                        }
                    }
                }
            }
        }
        self.state = State::Path;
        Step::Reconsume
    }

    fn file_host(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            None | Some('/' | '\\' | '?' | '#') => self.end_of_file_host(),
            Some(c) => {
                self.buffer.push(c);
                Ok(Step::Advance)
            }
        }
    }

    fn end_of_file_host(&mut self) -> Result<Step> {
        if self.state_override.is_none() && is_windows_drive_letter(&self.buffer) {
            // The buffer becomes the first path segment
            self.validation_error(ValidationError::FileInvalidWindowsDriveLetterHost);
            self.state = State::Path;
            return Ok(Step::Reconsume);
        }

        if self.buffer.is_empty() {
            self.url.host = Some(Host::Empty);
        } else {
            let mut host = self.parse_host(false)?;
            if host.is_localhost() {
                host = Host::Empty;
            }
            self.url.host = Some(host);
            self.buffer.clear();
        }

        if self.state_override.is_some() {
            return Ok(Step::Return);
        }
        self.state = State::PathStart;
        Ok(Step::Reconsume)
    }

    fn path_start(&mut self, c: Option<char>) -> Step {
        if self.url.is_special() {
            if c == Some('\\') {
                self.validation_error(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::Path;
            return if matches!(c, Some('/' | '\\')) {
                Step::Advance
            } else {
                Step::Reconsume
            };
        }

        match c {
            Some('?') if self.state_override.is_none() => {
                self.url.query = Some(String::new());
                self.state = State::Query;
                Step::Advance
            }
            Some('#') if self.state_override.is_none() => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
                Step::Advance
            }
            Some(c) => {
                self.state = State::Path;
                if c == '/' {
                    Step::Advance
                } else {
                    Step::Reconsume
                }
            }
            None => {
                if self.state_override.is_some() && self.url.host.is_none() {
                    self.url.push_path_segment(String::new());
                }
                Step::Advance
            }
        }
    }

    fn path(&mut self, c: Option<char>) -> Step {
        let special = self.url.is_special();
        let is_slash = c == Some('/') || (special && c == Some('\\'));
        let ends_segment = match c {
            None => true,
            Some('?' | '#') => self.state_override.is_none(),
            Some(_) => is_slash,
        };

        match c {
            Some(c) if !ends_segment => {
                self.check_url_unit(c);
                push_encoded(&mut self.buffer, c, PATH_SET);
            }
            _ => {
                if special && c == Some('\\') {
                    self.validation_error(ValidationError::InvalidReverseSolidus);
                }
                self.end_of_segment(is_slash);

                if c == Some('?') {
                    self.url.query = Some(String::new());
                    self.state = State::Query;
                } else if c == Some('#') {
                    self.url.fragment = Some(String::new());
                    self.state = State::Fragment;
                }
            }
        }
        Step::Advance
    }

    fn end_of_segment(&mut self, is_slash: bool) {
        let segment = core::mem::take(&mut self.buffer);

        if is_double_dot_segment(&segment) {
            self.url.shorten_path();
            // "/usr/.." is "/", not an empty path
            if !is_slash {
                self.url.push_path_segment(String::new());
            }
        } else if is_single_dot_segment(&segment) {
            if !is_slash {
                self.url.push_path_segment(String::new());
            }
        } else {
            let mut segment = segment;
            if self.url.scheme_type == SchemeType::File
                && self.url.path_is_empty()
                && is_windows_drive_letter(&segment)
            {
                segment.replace_range(1..2, ":");
            }
            self.url.push_path_segment(segment);
        }
    }

    fn opaque_path(&mut self, c: Option<char>) -> Step {
        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(' ') => {
                // A space directly before `?` or `#` is encoded
                if matches!(self.remaining().first(), Some('?' | '#')) {
                    self.url.push_opaque_path("%20");
                } else {
                    self.url.push_opaque_path(" ");
                }
            }
            Some(c) => {
                self.check_url_unit(c);
                let mut encoded = String::new();
                push_encoded(&mut encoded, c, C0_CONTROL_SET);
                self.url.push_opaque_path(&encoded);
            }
            None => {}
        }
        Step::Advance
    }

    fn query(&mut self, c: Option<char>) -> Step {
        match c {
            None => self.flush_query(),
            Some('#') if self.state_override.is_none() => {
                self.flush_query();
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(c) => {
                self.check_url_unit(c);
                self.buffer.push(c);
            }
        }
        Step::Advance
    }

    fn flush_query(&mut self) {
        let special = self.url.is_special();
        let encode_set = if special {
            SPECIAL_QUERY_SET
        } else {
            QUERY_SET
        };

        let encoding = self
            .encoding_override
            .filter(|_| special && !self.url.scheme_type.is_websocket());
        let encoded = match encoding {
            Some(encode) => percent_encode_bytes(&encode(&self.buffer), encode_set),
            None => percent_encode(&self.buffer, encode_set),
        };

        self.url
            .query
            .get_or_insert_with(String::new)
            .push_str(&encoded);
        self.buffer.clear();
    }

    fn fragment(&mut self, c: Option<char>) -> Step {
        if let Some(c) = c {
            self.check_url_unit(c);
            let fragment = self.url.fragment.get_or_insert_with(String::new);
            push_encoded(fragment, c, FRAGMENT_SET);
        }
        Step::Advance
    }
}

/// UTF-8 percent-encode a single code point
fn push_encoded(target: &mut String, c: char, encode_set: &'static AsciiSet) {
    let mut bytes = [0u8; 4];
    percent_encode_into(target, c.encode_utf8(&mut bytes), encode_set);
}
