//! Setters of the URL API.
//!
//! Each setter re-runs the basic URL parser on the existing record, starting
//! in the state that handles its component. The parser may update a record
//! partially before it fails (`host = "example.com:"` changes the host but not
//! the port), so `false` means "not fully applied", not "unchanged".

use crate::compat::{String, ToString, Vec};
use crate::error::{Result, ValidationError};
use crate::helpers::remove_tabs_and_newlines;
use crate::parser::{State, basic_parse_with_override};
use crate::unicode::percent_encode::{USERINFO_SET, percent_encode};
use crate::url::{Url, UrlPath};
use crate::url_search_params::UrlSearchParams;
use tracing::trace;

impl Url {
    /// Replace the whole URL by parsing `href`.
    ///
    /// # Errors
    ///
    /// Returns an error, and leaves the URL untouched, if `href` does not parse.
    pub fn set_href(&mut self, href: &str) -> Result<()> {
        *self = Self::parse(href, None)?;
        Ok(())
    }

    /// Set the scheme. A trailing `:` and anything after it is ignored.
    ///
    /// Switching between special and non-special schemes is refused, and so is
    /// switching to `file` while there are credentials or a port.
    ///
    /// ```
    /// use whatwg_url::Url;
    ///
    /// let mut url = Url::parse("http://example.com:443/", None).unwrap();
    /// assert!(url.set_protocol("https"));
    /// assert_eq!(url.href(), "https://example.com/");
    /// assert!(!url.set_protocol("mailto"));
    /// ```
    pub fn set_protocol(&mut self, protocol: &str) -> bool {
        let mut input = String::with_capacity(protocol.len() + 1);
        input.push_str(protocol);
        input.push(':');
        if !self.reparse(&input, State::SchemeStart) {
            return false;
        }

        let (requested, _) = remove_tabs_and_newlines(protocol);
        let requested = requested.split(':').next().unwrap_or_default();
        self.scheme.eq_ignore_ascii_case(requested)
    }

    /// Set the username. Refused for URLs without a host and for `file:` URLs.
    pub fn set_username(&mut self, username: &str) -> bool {
        if self.cannot_have_username_password_port() {
            trace!("URL cannot have a username");
            return false;
        }
        self.username = percent_encode(username, USERINFO_SET);
        true
    }

    /// Set the password. Refused for URLs without a host and for `file:` URLs.
    pub fn set_password(&mut self, password: &str) -> bool {
        if self.cannot_have_username_password_port() {
            trace!("URL cannot have a password");
            return false;
        }
        self.password = percent_encode(password, USERINFO_SET);
        true
    }

    /// Set the host, with an optional port (`"example.com:8080"`)
    pub fn set_host(&mut self, host: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        self.reparse(host, State::Host) && !self.ignores_empty_host(host)
    }

    /// Set the host without touching the port. A `:` in the value is refused.
    pub fn set_hostname(&mut self, hostname: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        self.reparse(hostname, State::Hostname) && !self.ignores_empty_host(hostname)
    }

    /// Set the port. The empty string removes it, trailing non-digits are
    /// ignored and the default port of the scheme is stored as no port.
    pub fn set_port(&mut self, port: &str) -> bool {
        if self.cannot_have_username_password_port() {
            return false;
        }
        if port.is_empty() {
            self.port = None;
            return true;
        }
        self.reparse(port, State::Port)
    }

    /// Set the path. URLs with an opaque path refuse it.
    pub fn set_pathname(&mut self, pathname: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        self.path = UrlPath::List(Vec::new());
        self.reparse(pathname, State::PathStart)
    }

    /// Set the query. A leading `?` is removed, the empty string removes the query.
    pub fn set_search(&mut self, search: &str) {
        if search.is_empty() {
            self.query = None;
            return;
        }
        let search = search.strip_prefix('?').unwrap_or(search);
        self.query = Some(String::new());
        self.reparse(search, State::Query);
    }

    /// Set the fragment. A leading `#` is removed, the empty string removes the fragment.
    pub fn set_hash(&mut self, hash: &str) {
        if hash.is_empty() {
            self.fragment = None;
            return;
        }
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        self.fragment = Some(String::new());
        self.reparse(hash, State::Fragment);
    }

    /// The query parsed as `application/x-www-form-urlencoded`
    pub fn search_params(&self) -> UrlSearchParams {
        UrlSearchParams::parse_form(self.query.as_deref().unwrap_or_default())
    }

    /// Replace the query with the serialization of `params`.
    /// An empty list removes the query.
    pub fn set_search_params(&mut self, params: &UrlSearchParams) {
        let query = params.to_string();
        self.query = if query.is_empty() { None } else { Some(query) };
    }

    /// The parser leaves the host alone, without failing, when an empty host
    /// would drop credentials or a port.
    fn ignores_empty_host(&self, value: &str) -> bool {
        let (value, _) = remove_tabs_and_newlines(value);
        matches!(value.chars().next(), None | Some('/' | '?' | '#'))
            && (self.includes_credentials() || self.port.is_some())
    }

    fn reparse(&mut self, input: &str, state: State) -> bool {
        let mut errors: Vec<ValidationError> = Vec::new();
        let applied = basic_parse_with_override(input, self, state, &mut errors).is_ok();
        if !applied {
            trace!(?state, value = input, "setter value rejected");
        }
        applied
    }
}
