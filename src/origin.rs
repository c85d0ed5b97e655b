use crate::compat::{String, ToString};
use crate::host::Host;
use crate::types::SchemeType;
use crate::url::Url;
use core::fmt;

/// The origin of a URL.
///
/// Only `ftp`, `http`, `https`, `ws` and `wss` URLs (and `blob:` URLs that
/// wrap an `http(s)` URL) have a tuple origin. Every other URL, `file:`
/// included, has an opaque origin that serializes as `"null"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    Opaque,
    Tuple {
        scheme: String,
        host: Host,
        port: Option<u16>,
    },
}

impl Origin {
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }

    /// The ASCII serialization, e.g. `"https://example.com:8080"` or `"null"`
    pub fn ascii_serialization(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque => f.write_str("null"),
            Self::Tuple { scheme, host, port } => {
                write!(f, "{scheme}://{host}")?;
                if let Some(port) = port {
                    write!(f, ":{port}")?;
                }
                Ok(())
            }
        }
    }
}

impl Url {
    /// Get the origin of this URL
    ///
    /// ```
    /// use whatwg_url::Url;
    ///
    /// let url = Url::parse("blob:https://example.com:8443/uuid", None).unwrap();
    /// assert_eq!(url.origin().to_string(), "https://example.com:8443");
    /// assert!(Url::parse("file:///tmp", None).unwrap().origin().is_opaque());
    /// ```
    pub fn origin(&self) -> Origin {
        match self.scheme_type {
            SchemeType::Ftp
            | SchemeType::Http
            | SchemeType::Https
            | SchemeType::Ws
            | SchemeType::Wss => match &self.host {
                Some(host) => Origin::Tuple {
                    scheme: self.scheme.clone(),
                    host: host.clone(),
                    port: self.port,
                },
                None => Origin::Opaque,
            },
            SchemeType::NotSpecial if self.scheme == "blob" => {
                match Self::parse(&self.pathname(), None) {
                    Ok(inner)
                        if matches!(inner.scheme_type, SchemeType::Http | SchemeType::Https) =>
                    {
                        inner.origin()
                    }
                    _ => Origin::Opaque,
                }
            }
            SchemeType::File | SchemeType::NotSpecial => Origin::Opaque,
        }
    }
}
