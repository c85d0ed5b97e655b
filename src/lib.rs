//! A WHATWG URL Standard parser.
//!
//! ```
//! use whatwg_url::Url;
//!
//! let base = Url::parse("http://a/b/c/d;p?q", None).unwrap();
//! assert_eq!(base.join("../../../g").unwrap().href(), "http://a/g");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod origin;
mod parser;
mod setters;
mod types;
mod unicode;
mod url;
mod url_search_params;

// Public API
pub use error::{ParseError, ValidationError};
pub use host::Host;
pub use origin::Origin;
pub use parser::{EncodingOverride, State};
pub use types::SchemeType;
pub use unicode::idna::{domain_to_ascii, domain_to_unicode};
pub use unicode::percent_encode::{
    C0_CONTROL_SET, COMPONENT_SET, FORM_URLENCODED_SET, FRAGMENT_SET, PATH_SET, QUERY_SET,
    SPECIAL_QUERY_SET, USERINFO_SET, percent_decode, percent_encode, percent_encode_bytes,
};
pub use url::{Url, UrlPath};
pub use url_search_params::UrlSearchParams;

pub type Result<T> = core::result::Result<T, ParseError>;
