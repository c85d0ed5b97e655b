/// WPT (Web Platform Tests) fixture loading
///
/// `urltestdata.json` and `setters_tests.json` are vendored from
/// https://github.com/web-platform-tests/wpt/tree/master/url/resources, see the
/// comment lines at the top of each file for the pinned revision.
use serde::Deserialize;
use std::collections::BTreeMap;
use whatwg_url::Url;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlTestEntry {
    /// A comment line (string)
    Comment(String),
    Test(UrlTest),
}

#[derive(Debug, Deserialize)]
pub struct UrlTest {
    pub input: String,
    pub base: Option<String>,
    #[serde(default)]
    pub failure: bool,
    pub href: Option<String>,
    pub origin: Option<String>,
    pub protocol: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    #[serde(rename = "searchParams")]
    pub search_params: Option<String>,
}

impl UrlTest {
    /// Expected getter values, keyed by getter name
    pub fn expected(&self) -> Vec<(&'static str, &str)> {
        [
            ("href", &self.href),
            ("origin", &self.origin),
            ("protocol", &self.protocol),
            ("username", &self.username),
            ("password", &self.password),
            ("host", &self.host),
            ("hostname", &self.hostname),
            ("port", &self.port),
            ("pathname", &self.pathname),
            ("search", &self.search),
            ("hash", &self.hash),
            ("searchParams", &self.search_params),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SetterTest {
    pub comment: Option<String>,
    pub href: String,
    pub new_value: String,
    pub expected: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SetterTests {
    #[serde(default)]
    pub href: Vec<SetterTest>,
    #[serde(default)]
    pub protocol: Vec<SetterTest>,
    #[serde(default)]
    pub username: Vec<SetterTest>,
    #[serde(default)]
    pub password: Vec<SetterTest>,
    #[serde(default)]
    pub host: Vec<SetterTest>,
    #[serde(default)]
    pub hostname: Vec<SetterTest>,
    #[serde(default)]
    pub port: Vec<SetterTest>,
    #[serde(default)]
    pub pathname: Vec<SetterTest>,
    #[serde(default)]
    pub search: Vec<SetterTest>,
    #[serde(default)]
    pub hash: Vec<SetterTest>,
}

impl SetterTests {
    pub fn by_setter(&self) -> [(&'static str, &[SetterTest]); 10] {
        [
            ("href", self.href.as_slice()),
            ("protocol", self.protocol.as_slice()),
            ("username", self.username.as_slice()),
            ("password", self.password.as_slice()),
            ("host", self.host.as_slice()),
            ("hostname", self.hostname.as_slice()),
            ("port", self.port.as_slice()),
            ("pathname", self.pathname.as_slice()),
            ("search", self.search.as_slice()),
            ("hash", self.hash.as_slice()),
        ]
    }
}

pub fn load_url_tests() -> Vec<UrlTest> {
    let entries: Vec<UrlTestEntry> = serde_json::from_str(include_str!("urltestdata.json"))
        .expect("Failed to parse urltestdata.json");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            UrlTestEntry::Test(test) => Some(test),
            UrlTestEntry::Comment(_) => None,
        })
        .collect()
}

pub fn load_setter_tests() -> SetterTests {
    serde_json::from_str(include_str!("setters_tests.json"))
        .expect("Failed to parse setters_tests.json")
}

/// Read a getter of the URL API by name
pub fn getter(url: &Url, name: &str) -> String {
    match name {
        "href" => url.href(),
        "origin" => url.origin().to_string(),
        "protocol" => url.protocol(),
        "username" => url.username().to_string(),
        "password" => url.password().to_string(),
        "host" => url.host(),
        "hostname" => url.hostname(),
        "port" => url.port(),
        "pathname" => url.pathname(),
        "search" => url.search(),
        "hash" => url.hash(),
        "searchParams" => url.search_params().to_string(),
        _ => panic!("unknown getter {name}"),
    }
}

/// Apply a setter of the URL API by name
pub fn apply_setter(url: &mut Url, name: &str, value: &str) {
    match name {
        "href" => {
            let _ = url.set_href(value);
        }
        "protocol" => {
            url.set_protocol(value);
        }
        "username" => {
            url.set_username(value);
        }
        "password" => {
            url.set_password(value);
        }
        "host" => {
            url.set_host(value);
        }
        "hostname" => {
            url.set_hostname(value);
        }
        "port" => {
            url.set_port(value);
        }
        "pathname" => {
            url.set_pathname(value);
        }
        "search" => url.set_search(value),
        "hash" => url.set_hash(value),
        _ => panic!("unknown setter {name}"),
    }
}
