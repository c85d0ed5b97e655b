use crate::compat::{String, ToString, Vec};
use crate::unicode::percent_encode::{FORM_URLENCODED_SET, percent_decode, percent_encode_into};
use core::fmt;

/// A list of name-value pairs in `application/x-www-form-urlencoded` form.
///
/// Pairs keep their insertion order and names may repeat.
///
/// ```
/// use whatwg_url::UrlSearchParams;
///
/// let mut params = UrlSearchParams::parse("?b=2&a=1+1&b=3");
/// assert_eq!(params.get("a"), Some("1 1"));
/// assert_eq!(params.get_all("b"), vec!["2", "3"]);
///
/// params.sort();
/// params.set("b", "4");
/// assert_eq!(params.to_string(), "a=1+1&b=4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    params: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse a query string. A single leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        Self::parse_form(query.strip_prefix('?').unwrap_or(query))
    }

    /// Parse `application/x-www-form-urlencoded` input as is.
    /// A URL's query goes through here, so its own leading `?` is a name.
    pub(crate) fn parse_form(input: &str) -> Self {
        let params = input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (decode_component(name), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();

        Self { params }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.params.push((name.to_string(), value.to_string()));
    }

    /// Remove every pair named `name`, or only those that also have `value`
    pub fn delete(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.params.retain(|(n, v)| n != name || v != value),
            None => self.params.retain(|(n, _)| n != name),
        }
    }

    /// The value of the first pair named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.params.iter().any(|(n, v)| n == name && v == value),
            None => self.params.iter().any(|(n, _)| n == name),
        }
    }

    /// Replace the value of the first pair named `name` and remove the others,
    /// or append a new pair if there is none.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut found = false;
        self.params.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            self.append(name, value);
        }
    }

    /// Stable sort by name, comparing UTF-16 code units
    pub fn sort(&mut self) {
        self.params
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }
}

/// The `application/x-www-form-urlencoded` serializer, without a leading `?`
impl fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                output.push('&');
            }
            encode_component(&mut output, name);
            output.push('=');
            encode_component(&mut output, value);
        }
        f.write_str(&output)
    }
}

/// Percent-encode with the form set, spaces become `+`
fn encode_component(output: &mut String, input: &str) {
    for (i, part) in input.split(' ').enumerate() {
        if i > 0 {
            output.push('+');
        }
        percent_encode_into(output, part, FORM_URLENCODED_SET);
    }
}

fn decode_component(input: &str) -> String {
    let bytes: Vec<u8> = input
        .bytes()
        .map(|byte| if byte == b'+' { b' ' } else { byte })
        .collect();
    String::from_utf8_lossy(&percent_decode(&bytes)).into_owned()
}

impl From<&str> for UrlSearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl From<String> for UrlSearchParams {
    fn from(query: String) -> Self {
        Self::parse(&query)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
