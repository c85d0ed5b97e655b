#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// URL search parameter tests
///
/// This test suite covers:
/// - Query string parsing and serialization
/// - Parameter manipulation (append, set, delete)
/// - Sorting and iteration
/// - Unicode and special character encoding
/// - Round trips through a URL's query
use whatwg_url::{Url, UrlSearchParams};

fn names(params: &UrlSearchParams) -> Vec<&str> {
    params.keys().collect()
}

#[test]
fn test_parse() {
    assert_eq!(UrlSearchParams::parse("").size(), 0);
    assert!(UrlSearchParams::parse("?").is_empty());

    let params = UrlSearchParams::parse("?key1=value1&key2=value2&key3=value3");
    assert_eq!(params.size(), 3);
    assert_eq!(params.get("key2"), Some("value2"));

    // Only one leading question mark is removed
    let params = UrlSearchParams::parse("??key=value?extra");
    assert_eq!(params.get("?key"), Some("value?extra"));
}

#[test]
fn test_parse_without_value() {
    let params = UrlSearchParams::parse("key1&key2=value2&key3&=only-value");
    assert_eq!(params.get("key1"), Some(""));
    assert_eq!(params.get("key3"), Some(""));
    assert_eq!(params.get(""), Some("only-value"));
}

#[test]
fn test_parse_edge_cases() {
    let params = UrlSearchParams::parse("&&&key=value=with=equals&&&");
    assert_eq!(params.size(), 1);
    assert_eq!(params.get("key"), Some("value=with=equals"));

    let params = UrlSearchParams::parse("key=value+with+spaces&enc=a%3Db%26c&bad=%zz%");
    assert_eq!(params.get("key"), Some("value with spaces"));
    assert_eq!(params.get("enc"), Some("a=b&c"));
    assert_eq!(params.get("bad"), Some("%zz%"));

    // Invalid UTF-8 after decoding is replaced
    let params = UrlSearchParams::parse("x=%FF%FE");
    assert_eq!(params.get("x"), Some("\u{FFFD}\u{FFFD}"));
}

#[test]
fn test_duplicate_keys() {
    let params = UrlSearchParams::parse("key=value1&key=value2");
    assert_eq!(params.get("key"), Some("value1"));
    assert_eq!(params.get_all("key"), vec!["value1", "value2"]);
    assert!(params.get_all("missing").is_empty());
}

#[test]
fn test_append_and_set() {
    let mut params = UrlSearchParams::new();
    params.append("a", "1");
    params.append("b", "2");
    params.append("a", "3");
    assert_eq!(params.to_string(), "a=1&b=2&a=3");

    // The first pair keeps its position, the others go away
    params.set("a", "new");
    assert_eq!(params.to_string(), "a=new&b=2");

    params.set("c", "appended");
    assert_eq!(params.to_string(), "a=new&b=2&c=appended");
}

#[test]
fn test_delete_and_has() {
    let mut params = UrlSearchParams::parse("key=value1&key=value2&other=data");
    assert!(params.has("key", None));
    assert!(params.has("key", Some("value2")));
    assert!(!params.has("key", Some("value3")));

    params.delete("key", Some("value1"));
    assert_eq!(params.get_all("key"), vec!["value2"]);

    params.delete("key", None);
    assert!(!params.has("key", None));
    assert_eq!(params.to_string(), "other=data");
}

#[test]
fn test_sort_is_stable() {
    let mut params = UrlSearchParams::new();
    params.append("z", "1");
    params.append("a", "2");
    params.append("z", "3");
    params.append("a", "4");
    params.sort();

    let entries: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(entries, vec![("a", "2"), ("a", "4"), ("z", "1"), ("z", "3")]);
}

#[test]
fn test_sort_unicode_and_empty_names() {
    let mut params: UrlSearchParams =
        [("ü", "1"), ("a", "2"), ("", "3"), ("z", "4"), ("", "5")].into_iter().collect();
    params.sort();
    assert_eq!(names(&params), vec!["", "", "a", "z", "ü"]);
    assert_eq!(params.values().collect::<Vec<_>>(), vec!["3", "5", "2", "4", "1"]);
}

#[test]
fn test_serialize() {
    assert_eq!(UrlSearchParams::new().to_string(), "");

    let mut params = UrlSearchParams::new();
    params.append("name", "François");
    params.append("math", "1+1=2");
    params.append("special", "!@#$%^&*()");
    params.append("safe", "-._*");
    params.append("space", "a b");
    assert_eq!(
        params.to_string(),
        "name=Fran%C3%A7ois&math=1%2B1%3D2&special=%21%40%23%24%25%5E%26*%28%29&safe=-._*&space=a+b"
    );
    assert_eq!(format!("{params}"), params.to_string());

    // Parsing the serialization gives the same list back
    assert_eq!(UrlSearchParams::parse(&params.to_string()), params);
}

#[test]
fn test_conversions() {
    let from_str = UrlSearchParams::from("?a=1&b=2");
    let from_string = UrlSearchParams::from(String::from("a=1&b=2"));
    let collected: UrlSearchParams = vec![("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(from_str, from_string);
    assert_eq!(from_str, collected);
    assert_eq!(from_str.entries().count(), 2);
}

#[test]
fn test_url_query_round_trip() {
    let mut url = Url::parse("https://example.com/search?q=rust+url&page=2#results", None).unwrap();

    let mut params = url.search_params();
    assert_eq!(params.get("q"), Some("rust url"));
    params.set("page", "3");
    params.append("lang", "en");
    url.set_search_params(&params);

    assert_eq!(
        url.href(),
        "https://example.com/search?q=rust+url&page=3&lang=en#results"
    );
    assert_eq!(url.search_params(), params);
}
