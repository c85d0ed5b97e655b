/// `Url::can_parse` vectors
///
/// The first group mirrors https://github.com/web-platform-tests/wpt/blob/master/url/url-statics-canparse.any.js,
/// where a JavaScript `undefined` input is stringified to `"undefined"`.
use whatwg_url::Url;

/// (input, base, expected)
const CAN_PARSE_TESTS: &[(&str, Option<&str>, bool)] = &[
    ("undefined", None, false),
    ("aaa:b", None, true),
    // Opaque path base without a fragment
    ("undefined", Some("aaa:b"), false),
    // Invalid port in the base
    ("undefined", Some("https://test:test/"), false),
    ("aaa:/b", None, true),
    ("undefined", Some("aaa:/b"), true),
    ("https://test:test", None, false),
    ("a", Some("https://b/"), true),
    // Local additions
    ("#x", Some("sc:sd"), true),
    ("?x", Some("sc:sd"), false),
    ("//host/path", Some("http://base/"), true),
    ("http://[::1", None, false),
    ("file:", None, true),
    ("http:", None, false),
    ("http:", Some("http://example.com/dir/"), true),
    ("https://example.com:65536", None, false),
];

#[test]
fn test_wpt_canparse_suite() {
    let failures: Vec<String> = CAN_PARSE_TESTS
        .iter()
        .filter(|&&(input, base, expected)| Url::can_parse(input, base) != expected)
        .map(|(input, base, expected)| {
            format!("can_parse({input:?}, {base:?}) should be {expected}")
        })
        .collect();

    for failure in &failures {
        eprintln!("  {failure}");
    }
    assert!(
        failures.is_empty(),
        "Failed {} of {} can_parse tests",
        failures.len(),
        CAN_PARSE_TESTS.len()
    );
}
