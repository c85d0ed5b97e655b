use super::wpt_loader::{apply_setter, getter, load_setter_tests, load_url_tests};
/// WPT test runner
///
/// Runs the WHATWG URL fixtures against whatwg_url
use whatwg_url::Url;

#[derive(Debug)]
struct WptFailure {
    input: String,
    base: Option<String>,
    field: String,
    expected: String,
    actual: String,
}

fn report(failures: &[WptFailure], total: usize) {
    for failure in failures {
        eprintln!("  {}", failure.field);
        eprintln!("    Input: {:?}", failure.input);
        if let Some(base) = &failure.base {
            eprintln!("    Base: {base:?}");
        }
        eprintln!("    Expected: {:?}", failure.expected);
        eprintln!("    Actual: {:?}", failure.actual);
    }
    assert!(
        failures.is_empty(),
        "Failed {} checks over {} tests. See output above for details.",
        failures.len(),
        total
    );
}

#[test]
fn test_url_parsing_suite() {
    let tests = load_url_tests();
    let mut failures = Vec::new();

    for test in &tests {
        let result = Url::parse(&test.input, test.base.as_deref());
        let mut fail = |field: &str, expected: &str, actual: String| {
            failures.push(WptFailure {
                input: test.input.clone(),
                base: test.base.clone(),
                field: field.to_string(),
                expected: expected.to_string(),
                actual,
            });
        };

        let url = match (result, test.failure) {
            (Err(_), true) => continue,
            (Ok(url), true) => {
                fail("parsing", "failure", url.href());
                continue;
            }
            (Err(error), false) => {
                fail("parsing", "success", error.to_string());
                continue;
            }
            (Ok(url), false) => url,
        };

        for (field, expected) in test.expected() {
            let actual = getter(&url, field);
            if actual != expected {
                fail(field, expected, actual);
            }
        }

        // Serializing and parsing again is stable
        match Url::parse(&url.href(), None) {
            Ok(reparsed) if reparsed == url => {}
            Ok(reparsed) => fail("reparse", &url.href(), reparsed.href()),
            Err(error) => fail("reparse", &url.href(), error.to_string()),
        }
    }

    report(&failures, tests.len());
}

#[test]
fn test_setters_suite() {
    let tests = load_setter_tests();
    let mut failures = Vec::new();
    let mut total = 0;

    for (setter, cases) in tests.by_setter() {
        for case in cases {
            total += 1;
            let mut url = Url::parse(&case.href, None)
                .unwrap_or_else(|error| panic!("fixture href {:?}: {error}", case.href));
            apply_setter(&mut url, setter, &case.new_value);

            for (field, expected) in &case.expected {
                let actual = getter(&url, field);
                if &actual != expected {
                    failures.push(WptFailure {
                        input: format!("{} = {:?} on {}", setter, case.new_value, case.href),
                        base: case.comment.clone(),
                        field: field.clone(),
                        expected: expected.clone(),
                        actual,
                    });
                }
            }
        }
    }

    report(&failures, total);
}

#[test]
fn test_fixtures_are_loaded() {
    assert!(load_url_tests().len() > 800);
    let setters = load_setter_tests();
    assert!(setters.by_setter().iter().all(|(_, cases)| !cases.is_empty()));
}
