/// Validation error reporting example
use whatwg_url::{Url, ValidationError};

fn main() {
    let inputs = [
        "https://example.com/",
        " https:\\\\user@example.com\\path ",
        "http://0x7f.1/",
        "http://[::1/",
        "sc://a b/",
        "http://example.com:99999/",
    ];

    for input in inputs {
        let mut errors: Vec<ValidationError> = Vec::new();
        let result = Url::parse_with_errors(input, None, &mut errors);

        match result {
            Ok(url) => println!("{input:?} -> {url}"),
            Err(error) => println!("{input:?} -> failure ({error})"),
        }
        for error in errors {
            println!("    {}: {}", error.name(), error.description());
        }
    }
}
