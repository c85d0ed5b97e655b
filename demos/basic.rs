use whatwg_url::Url;

fn main() {
    // Parse a URL, normalizing case, default port and dot segments
    let url = Url::parse("HTTPS://User@Example.COM:443/docs/./guide/../api?query=value#hash", None)
        .expect("Failed to parse URL");

    println!("URL: {}", url.href()); // https://User@example.com/docs/api?query=value#hash
    println!("Origin: {}", url.origin()); // https://example.com
    println!("Protocol: {}", url.protocol()); // https:
    println!("Username: {}", url.username()); // User
    println!("Host: {}", url.host()); // example.com
    println!("Port: {:?}", url.port()); // ""
    println!("Pathname: {}", url.pathname()); // /docs/api
    println!("Search: {}", url.search()); // ?query=value
    println!("Hash: {}", url.hash()); // #hash
    println!();

    // Resolve relative references against it
    for input in ["intro", "../assets/logo.png", "//cdn.example.net/lib.js", "?page=2"] {
        match url.join(input) {
            Ok(resolved) => println!("{input:>28} -> {resolved}"),
            Err(error) => println!("{input:>28} -> error: {error}"),
        }
    }
    println!();

    // Update components through the setters
    let mut url = url;
    url.set_username("");
    url.set_port("8443");
    url.set_pathname("/v2/items");
    url.set_hash("");
    println!("Updated: {url}"); // https://example.com:8443/v2/items?query=value
}
