/// `UrlSearchParams` usage example
use whatwg_url::{Url, UrlSearchParams};

fn main() {
    // Parse a query string
    let mut params = UrlSearchParams::parse("?name=John+Smith&age=30&city=Tokyo");

    println!("name: {:?}", params.get("name")); // Some("John Smith")
    println!("age: {:?}", params.get("age")); // Some("30")
    println!();

    params.append("country", "日本");
    println!("After append: {params}"); // name=John+Smith&age=30&city=Tokyo&country=%E6%97%A5%E6%9C%AC

    // Set replaces the first pair and removes the others
    params.set("age", "31");
    println!("After set: {params}"); // name=John+Smith&age=31&city=Tokyo&country=%E6%97%A5%E6%9C%AC

    params.delete("city", None);
    println!("After delete: {params}"); // name=John+Smith&age=31&country=%E6%97%A5%E6%9C%AC

    // Stable sort by name
    params.sort();
    println!("After sort: {params}"); // age=31&country=%E6%97%A5%E6%9C%AC&name=John+Smith
    println!();

    println!("All parameters:");
    for (key, value) in params.iter() {
        println!("  {key} = {value}");
    }
    println!();

    // Write the parameters back into a URL
    let mut url = Url::parse("https://example.com/users#top", None).expect("Failed to parse URL");
    url.set_search_params(&params);
    println!("URL: {url}"); // https://example.com/users?age=31&country=%E6%97%A5%E6%9C%AC&name=John+Smith#top
}
