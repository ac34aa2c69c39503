/// Building URLs from loose fragments
use make_url::{Config, ForceProtocol, TrailingSlash, UrlMaker, make_url};

fn main() {
    // Fragments are joined with single slashes and each segment is encoded
    let url = make_url!("example.com", "blog", "hello world").expect("Failed to build URL");
    println!("{url}"); // https://example.com/blog/hello%20world/

    // Protocol and domain may be split across fragments
    let url = make_url!("htt", "ps:", "//example", ".com", "about").expect("Failed to build URL");
    println!("{url}"); // https://example.com/about/

    // Hosts without a domain keep their own protocol and port
    let url = make_url!("http://localhost:3000", "api").expect("Failed to build URL");
    println!("{url}"); // http://localhost:3000/api/

    // A maker carries its own config
    let maker = UrlMaker::with_config(Config {
        trailing_slash: TrailingSlash::Remove,
        ..Config::default()
    });
    let url = maker
        .build(&["example.com", "docs/"], &Default::default())
        .expect("Failed to build URL");
    println!("{url}"); // https://example.com/docs

    // Strict mode refuses URLs without a domain
    let strict = UrlMaker::with_config(Config {
        force_protocol: ForceProtocol::None,
        strict: true,
        ..Config::default()
    });
    match strict.build(&["blog"], &Default::default()) {
        Ok(url) => println!("{url}"),
        Err(err) => println!("Error: {err}"), // Error: The generated URL is not valid: blog/
    }
}
