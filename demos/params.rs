/// Placeholders, query strings and per-call config
use make_url::{ArraySerializer, Params, PartialConfig, make_url};
use serde_json::json;

fn main() {
    // `:key` placeholders are filled first; the rest become the query
    let params = Params::new()
        .param("user", "ada")
        .param("id", 42)
        .param("ref", "rss")
        .hash("comments");
    let url = make_url!("example.com", "users/:user", "posts/:id", params)
        .expect("Failed to build URL");
    println!("{url}"); // https://example.com/users/ada/posts/42/?ref=rss#comments

    // Arrays follow the array serializer
    for serializer in [
        ArraySerializer::Repeat,
        ArraySerializer::Comma,
        ArraySerializer::Stringify,
    ] {
        let params = Params::new()
            .param("tags", json!(["rust", "web"]))
            .config(PartialConfig::new().array_serializer(serializer));
        let url = make_url!("example.com", "search", params).expect("Failed to build URL");
        println!("{serializer}: {url}");
    }
    // repeat: https://example.com/search/?tags=rust&tags=web
    // comma: https://example.com/search/?tags=rust%2Cweb
    // stringify: https://example.com/search/?tags=%5B%22rust%22%2C%22web%22%5D

    // Params can come straight from JSON
    let params: Params = serde_json::from_value(json!({
        "params": {"q": "hello world"},
        "hash": "top"
    }))
    .expect("Failed to read params");
    let url = make_url!("example.com", "search", params).expect("Failed to build URL");
    println!("{url}"); // https://example.com/search/?q=hello+world#top
}
