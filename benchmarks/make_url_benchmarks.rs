#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// URL building benchmarks, plus authority scanning against the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::process::Command;

use make_url::{Config, Params, UrlMaker, assemble, detect_domain, detect_protocol, parse_authority};
use serde_json::json;

// Rust url crate
use url::Url as UrlCrate;

/// Download dataset file before running benchmarks
fn ensure_dataset(path: &str, url: &str, name: &str) {
    // Download if file doesn't exist or is older than 24 hours
    let is_fresh = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .and_then(|t| t.elapsed().ok().ok_or(std::io::Error::other("elapsed")))
        .is_ok_and(|elapsed| elapsed.as_secs() <= 86400);

    if !is_fresh {
        println!("📥 Downloading latest {}...", name);

        let output = Command::new("curl")
            .args(["-fsSL", "-o", path, url])
            .output();

        match output {
            Ok(result) if result.status.success() => {
                println!("✓ Downloaded {} successfully", name);
            }
            _ => {
                println!("⚠ Failed to download, using existing file if available");
            }
        }
    } else {
        println!("✓ Using cached {}", name);
    }
}

/// Dataset: https://github.com/ada-url/url-various-datasets
fn ensure_top100_txt() {
    ensure_dataset(
        "./benchmarks/url-various-datasets/top100.txt",
        "https://raw.githubusercontent.com/ada-url/url-various-datasets/main/top100/top100.txt",
        "top100.txt",
    );
}

fn bench_build_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_simple");
    let maker = UrlMaker::new();
    let params = Params::new();

    group.bench_function("whole_url", |b| {
        b.iter(|| maker.build(black_box(&["https://example.com/blog/post"]), &params).unwrap());
    });

    group.bench_function("fragments", |b| {
        b.iter(|| {
            maker
                .build(black_box(&["example.com", "blog", "post"]), &params)
                .unwrap()
        });
    });

    group.bench_function("split_protocol_and_domain", |b| {
        b.iter(|| {
            maker
                .build(
                    black_box(&["htt", "ps:", "//shop", ".example", ".co.uk", "cart"]),
                    &params,
                )
                .unwrap()
        });
    });

    group.finish();
}

fn bench_build_with_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_with_params");
    let maker = UrlMaker::new();

    let placeholders = Params::new()
        .param("user", "ada")
        .param("id", 42)
        .param("ref", "rss");
    group.bench_function("placeholders", |b| {
        b.iter(|| {
            maker
                .build(black_box(&["example.com", "users/:user", "posts/:id"]), &placeholders)
                .unwrap()
        });
    });

    let query = Params::new()
        .param("tags", json!(["rust", "url", "web"]))
        .param("page", 2)
        .param("q", "fragments & params")
        .hash("results");
    group.bench_function("query_and_hash", |b| {
        b.iter(|| maker.build(black_box(&["example.com", "search"]), &query).unwrap());
    });

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    let input = "https://user:pw@Sub.Example.com:8443/path/to/resource?q=1#top";

    group.bench_function("detect_protocol", |b| {
        b.iter(|| detect_protocol(black_box(input)));
    });

    group.bench_function("detect_domain", |b| {
        b.iter(|| detect_domain(black_box(input)));
    });

    group.bench_function("assemble", |b| {
        let config = Config::default();
        b.iter(|| {
            assemble(
                black_box(&["https://", "sub", ".example", ".com", "path", "to"]),
                &config,
            )
        });
    });

    group.finish();
}

fn bench_authority_top100urls(c: &mut Criterion) {
    ensure_top100_txt();

    let urls_content = std::fs::read_to_string("./benchmarks/url-various-datasets/top100.txt")
        .expect("Failed to read top100.txt");
    let urls: Vec<&str> = urls_content.lines().collect();

    let mut group = c.benchmark_group("authority_top100urls");

    group.bench_function("make_url", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = parse_authority(black_box(url));
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = UrlCrate::parse(black_box(url));
            }
        });
    });

    group.bench_function("rebuild", |b| {
        let maker = UrlMaker::new();
        let params = Params::new();
        b.iter(|| {
            for url in &urls {
                let _ = maker.build(black_box(&[*url]), &params);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_simple,
    bench_build_with_params,
    bench_detection,
    bench_authority_top100urls
);

criterion_main!(benches);
