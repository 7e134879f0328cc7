#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! API Contract Tests
//!
//! The web client fetches `/api/route` and `/api/nav` by path, so the
//! server routes must not move silently. The golden file at
//! tests/fixtures/api_routes.txt is the source of truth.
//!
//! Run with: cargo test --test api_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN: &str = "tests/fixtures/api_routes.txt";

fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN)
        .expect("Failed to read api_routes.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract `.route("/path", method(handler))` registrations from main.rs
fn routes_in_main() -> BTreeSet<String> {
    let content = fs::read_to_string("src/main.rs").expect("Failed to read main.rs");

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .filter_map(|line| {
            let rest = &line[line.find(".route(\"")? + 8..];
            let path = &rest[..rest.find('"')?];
            let method = ["get", "post", "put", "delete"]
                .into_iter()
                .find(|m| line.contains(&format!("{}(", m)))?;
            Some(format!("{} {}", method.to_uppercase(), path))
        })
        .collect()
}

#[test]
fn api_routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = routes_in_main();

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    assert!(
        added.is_empty() && removed.is_empty(),
        "\n\nAPI CONTRACT VIOLATION!\n  added: {:?}\n  removed: {:?}\n\n\
         If intentional, update {} and check the web client still fetches \
         the paths it expects.\n",
        added,
        removed,
        GOLDEN
    );
}

#[test]
fn client_endpoints_are_in_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();

    for path in [
        exile_leveling::app::route_context::ROUTE_ENDPOINT,
        exile_leveling::app::settings_context::NAV_SETTINGS_ENDPOINT,
    ] {
        assert!(
            golden.contains(&format!("GET {}", path)),
            "client fetches {} but the contract does not serve it",
            path
        );
    }
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();
    let mut sorted = routes.clone();
    sorted.sort();

    assert_eq!(
        routes, sorted,
        "api_routes.txt is not sorted! Please sort alphabetically."
    );
}
