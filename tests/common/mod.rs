//! Shared fixtures for integration tests

#![allow(dead_code)]

/// Library document with three books, the last one with a non-ASCII name
pub const BOOKS: &str = r#"{
    "books": [
        {"name": "The Martian", "author": "Andy Weir", "price": 9.99, "year": 2011},
        {"name": "Artemis", "author": "Andy Weir", "price": 14.50, "year": 2017},
        {"name": "Project Hail Mary 🌌", "author": "Andy Weir", "price": 18, "year": 2021}
    ],
    "numbers": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    "largeNumber": 9423233329388648686826386283682368.32,
    "nothing": null,
    "published": true,
    "a": {"b": [1, 2, 3]}
}"#;

/// Install a test logger once; `RUST_LOG=trace` shows tokenizer and resolver steps
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
