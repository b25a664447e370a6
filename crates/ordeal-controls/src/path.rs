//! Example test file identifiers.

pub fn example() -> &'static str {
    "some_test/file.rs"
}
