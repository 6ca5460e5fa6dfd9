//! Property and end-to-end suites for the ohaeng workspace.
//!
//! - `tests/property_tests.rs`: pipeline laws checked with `proptest`
//! - `tests/e2e_tests.rs`: full session flows through save, assess, and export
