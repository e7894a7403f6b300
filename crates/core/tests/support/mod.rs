//! Shared test helpers for `authflow-core` integration tests.
//!
//! Lightweight fakes for the provider ports so flow tests can focus on
//! behaviour instead of HTTP plumbing.

pub mod provider;
