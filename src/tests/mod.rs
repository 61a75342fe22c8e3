/// Test module for keystone-auth
///
/// Pure unit tests for the token lifecycle core; no database required.
/// Database-backed flows are covered by the feature-gated integration tests
/// under `tests/`.
pub mod fixtures;
