//! Test configuration constants for ESI client setup.
//!
//! None of these are real credentials.

/// User agent string for test ESI client requests.
pub static TEST_USER_AGENT: &str =
    "MyApp/1.0 (contact@example.com; +https://github.com/autumn-order/mimir)";

/// Character the test session is authorized for.
pub const TEST_CHARACTER_ID: i64 = 2114794365;

/// Bearer token of the test session.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";
