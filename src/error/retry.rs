//! Retry classification of errors.

use reqwest::StatusCode;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors, rate limiting, connection issues)
    Retry,
    /// Failed permanently (bad request, missing authorization, bugs)
    Fail,
}

/// ESI's own error-rate limit status, returned once too many errors were sent in a window.
const ESI_ERROR_LIMITED: u16 = 420;

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // ESI request errors - internal errors, bad requests, rate limiting
            Self::EsiError(eve_esi::Error::ReqwestError(reqwest_error)) => http_retry_strategy(
                reqwest_error.status().map(|s| s.as_u16()),
                reqwest_error.is_decode() || reqwest_error.is_builder(),
            ),
            Self::ReqwestError(reqwest_error) => http_retry_strategy(
                reqwest_error.status().map(|s| s.as_u16()),
                reqwest_error.is_decode() || reqwest_error.is_builder(),
            ),

            // ESI errors - other errors, OAuth, parsing, etc
            Self::EsiError(_) => ErrorRetryStrategy::Fail,

            // Missing or rejected session won't fix itself between attempts
            Self::Unauthorized(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Programmer errors
            Self::InvalidField(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

fn http_retry_strategy(status: Option<u16>, malformed: bool) -> ErrorRetryStrategy {
    match status.and_then(|s| StatusCode::from_u16(s).ok()) {
        Some(status) => status_retry_strategy(status),
        // Malformed response or request, retrying sends the same thing again
        None if malformed => ErrorRetryStrategy::Fail,
        // Network error, timeout or connection issue - should retry
        None => ErrorRetryStrategy::Retry,
    }
}

fn status_retry_strategy(status: StatusCode) -> ErrorRetryStrategy {
    match status {
        // 500 - ESI is temporarily unavailable, backoff and retry later
        s if s.is_server_error() => ErrorRetryStrategy::Retry,

        // 420 / 429 - error limited or rate limited, backoff and retry later
        s if s.as_u16() == ESI_ERROR_LIMITED => ErrorRetryStrategy::Retry,
        StatusCode::TOO_MANY_REQUESTS => ErrorRetryStrategy::Retry,

        // 400 - we're making invalid requests to ESI
        s if s.is_client_error() => ErrorRetryStrategy::Fail,

        // Unexpected response
        _ => ErrorRetryStrategy::Fail,
    }
}
