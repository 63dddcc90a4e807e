//! ESI request limits.

/// ESI API hard limit for ID lists posted to bulk endpoints.
///
/// `/universe/names`, `/universe/ids` and the character asset name and location endpoints
/// accept at most 1000 entries per request and answer 400 Bad Request above it.
pub const ESI_BULK_REQUEST_LIMIT: usize = 1000;

/// Number of single-entity ESI requests kept in flight at once.
///
/// Used for endpoints without a bulk variant, such as structure and corporation information.
pub const ESI_CONCURRENT_REQUESTS: usize = 10;
