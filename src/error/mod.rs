//! Error types for mimir.
//!
//! Resolution itself never fails on data conditions: a name that cannot be found or an ID
//! that cannot be resolved is reported through [`Lookup`](crate::model::lookup::Lookup) or a
//! sentinel display name. The [`Error`] type covers everything else: configuration problems,
//! ESI transport failures seen by the directory client, and programmer errors such as asking
//! the field dispatcher about a field it has no mapping for.

pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for mimir.
///
/// Aggregates domain errors and external library errors into a single type so the `?`
/// operator works across the directory client, the resolver, and startup code.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A record field has no category mapping.
    ///
    /// This is a programming error in the caller: resolving the IDs of an unmapped field
    /// under a guessed category would poison the cache with wrong pairings.
    #[error("No category mapping for record field `{0}`")]
    InvalidField(String),
    /// An ESI request required an authorized character session that is missing or was
    /// rejected by ESI.
    #[error("ESI request requires an authorized character session: {0}")]
    Unauthorized(String),
    /// Internal error indicating a bug in mimir's code.
    #[error("Internal error with mimir's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// ESI client error from the `eve_esi` crate.
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    /// HTTP error from requests mimir sends to ESI directly.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
