//! Outcome of name lookups.

use crate::{error::Error, model::id::EveId};

/// ID reported to callers that want a plain number when a name did not resolve.
pub const NOT_FOUND_ID: EveId = -1;

/// Outcome of a lookup that can legitimately come back empty.
///
/// Missing names, missing sessions and ESI hiccups are expected while resolving user input,
/// so they are values rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The lookup produced a value.
    Found(T),
    /// ESI answered but had no match.
    NotFound,
    /// The lookup needs an authorized character session that does not exist or was rejected.
    Unauthorized,
    /// ESI could not be reached or answered with something unusable.
    Unavailable,
}

impl<T> Lookup<T> {
    /// Classifies a directory client error into a miss reason.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Unauthorized(_) => Lookup::Unauthorized,
            _ => Lookup::Unavailable,
        }
    }
}

impl Lookup<EveId> {
    /// The found ID, or [`NOT_FOUND_ID`] for any kind of miss.
    pub fn id_or_sentinel(&self) -> EveId {
        match self {
            Lookup::Found(id) => *id,
            _ => NOT_FOUND_ID,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}
