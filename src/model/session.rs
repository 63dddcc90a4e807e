//! Authorized character session.

use std::fmt;

use crate::model::id::EveId;

/// Authorized character session used for character-scoped ESI endpoints.
///
/// Obtained by the authentication flow outside of mimir and handed to the directory client.
#[derive(Clone, PartialEq, Eq)]
pub struct EsiSession {
    /// Character the access token was issued for.
    pub character_id: EveId,
    /// OAuth2 bearer access token.
    pub access_token: String,
}

impl EsiSession {
    /// Creates a session for a character.
    pub fn new(character_id: EveId, access_token: impl Into<String>) -> Self {
        Self {
            character_id,
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for EsiSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsiSession")
            .field("character_id", &self.character_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
