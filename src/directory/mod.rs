//! Remote directory the resolver queries.
//!
//! [`DirectoryClient`] is the seam between resolution logic and ESI. The production
//! implementation is [`esi::EsiDirectoryClient`]; tests substitute stubs that record which
//! lookups were made.

pub mod esi;
pub mod retry;

use async_trait::async_trait;

use crate::{
    error::Error,
    model::{
        category::Category,
        esi::{AssetLocation, AssetName, EntityName, ExactMatch, StructureInfo},
        id::EveId,
    },
};

/// Lookups the resolver needs from ESI.
///
/// Methods returning `Option` use `None` for "ESI has no data for this request" (HTTP 404)
/// and `Some` for a successful response, which may still be empty.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Whether an authorized character session is available.
    fn is_authorized(&self) -> bool;

    /// Substring search in one category, best match first.
    ///
    /// With `authorized` the search runs as the session's character, which also covers
    /// structures that character can access.
    async fn search_by_query(
        &self,
        text: &str,
        category: Category,
        authorized: bool,
    ) -> Result<Vec<EveId>, Error>;

    /// Exact, case-insensitive name matches.
    async fn exact_ids_by_names(&self, names: &[String]) -> Result<Vec<ExactMatch>, Error>;

    /// Names of static IDs: types, characters, corporations, stations, systems, regions.
    async fn names_by_ids(&self, ids: &[EveId]) -> Result<Option<Vec<EntityName>>, Error>;

    /// Information about a player structure.
    async fn structure_by_id(
        &self,
        id: EveId,
        authorized: bool,
    ) -> Result<Option<StructureInfo>, Error>;

    /// Custom names of the session character's assets.
    async fn asset_custom_names_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetName>>, Error>;

    /// Positions of the session character's assets.
    async fn asset_locations_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetLocation>>, Error>;

    /// Name of a corporation.
    async fn corporation_info(&self, id: EveId) -> Result<String, Error>;
}
