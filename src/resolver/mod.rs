//! Name and ID resolution on top of a [`DirectoryClient`].
//!
//! The [`Resolver`] owns the process-wide [`NameCache`] and is the only component that writes
//! to it. Report producers resolve every ID they are about to render up front, through
//! [`Resolver::resolve_field_ids`] or [`Resolver::resolve_record_fields`], and renderers then
//! read the populated cache through [`Resolver::cache`].

mod batch;
mod category;
mod field;

use std::collections::HashMap;
use std::sync::Arc;

pub use field::{is_id_field, target_for_field, FieldTarget};

use crate::{
    cache::NameCache,
    directory::DirectoryClient,
    model::{
        display::UNKNOWN_NAME,
        id::{EveId, IdClassifier},
    },
    util::inflight::InFlight,
};

use self::batch::IdSource;

/// Resolves names to IDs and IDs to names, caching every confirmed pairing.
pub struct Resolver {
    client: Arc<dyn DirectoryClient>,
    cache: NameCache,
    classifier: IdClassifier,
    id_flights: InFlight<EveId>,
    name_flights: InFlight<String>,
}

impl Resolver {
    /// Creates a resolver with an empty cache.
    pub fn new(client: Arc<dyn DirectoryClient>, classifier: IdClassifier) -> Self {
        Self {
            client,
            cache: NameCache::new(),
            classifier,
            id_flights: InFlight::new(),
            name_flights: InFlight::new(),
        }
    }

    /// Read access to the cache for renderers.
    pub fn cache(&self) -> &NameCache {
        &self.cache
    }

    /// Classifier deciding which IDs take the dynamic fallback chain.
    pub fn classifier(&self) -> &IdClassifier {
        &self.classifier
    }

    /// Resolves a single ID to its display name.
    ///
    /// Agrees with [`Resolver::id_to_name_batch`] for the same ID.
    pub async fn id_to_name(&self, id: EveId) -> String {
        self.id_to_name_batch(&[id])
            .await
            .remove(&id)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Resolves IDs of unknown category to display names.
    ///
    /// The result has one entry per distinct input ID. ID 0 is always "None", IDs no probe
    /// could resolve are "Unknown" and are probed again on the next call.
    pub async fn id_to_name_batch(&self, ids: &[EveId]) -> HashMap<EveId, String> {
        self.resolve_ids(ids, IdSource::Directory).await;

        ids.iter().map(|&id| (id, self.render(id))).collect()
    }

    fn render(&self, id: EveId) -> String {
        self.cache
            .get_by_id(id)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }
}
