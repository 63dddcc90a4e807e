use futures::stream::{FuturesUnordered, StreamExt};

use crate::{
    model::{display::DisplayName, id::EveId, id::NONE_ID},
    resolver::Resolver,
    util::{
        eve::{ESI_BULK_REQUEST_LIMIT, ESI_CONCURRENT_REQUESTS},
        inflight::Landing,
    },
};

/// Where the names of a set of IDs come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum IdSource {
    /// Universe names for static IDs, the fallback chain for dynamic IDs.
    Directory,
    /// Corporation information, one request per ID.
    Corporation,
}

/// Outcome of one universe names request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamesChunk {
    /// ESI answered with names for the chunk.
    Named,
    /// ESI answered "not found", at least one ID in the chunk is invalid.
    Rejected,
    /// The request failed after its retries, splitting the chunk would not help.
    Failed,
}

impl Resolver {
    /// Fetches every ID that is not yet resolved, at most one fetch per ID at a time.
    ///
    /// When this returns every input ID other than 0 has a cache entry, possibly "Unknown".
    pub(super) async fn resolve_ids(&self, ids: &[EveId], source: IdSource) {
        let mut pending: Vec<EveId> = ids
            .iter()
            .copied()
            .filter(|&id| id != NONE_ID && !self.cache.is_resolved(id))
            .collect();
        pending.sort_unstable();
        pending.dedup();

        while !pending.is_empty() {
            let (flight, landings) = self.id_flights.claim(pending.iter().copied());

            // Another flight may have landed between the filter above and the claim
            let owned: Vec<EveId> = flight
                .keys()
                .iter()
                .copied()
                .filter(|&id| !self.cache.is_resolved(id))
                .collect();

            if !owned.is_empty() {
                match source {
                    IdSource::Directory => self.fetch_unknown_ids(&owned).await,
                    IdSource::Corporation => self.fetch_corporations(&owned).await,
                }
            }
            drop(flight);

            if landings.is_empty() {
                break;
            }

            tracing::debug!(
                "Waiting on {} concurrent ID lookups before reading the cache",
                landings.len()
            );
            futures::future::join_all(landings.into_iter().map(Landing::wait)).await;

            // An owner that was cancelled leaves its IDs uncached, claim them again
            pending.retain(|&id| !self.cache.contains_id(id));
        }
    }

    async fn fetch_unknown_ids(&self, ids: &[EveId]) {
        let (static_ids, dynamic_ids) = self.classifier.partition(ids);

        if !static_ids.is_empty() {
            self.fetch_static_names(static_ids).await;
        }
        if !dynamic_ids.is_empty() {
            self.fetch_dynamic_names(dynamic_ids).await;
        }
    }

    async fn fetch_static_names(&self, mut ids: Vec<EveId>) {
        ids.sort_unstable();

        for chunk in ids.chunks(ESI_BULK_REQUEST_LIMIT) {
            if self.fetch_names_chunk(chunk).await != NamesChunk::Rejected || chunk.len() == 1 {
                continue;
            }

            // ESI rejects the whole request over a single invalid ID, retry IDs alone
            tracing::debug!(
                "Universe names rejected a chunk of {} IDs, retrying individually",
                chunk.len()
            );
            for &id in chunk {
                self.fetch_names_chunk(&[id]).await;
            }
        }

        self.mark_unresolved(&ids);
    }

    async fn fetch_names_chunk(&self, ids: &[EveId]) -> NamesChunk {
        match self.client.names_by_ids(ids).await {
            Ok(Some(names)) => {
                for entity in names {
                    self.cache.put(&entity.name, entity.id);
                }
                NamesChunk::Named
            }
            Ok(None) => NamesChunk::Rejected,
            Err(e) => {
                tracing::warn!("Failed to fetch universe names for {} IDs: {}", ids.len(), e);
                NamesChunk::Failed
            }
        }
    }

    /// Probes structures, then asset names, then asset locations.
    ///
    /// A probe hands an ID to the next one only when it returned no data for it. A probe that
    /// answered without mentioning an ID settles it as "Unknown".
    async fn fetch_dynamic_names(&self, mut ids: Vec<EveId>) {
        ids.sort_unstable();

        if !self.client.is_authorized() {
            tracing::debug!(
                "No ESI session, {} structure or asset IDs stay unknown",
                ids.len()
            );
            self.mark_unresolved(&ids);
            return;
        }

        let remaining = self.probe_structures(&ids).await;
        let remaining = self.probe_asset_names(&remaining).await;
        self.probe_asset_locations(&remaining).await;

        self.mark_unresolved(&ids);
    }

    /// Returns the IDs ESI had no structure for.
    async fn probe_structures(&self, ids: &[EveId]) -> Vec<EveId> {
        let mut remaining = Vec::new();

        for chunk in ids.chunks(ESI_CONCURRENT_REQUESTS) {
            let mut futures = FuturesUnordered::new();

            for &id in chunk {
                let future = async move { (id, self.client.structure_by_id(id, true).await) };
                futures.push(future);
            }

            while let Some((id, result)) = futures.next().await {
                match result {
                    Ok(Some(structure)) => self.cache.put(&structure.name, id),
                    Ok(None) => remaining.push(id),
                    Err(e) => {
                        tracing::debug!("Structure lookup failed for {}: {}", id, e);
                        remaining.push(id);
                    }
                }
            }
        }

        remaining.sort_unstable();
        remaining
    }

    /// Returns the IDs of chunks the asset names endpoint had no data for.
    async fn probe_asset_names(&self, ids: &[EveId]) -> Vec<EveId> {
        let mut remaining = Vec::new();

        for chunk in ids.chunks(ESI_BULK_REQUEST_LIMIT) {
            match self.client.asset_custom_names_by_ids(chunk).await {
                Ok(Some(names)) => {
                    for asset in names {
                        // Unnamed items are reported with an empty name
                        if !asset.name.is_empty() && chunk.contains(&asset.item_id) {
                            self.cache.put(&asset.name, asset.item_id);
                        }
                    }
                    self.mark_unresolved(chunk);
                }
                Ok(None) => remaining.extend_from_slice(chunk),
                Err(e) => {
                    tracing::debug!("Asset names failed for {} IDs: {}", chunk.len(), e);
                    remaining.extend_from_slice(chunk);
                }
            }
        }

        remaining
    }

    async fn probe_asset_locations(&self, ids: &[EveId]) {
        for chunk in ids.chunks(ESI_BULK_REQUEST_LIMIT) {
            match self.client.asset_locations_by_ids(chunk).await {
                Ok(Some(locations)) => {
                    for location in locations {
                        if !chunk.contains(&location.item_id) {
                            continue;
                        }
                        let position = location.position;
                        self.cache.put_display(
                            location.item_id,
                            DisplayName::from_position(position.x, position.y, position.z),
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("Asset locations failed for {} IDs: {}", chunk.len(), e);
                }
            }
        }
    }

    async fn fetch_corporations(&self, ids: &[EveId]) {
        for chunk in ids.chunks(ESI_CONCURRENT_REQUESTS) {
            let mut futures = FuturesUnordered::new();

            for &id in chunk {
                let future = async move { (id, self.client.corporation_info(id).await) };
                futures.push(future);
            }

            while let Some((id, result)) = futures.next().await {
                match result {
                    Ok(name) => self.cache.put(&name, id),
                    Err(e) => {
                        tracing::warn!("Failed to fetch corporation {}: {}", id, e);
                    }
                }
            }
        }

        self.mark_unresolved(ids);
    }

    fn mark_unresolved(&self, ids: &[EveId]) {
        for &id in ids {
            if !self.cache.is_resolved(id) {
                self.cache.put_display(id, DisplayName::Unknown);
            }
        }
    }
}
