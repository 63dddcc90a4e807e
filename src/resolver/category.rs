use crate::{
    model::{
        category::{Category, LookupStrategy},
        id::EveId,
        lookup::Lookup,
    },
    resolver::Resolver,
};

impl Resolver {
    /// Resolves a display name to the ID of an entity in `category`.
    ///
    /// Inventory types need an exact, case-insensitive match. Every other category takes the
    /// first search result, and the matched ID is resolved to its canonical name so both the
    /// query and the canonical spelling are cached. Misses and ESI failures are reported as
    /// [`Lookup`] values; [`Lookup::id_or_sentinel`] turns them into `-1`.
    pub async fn name_to_id(&self, name: &str, category: Category) -> Lookup<EveId> {
        let name = name.trim();
        if name.is_empty() {
            return Lookup::NotFound;
        }

        if let Some(id) = self.cache.get_by_name(name) {
            return Lookup::Found(id);
        }

        let (flight, landings) = self.name_flights.claim([name.to_string()]);
        if flight.keys().is_empty() {
            drop(flight);
            for landing in landings {
                landing.wait().await;
            }
            // The owner's miss reason is not shared, only its cached result
            return self.cache.get_by_name(name).into();
        }

        if let Some(id) = self.cache.get_by_name(name) {
            return Lookup::Found(id);
        }

        let lookup = match category.strategy() {
            LookupStrategy::ExactMatch => self.exact_match(name, category).await,
            LookupStrategy::ClosestMatch => self.closest_match(name, category).await,
        };

        tracing::debug!("Resolved {} `{}` to {:?}", category, name, lookup);

        lookup
    }

    async fn exact_match(&self, name: &str, category: Category) -> Lookup<EveId> {
        let matches = match self.client.exact_ids_by_names(&[name.to_string()]).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Exact lookup for {} `{}` failed: {}", category, name, e);
                return Lookup::from_error(&e);
            }
        };

        match matches.into_iter().find(|m| m.category == category) {
            Some(exact) => {
                self.cache.put(&exact.name, exact.id);
                self.cache.alias(name, exact.id);
                Lookup::Found(exact.id)
            }
            None => Lookup::NotFound,
        }
    }

    async fn closest_match(&self, name: &str, category: Category) -> Lookup<EveId> {
        let authorized = self.client.is_authorized();
        if category.requires_authorization() && !authorized {
            tracing::debug!("No ESI session to search {} `{}`", category, name);
            return Lookup::Unauthorized;
        }

        let id = match self.client.search_by_query(name, category, authorized).await {
            Ok(ids) => match ids.first() {
                Some(&id) => id,
                None => return Lookup::NotFound,
            },
            Err(e) => {
                tracing::warn!("Search for {} `{}` failed: {}", category, name, e);
                return Lookup::from_error(&e);
            }
        };

        // Caches the canonical spelling alongside the query
        self.id_to_name(id).await;
        self.cache.alias(name, id);

        Lookup::Found(id)
    }
}
