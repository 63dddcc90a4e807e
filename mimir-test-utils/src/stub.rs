//! In-memory [`DirectoryClient`] recording every call.
//!
//! Configured with builder methods before the test and, for data that changes mid-test, with
//! the `set_*` methods afterwards. Missing data is answered the way ESI answers it: unknown
//! names and IDs are simply absent from responses, a names batch containing an invalid ID is
//! rejected as a whole, and probes without data answer "not found".

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use mimir::{
    model::esi::{AssetLocation, AssetName, EntityName, ExactMatch, StructureInfo},
    Category, DirectoryClient, Error, EveId,
};

/// A call made to the stub, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    SearchByQuery {
        text: String,
        category: Category,
        authorized: bool,
    },
    ExactIdsByNames(Vec<String>),
    NamesByIds(Vec<EveId>),
    StructureById(EveId),
    AssetCustomNamesByIds(Vec<EveId>),
    AssetLocationsByIds(Vec<EveId>),
    CorporationInfo(EveId),
}

/// How a probe endpoint answers.
#[derive(Debug, Clone, Default)]
enum Probe<T> {
    /// ESI has no data for the request.
    #[default]
    NotFound,
    /// The request fails.
    Failing,
    /// ESI answers with whatever subset of the data was asked for.
    Data(T),
}

#[derive(Debug, Default)]
struct StubData {
    authorized: bool,
    search: HashMap<(Category, String), Vec<EveId>>,
    exact: Vec<ExactMatch>,
    names: HashMap<EveId, String>,
    invalid_ids: HashSet<EveId>,
    failing_names: bool,
    structures: Probe<HashMap<EveId, String>>,
    asset_names: Probe<HashMap<EveId, String>>,
    asset_locations: Probe<HashMap<EveId, (f64, f64, f64)>>,
    corporations: HashMap<EveId, String>,
    delay: Option<Duration>,
}

/// Call-recording [`DirectoryClient`] double.
#[derive(Debug, Default)]
pub struct StubDirectory {
    data: Mutex<StubData>,
    calls: Mutex<Vec<DirectoryCall>>,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an authorized session.
    pub fn authorized(self) -> Self {
        self.set_authorized(true);
        self
    }

    /// Search results for `text` in `category`, best match first.
    pub fn with_search(self, category: Category, text: &str, ids: Vec<EveId>) -> Self {
        self.data()
            .search
            .insert((category, text.to_string()), ids);
        self
    }

    /// Exact match reported by `exact_ids_by_names`, matched case-insensitively.
    pub fn with_exact(self, category: Category, id: EveId, name: &str) -> Self {
        self.data().exact.push(ExactMatch {
            id,
            name: name.to_string(),
            category,
        });
        self
    }

    /// Universe name of a static ID.
    pub fn with_name(self, id: EveId, name: &str) -> Self {
        self.data().names.insert(id, name.to_string());
        self
    }

    /// ID that makes any names batch containing it answer "not found".
    pub fn with_invalid_id(self, id: EveId) -> Self {
        self.data().invalid_ids.insert(id);
        self
    }

    /// Every universe names request fails.
    pub fn with_failing_names(self) -> Self {
        self.data().failing_names = true;
        self
    }

    /// Structure lookups answer with these names and "not found" for other IDs.
    pub fn with_structures(self, structures: &[(EveId, &str)]) -> Self {
        self.data().structures = Probe::Data(to_map(structures));
        self
    }

    /// Every structure lookup fails.
    pub fn with_failing_structures(self) -> Self {
        self.data().structures = Probe::Failing;
        self
    }

    /// Asset name batches answer with the subset of these names that was asked for.
    pub fn with_asset_names(self, names: &[(EveId, &str)]) -> Self {
        self.data().asset_names = Probe::Data(to_map(names));
        self
    }

    /// Every asset names request fails.
    pub fn with_failing_asset_names(self) -> Self {
        self.data().asset_names = Probe::Failing;
        self
    }

    /// Asset location batches answer with the subset of these positions that was asked for.
    pub fn with_asset_locations(self, locations: &[(EveId, (f64, f64, f64))]) -> Self {
        self.data().asset_locations = Probe::Data(locations.iter().copied().collect());
        self
    }

    /// Every asset locations request fails.
    pub fn with_failing_asset_locations(self) -> Self {
        self.data().asset_locations = Probe::Failing;
        self
    }

    /// Name of a corporation, other corporation lookups fail.
    pub fn with_corporation(self, id: EveId, name: &str) -> Self {
        self.data().corporations.insert(id, name.to_string());
        self
    }

    /// Delay every call, giving concurrent callers time to overlap.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.data().delay = Some(delay);
        self
    }

    pub fn set_authorized(&self, authorized: bool) {
        self.data().authorized = authorized;
    }

    /// Replace the structures known to the stub mid-test.
    pub fn set_structures(&self, structures: &[(EveId, &str)]) {
        self.data().structures = Probe::Data(to_map(structures));
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls_log().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls_log().len()
    }

    pub fn clear_calls(&self) {
        self.calls_log().clear();
    }

    fn data(&self) -> MutexGuard<'_, StubData> {
        self.data.lock().unwrap()
    }

    fn calls_log(&self) -> MutexGuard<'_, Vec<DirectoryCall>> {
        self.calls.lock().unwrap()
    }

    async fn record(&self, call: DirectoryCall) {
        self.calls_log().push(call);

        let delay = self.data().delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn to_map(entries: &[(EveId, &str)]) -> HashMap<EveId, String> {
    entries
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect()
}

fn unavailable(endpoint: &str) -> Error {
    Error::InternalError(format!("stub {} unavailable", endpoint))
}

#[async_trait]
impl DirectoryClient for StubDirectory {
    fn is_authorized(&self) -> bool {
        self.data().authorized
    }

    async fn search_by_query(
        &self,
        text: &str,
        category: Category,
        authorized: bool,
    ) -> Result<Vec<EveId>, Error> {
        self.record(DirectoryCall::SearchByQuery {
            text: text.to_string(),
            category,
            authorized,
        })
        .await;

        let data = self.data();
        Ok(data
            .search
            .get(&(category, text.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn exact_ids_by_names(&self, names: &[String]) -> Result<Vec<ExactMatch>, Error> {
        self.record(DirectoryCall::ExactIdsByNames(names.to_vec()))
            .await;

        let data = self.data();
        Ok(data
            .exact
            .iter()
            .filter(|exact| {
                names
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(&exact.name))
            })
            .cloned()
            .collect())
    }

    async fn names_by_ids(&self, ids: &[EveId]) -> Result<Option<Vec<EntityName>>, Error> {
        self.record(DirectoryCall::NamesByIds(ids.to_vec())).await;

        let data = self.data();
        if data.failing_names {
            return Err(unavailable("universe names"));
        }
        if ids.iter().any(|id| data.invalid_ids.contains(id)) {
            return Ok(None);
        }

        Ok(Some(
            ids.iter()
                .filter_map(|id| {
                    data.names
                        .get(id)
                        .map(|name| EntityName::new(*id, name.clone()))
                })
                .collect(),
        ))
    }

    async fn structure_by_id(
        &self,
        id: EveId,
        _authorized: bool,
    ) -> Result<Option<StructureInfo>, Error> {
        self.record(DirectoryCall::StructureById(id)).await;

        match &self.data().structures {
            Probe::NotFound => Ok(None),
            Probe::Failing => Err(unavailable("structures")),
            Probe::Data(structures) => Ok(structures.get(&id).map(StructureInfo::named)),
        }
    }

    async fn asset_custom_names_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetName>>, Error> {
        self.record(DirectoryCall::AssetCustomNamesByIds(ids.to_vec()))
            .await;

        match &self.data().asset_names {
            Probe::NotFound => Ok(None),
            Probe::Failing => Err(unavailable("asset names")),
            Probe::Data(names) => Ok(Some(
                ids.iter()
                    .filter_map(|id| {
                        names.get(id).map(|name| AssetName {
                            item_id: *id,
                            name: name.clone(),
                        })
                    })
                    .collect(),
            )),
        }
    }

    async fn asset_locations_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetLocation>>, Error> {
        self.record(DirectoryCall::AssetLocationsByIds(ids.to_vec()))
            .await;

        match &self.data().asset_locations {
            Probe::NotFound => Ok(None),
            Probe::Failing => Err(unavailable("asset locations")),
            Probe::Data(locations) => Ok(Some(
                ids.iter()
                    .filter_map(|id| {
                        locations
                            .get(id)
                            .map(|&(x, y, z)| AssetLocation::new(*id, x, y, z))
                    })
                    .collect(),
            )),
        }
    }

    async fn corporation_info(&self, id: EveId) -> Result<String, Error> {
        self.record(DirectoryCall::CorporationInfo(id)).await;

        self.data()
            .corporations
            .get(&id)
            .cloned()
            .ok_or_else(|| unavailable("corporations"))
    }
}
