//! [`DirectoryClient`] backed by ESI.
//!
//! Corporation lookups go through the `eve_esi` client. The remaining endpoints (search,
//! bulk ID/name resolution, structures, asset names and locations) are requested directly
//! with `reqwest` against the same base URL.

use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    directory::{retry::RetryPolicy, DirectoryClient},
    error::Error,
    model::{
        category::Category,
        esi::{
            AssetLocation, AssetName, EntityName, ExactMatch, SearchResults, StructureInfo,
            UniverseIds,
        },
        id::EveId,
        session::EsiSession,
    },
};

/// ESI implementation of [`DirectoryClient`].
pub struct EsiDirectoryClient {
    http: reqwest::Client,
    esi_client: eve_esi::Client,
    esi_url: String,
    retry: RetryPolicy,
    session: RwLock<Option<EsiSession>>,
}

impl EsiDirectoryClient {
    /// Builds the HTTP client from configuration and pairs it with an `eve_esi` client.
    pub fn new(config: &Config, esi_client: eve_esi::Client) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self::with_clients(
            http,
            esi_client,
            &config.esi_url,
            RetryPolicy::new(config.max_attempts),
        ))
    }

    /// Assembles a client from already built parts.
    pub fn with_clients(
        http: reqwest::Client,
        esi_client: eve_esi::Client,
        esi_url: &str,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            esi_client,
            esi_url: esi_url.trim_end_matches('/').to_string(),
            retry,
            session: RwLock::new(None),
        }
    }

    /// Installs or clears the authorized character session.
    pub fn set_session(&self, session: Option<EsiSession>) {
        let mut current = self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = session;
    }

    fn session(&self) -> RwLockReadGuard<'_, Option<EsiSession>> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn require_session(&self, description: &str) -> Result<EsiSession, Error> {
        self.session()
            .clone()
            .ok_or_else(|| Error::Unauthorized(format!("no session for {}", description)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.esi_url, path)
    }

    /// Sends a request with retries and decodes the JSON body.
    ///
    /// Returns `None` for 404, [`Error::Unauthorized`] for 401 and 403.
    async fn fetch<T, F>(&self, description: &str, request: F) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        self.retry
            .execute(description, || async {
                let response = request().send().await?;

                match response.status() {
                    StatusCode::NOT_FOUND => Ok(None),
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized(
                        format!("{} rejected with {}", description, response.status()),
                    )),
                    _ => {
                        let body = response.error_for_status()?.json::<T>().await?;
                        Ok(Some(body))
                    }
                }
            })
            .await
    }
}

#[async_trait]
impl DirectoryClient for EsiDirectoryClient {
    fn is_authorized(&self) -> bool {
        self.session().is_some()
    }

    async fn search_by_query(
        &self,
        text: &str,
        category: Category,
        authorized: bool,
    ) -> Result<Vec<EveId>, Error> {
        let session = if authorized {
            Some(self.require_session("character search")?)
        } else {
            None
        };

        let url = match &session {
            Some(session) => self.url(&format!("/characters/{}/search", session.character_id)),
            None => self.url("/search"),
        };
        let query = [
            ("categories", category.search_key()),
            ("search", text),
            ("strict", "false"),
        ];

        let results: Option<SearchResults> = self
            .fetch("search", || {
                let request = self.http.get(&url).query(&query);
                match &session {
                    Some(session) => request.bearer_auth(&session.access_token),
                    None => request,
                }
            })
            .await?;

        Ok(results
            .and_then(|mut results| results.remove(category.search_key()))
            .unwrap_or_default())
    }

    async fn exact_ids_by_names(&self, names: &[String]) -> Result<Vec<ExactMatch>, Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.url("/universe/ids");
        let ids: Option<UniverseIds> = self
            .fetch("universe ids", || self.http.post(&url).json(names))
            .await?;

        Ok(ids.map(UniverseIds::into_matches).unwrap_or_default())
    }

    async fn names_by_ids(&self, ids: &[EveId]) -> Result<Option<Vec<EntityName>>, Error> {
        if ids.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let url = self.url("/universe/names");
        self.fetch("universe names", || self.http.post(&url).json(ids))
            .await
    }

    async fn structure_by_id(
        &self,
        id: EveId,
        authorized: bool,
    ) -> Result<Option<StructureInfo>, Error> {
        let session = if authorized {
            Some(self.require_session("structure lookup")?)
        } else {
            None
        };

        let url = self.url(&format!("/universe/structures/{}", id));
        self.fetch("structure", || {
            let request = self.http.get(&url);
            match &session {
                Some(session) => request.bearer_auth(&session.access_token),
                None => request,
            }
        })
        .await
    }

    async fn asset_custom_names_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetName>>, Error> {
        let session = self.require_session("asset names")?;

        let url = self.url(&format!("/characters/{}/assets/names", session.character_id));
        self.fetch("asset names", || {
            self.http
                .post(&url)
                .bearer_auth(&session.access_token)
                .json(ids)
        })
        .await
    }

    async fn asset_locations_by_ids(
        &self,
        ids: &[EveId],
    ) -> Result<Option<Vec<AssetLocation>>, Error> {
        let session = self.require_session("asset locations")?;

        let url = self.url(&format!(
            "/characters/{}/assets/locations",
            session.character_id
        ));
        self.fetch("asset locations", || {
            self.http
                .post(&url)
                .bearer_auth(&session.access_token)
                .json(ids)
        })
        .await
    }

    async fn corporation_info(&self, id: EveId) -> Result<String, Error> {
        let corporation = self
            .retry
            .execute("corporation information", || async {
                Ok(self
                    .esi_client
                    .corporation()
                    .get_corporation_information(id)
                    .await?)
            })
            .await?;

        Ok(corporation.name)
    }
}
