//! ESI HTTP mock endpoint creation utilities.
//!
//! Each method registers an endpoint on the setup's mockito server that returns the given data
//! as JSON and verifies it was called exactly `expected_requests` times. Endpoints that need
//! authorization only match requests carrying the test session's bearer token.

use std::collections::HashMap;

use eve_esi::model::corporation::Corporation;
use mimir::{
    model::esi::{AssetLocation, AssetName, EntityName, StructureInfo, UniverseIds},
    Category, EveId,
};
use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_CHARACTER_ID},
    fixtures::EsiFixtures,
};

fn bearer() -> String {
    format!("Bearer {}", TEST_ACCESS_TOKEN)
}

fn search_results(category: Category, ids: Vec<EveId>) -> HashMap<&'static str, Vec<EveId>> {
    HashMap::from([(category.search_key(), ids)])
}

fn search_query(category: Category, text: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("categories".into(), category.search_key().into()),
        Matcher::UrlEncoded("search".into(), text.into()),
        Matcher::UrlEncoded("strict".into(), "false".into()),
    ])
}

impl<'a> EsiFixtures<'a> {
    /// Create a mock endpoint for the public search.
    ///
    /// Matches `GET /search` with the category, search text and `strict=false` query
    /// parameters, and returns `ids` under the category's key.
    pub fn create_search_endpoint(
        &mut self,
        category: Category,
        text: &str,
        ids: Vec<EveId>,
        expected_requests: usize,
    ) -> Mock {
        let body = search_results(category, ids);

        self.setup
            .server
            .mock("GET", "/search")
            .match_query(search_query(category, text))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the search as the test character.
    pub fn create_character_search_endpoint(
        &mut self,
        category: Category,
        text: &str,
        ids: Vec<EveId>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/search", TEST_CHARACTER_ID);
        let body = search_results(category, ids);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(search_query(category, text))
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `POST /universe/ids` matching the posted names.
    pub fn create_universe_ids_endpoint(
        &mut self,
        names: Vec<String>,
        response: UniverseIds,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/ids")
            .match_body(Matcher::Json(json!(names)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&response).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `POST /universe/names` matching the posted IDs.
    ///
    /// The resolver posts IDs in ascending order.
    pub fn create_universe_names_endpoint(
        &mut self,
        ids: Vec<EveId>,
        names: Vec<EntityName>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/names")
            .match_body(Matcher::Json(json!(ids)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&names).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `POST /universe/names` for `ids` with an error status.
    pub fn create_universe_names_error_endpoint(
        &mut self,
        ids: Vec<EveId>,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/names")
            .match_body(Matcher::Json(json!(ids)))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "Ensure all IDs are valid before resolving" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /universe/structures/{structure_id}`.
    pub fn create_structure_endpoint(
        &mut self,
        structure_id: EveId,
        structure: StructureInfo,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/universe/structures/{}", structure_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&structure).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering a structure lookup with an error status.
    pub fn create_structure_error_endpoint(
        &mut self,
        structure_id: EveId,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/universe/structures/{}", structure_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "Structure not found" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the test character's asset names.
    pub fn create_asset_names_endpoint(
        &mut self,
        ids: Vec<EveId>,
        names: Vec<AssetName>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/assets/names", TEST_CHARACTER_ID);

        self.setup
            .server
            .mock("POST", url.as_str())
            .match_header("authorization", bearer().as_str())
            .match_body(Matcher::Json(json!(ids)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&names).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the test character's asset locations.
    pub fn create_asset_locations_endpoint(
        &mut self,
        ids: Vec<EveId>,
        locations: Vec<AssetLocation>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/assets/locations", TEST_CHARACTER_ID);

        self.setup
            .server
            .mock("POST", url.as_str())
            .match_header("authorization", bearer().as_str())
            .match_body(Matcher::Json(json!(ids)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&locations).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /corporations/{corporation_id}`.
    pub fn create_corporation_endpoint(
        &mut self,
        corporation_id: EveId,
        mock_corporation: Corporation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_corporation).unwrap())
            .expect(expected_requests)
            .create()
    }
}
