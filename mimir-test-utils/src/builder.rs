//! Declarative test builder.
//!
//! `TestBuilder` queues mock ESI endpoints and session settings, all of which are applied
//! during the final `build()` call.

use eve_esi::model::corporation::Corporation;
use mimir::{
    model::esi::{AssetLocation, AssetName, EntityName, StructureInfo, UniverseIds},
    Category, EveId,
};
use mockito::Mock;

use crate::{error::TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    authorized: bool,

    // Mock endpoints to create
    mock_builders: Vec<MockBuilder>,

    // Pre-configured endpoint shortcuts
    search_endpoints: Vec<(Category, String, Vec<EveId>, usize)>,
    character_search_endpoints: Vec<(Category, String, Vec<EveId>, usize)>,
    universe_ids_endpoints: Vec<(Vec<String>, UniverseIds, usize)>,
    universe_names_endpoints: Vec<(Vec<EveId>, Vec<EntityName>, usize)>,
    structure_endpoints: Vec<(EveId, StructureInfo, usize)>,
    asset_names_endpoints: Vec<(Vec<EveId>, Vec<AssetName>, usize)>,
    asset_locations_endpoints: Vec<(Vec<EveId>, Vec<AssetLocation>, usize)>,
    corporation_endpoints: Vec<(EveId, Corporation, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder without a session or endpoints.
    pub fn new() -> Self {
        Self {
            authorized: false,
            mock_builders: Vec::new(),
            search_endpoints: Vec::new(),
            character_search_endpoints: Vec::new(),
            universe_ids_endpoints: Vec::new(),
            universe_names_endpoints: Vec::new(),
            structure_endpoints: Vec::new(),
            asset_names_endpoints: Vec::new(),
            asset_locations_endpoints: Vec::new(),
            corporation_endpoints: Vec::new(),
        }
    }

    /// Install the test character's session on the directory client.
    pub fn with_session(mut self) -> Self {
        self.authorized = true;
        self
    }

    /// Add a mock public search endpoint returning `ids` for `text` in `category`.
    pub fn with_search_endpoint(
        mut self,
        category: Category,
        text: &str,
        ids: Vec<EveId>,
        expected_requests: usize,
    ) -> Self {
        self.search_endpoints
            .push((category, text.to_string(), ids, expected_requests));
        self
    }

    /// Add a mock search endpoint for the test character.
    pub fn with_character_search_endpoint(
        mut self,
        category: Category,
        text: &str,
        ids: Vec<EveId>,
        expected_requests: usize,
    ) -> Self {
        self.character_search_endpoints
            .push((category, text.to_string(), ids, expected_requests));
        self
    }

    /// Add a mock `/universe/ids` endpoint for the posted names.
    pub fn with_universe_ids_endpoint(
        mut self,
        names: Vec<String>,
        response: UniverseIds,
        expected_requests: usize,
    ) -> Self {
        self.universe_ids_endpoints
            .push((names, response, expected_requests));
        self
    }

    /// Add a mock `/universe/names` endpoint for the posted IDs, in ascending order.
    pub fn with_universe_names_endpoint(
        mut self,
        ids: Vec<EveId>,
        names: Vec<EntityName>,
        expected_requests: usize,
    ) -> Self {
        self.universe_names_endpoints
            .push((ids, names, expected_requests));
        self
    }

    /// Add a mock structure endpoint requiring the test session's token.
    pub fn with_structure_endpoint(
        mut self,
        structure_id: EveId,
        structure: StructureInfo,
        expected_requests: usize,
    ) -> Self {
        self.structure_endpoints
            .push((structure_id, structure, expected_requests));
        self
    }

    /// Add a mock asset names endpoint for the test character.
    pub fn with_asset_names_endpoint(
        mut self,
        ids: Vec<EveId>,
        names: Vec<AssetName>,
        expected_requests: usize,
    ) -> Self {
        self.asset_names_endpoints
            .push((ids, names, expected_requests));
        self
    }

    /// Add a mock asset locations endpoint for the test character.
    pub fn with_asset_locations_endpoint(
        mut self,
        ids: Vec<EveId>,
        locations: Vec<AssetLocation>,
        expected_requests: usize,
    ) -> Self {
        self.asset_locations_endpoints
            .push((ids, locations, expected_requests));
        self
    }

    /// Add a mock corporation endpoint.
    pub fn with_corporation_endpoint(
        mut self,
        corporation_id: EveId,
        corporation: Corporation,
        expected_requests: usize,
    ) -> Self {
        self.corporation_endpoints
            .push((corporation_id, corporation, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for error responses and endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup with the session and every configured mock endpoint.
    ///
    /// Custom endpoints are created first so tests can stack an error response in front of
    /// a success for the same path.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        if self.authorized {
            setup.authorize();
        }

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (category, text, ids, expected) in self.search_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_search_endpoint(category, &text, ids, expected),
            );
        }

        for (category, text, ids, expected) in self.character_search_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_character_search_endpoint(category, &text, ids, expected),
            );
        }

        for (names, response, expected) in self.universe_ids_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_universe_ids_endpoint(names, response, expected),
            );
        }

        for (ids, names, expected) in self.universe_names_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_universe_names_endpoint(ids, names, expected),
            );
        }

        for (structure_id, structure, expected) in self.structure_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_structure_endpoint(structure_id, structure, expected),
            );
        }

        for (ids, names, expected) in self.asset_names_endpoints {
            mocks.push(setup.esi().create_asset_names_endpoint(ids, names, expected));
        }

        for (ids, locations, expected) in self.asset_locations_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_asset_locations_endpoint(ids, locations, expected),
            );
        }

        for (corporation_id, corporation, expected) in self.corporation_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_corporation_endpoint(corporation_id, corporation, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
