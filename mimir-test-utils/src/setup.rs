use std::sync::Arc;
use std::time::Duration;

use mimir::{
    directory::retry::RetryPolicy, EsiDirectoryClient, EsiSession, IdClassifier, Resolver,
};
use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_CHARACTER_ID, TEST_USER_AGENT},
    error::TestError,
};

/// Attempts per request in tests, enough to observe one retry.
pub const TEST_MAX_ATTEMPTS: u32 = 2;

pub struct TestSetup {
    pub server: ServerGuard,
    pub esi_client: eve_esi::Client,
    pub directory: Arc<EsiDirectoryClient>,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let esi_config = eve_esi::Config::builder()
            .esi_url(&mock_server_url)
            .build()?;

        let esi_client = eve_esi::Client::builder()
            .config(esi_config)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let http = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let retry =
            RetryPolicy::new(TEST_MAX_ATTEMPTS).with_initial_backoff(Duration::from_millis(1));
        let directory =
            EsiDirectoryClient::with_clients(http, esi_client.clone(), &mock_server_url, retry);

        Ok(TestSetup {
            server: mock_server,
            esi_client,
            directory: Arc::new(directory),
            mocks: Vec::new(),
        })
    }

    /// Authorize the directory client as the test character.
    pub fn authorize(&self) {
        self.directory.set_session(Some(EsiSession::new(
            TEST_CHARACTER_ID,
            TEST_ACCESS_TOKEN,
        )));
    }

    /// Resolver over this setup's directory client with the default ID classifier.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.directory.clone(), IdClassifier::default())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
