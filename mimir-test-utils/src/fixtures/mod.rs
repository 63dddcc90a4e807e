//! Fixtures for ESI data and mock HTTP endpoints.
//!
//! - `factory` - ESI response objects with realistic values
//! - `mockito` - endpoints registered on the setup's mock server

use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn esi<'a>(&'a mut self) -> EsiFixtures<'a> {
        EsiFixtures { setup: self }
    }
}

pub struct EsiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
