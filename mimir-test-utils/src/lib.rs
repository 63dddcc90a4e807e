//! Test utilities for mimir.
//!
//! Two kinds of test doubles are provided:
//!
//! - [`TestBuilder`] / [`TestSetup`] run an [`EsiDirectoryClient`](mimir::EsiDirectoryClient)
//!   against a `mockito` server so tests exercise the real HTTP mapping.
//! - [`StubDirectory`] implements [`DirectoryClient`](mimir::DirectoryClient) in memory and
//!   records every call, for resolver tests that count remote lookups.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;
pub mod stub;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;
pub use stub::{DirectoryCall, StubDirectory};

pub mod prelude {
    pub use crate::{
        constant::{TEST_ACCESS_TOKEN, TEST_CHARACTER_ID},
        fixtures::factory,
        DirectoryCall, StubDirectory, TestBuilder, TestError, TestSetup,
    };
}
