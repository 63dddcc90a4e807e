//! Name and ID resolution for EVE Online's ESI.
//!
//! ESI exposes regions, stations, player structures, solar systems, inventory types,
//! characters, corporations, and character assets behind different endpoints with
//! different response shapes. This crate hides those differences behind a single
//! [`Resolver`](resolver::Resolver) that turns display names into IDs and IDs into display
//! names, caching every confirmed pairing for the lifetime of the process so report
//! renderers can look names up without touching the network.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod resolver;
pub mod startup;
pub mod util;

pub use cache::NameCache;
pub use config::Config;
pub use directory::{esi::EsiDirectoryClient, DirectoryClient};
pub use error::Error;
pub use model::{
    category::Category,
    id::{EveId, IdClass, IdClassifier},
    lookup::{Lookup, NOT_FOUND_ID},
    session::EsiSession,
};
pub use resolver::Resolver;
