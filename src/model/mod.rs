//! Domain types shared by the cache, the directory client, and the resolver.

pub mod category;
pub mod display;
pub mod esi;
pub mod id;
pub mod lookup;
pub mod session;
