//! Tests for EsiDirectoryClient against a mock ESI server.

mod assets;
mod corporation;
mod structure;
