//! Utility functions and constants shared across the directory client and the resolver.

pub mod eve;
pub mod inflight;
