//! AniList GraphQL API client implementation.
//!
//! This module provides the HTTP client for the AniList GraphQL endpoint,
//! the typed query contracts it executes, and the upstream response types.

pub mod client;
pub mod error;
pub mod queries;
pub mod types;

pub use client::AniListClient;
pub use error::AniListError;
pub use queries::GraphQlQuery;
pub use types::*;
