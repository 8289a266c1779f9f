//! Dattebayo: a Stremio add-on serving AniList catalogs.
//!
//! This library translates add-on catalog and meta requests into AniList
//! GraphQL queries, maps the results into add-on metas, and keeps them in a
//! short-lived in-memory cache.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod manifest;
pub mod mapper;
pub mod meta;
pub mod paging;
pub mod season;
pub mod server;
pub mod source;

#[cfg(test)]
mod testing;

pub use api::{AniListClient, AniListError};
pub use cache::{ResponseCache, TtlCache};
pub use catalog::{CatalogExtra, CatalogKind, CatalogService};
pub use manifest::Manifest;
pub use meta::MetaService;
pub use season::{current_season_year, Season};
pub use server::{create_router, run_server, AppState};
pub use source::MediaSource;
