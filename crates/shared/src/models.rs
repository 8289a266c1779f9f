//! Data models served by the add-on.
//!
//! These are the shapes the Stremio client consumes: a lightweight preview
//! for catalog rows and a full detail record for the meta view. Optional
//! fields are omitted from the JSON entirely when absent.

use serde::{Deserialize, Serialize};

/// Content type tag used for every item this add-on serves
pub const CONTENT_TYPE: &str = "anime";

/// Poster shape for catalog rows; AniList covers are always portrait
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PosterShape {
    #[default]
    Regular,
}

/// Catalog row (lite mapping)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub poster_shape: PosterShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Detail view (full mapping)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetaDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    /// Score on a 0-10 scale with one decimal, e.g. "8.5"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub videos: Vec<Video>,
}

/// Synthesized episode entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub season: u32,
    pub episode: u32,
    pub title: String,
}

/// Response body for catalog requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// Response body for meta requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
}
