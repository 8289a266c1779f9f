//! Stremio add-on protocol handlers.
//!
//! Resource paths carry a `.json` suffix on their last segment, e.g.
//! `/catalog/anime/anilist-search/search=naruto&skip=50.json`.

use super::error::ApiResult;
use super::AppState;
use crate::catalog::CatalogExtra;
use crate::manifest::Manifest;
use crate::source::MediaSource;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::Redirect,
    Json,
};
use shared::{CatalogResponse, MetaResponse, CONTENT_TYPE};

fn strip_json(segment: &str) -> &str {
    segment.strip_suffix(".json").unwrap_or(segment)
}

pub async fn root() -> Redirect {
    Redirect::temporary("/manifest.json")
}

pub async fn manifest<S: MediaSource>(State(state): State<AppState<S>>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}

/// `/catalog/{type}/{id}.json`
pub async fn catalog<S: MediaSource>(
    State(state): State<AppState<S>>,
    Path((content_type, id)): Path<(String, String)>,
) -> ApiResult<Json<CatalogResponse>> {
    serve_catalog(&state, &content_type, strip_json(&id), CatalogExtra::default()).await
}

/// `/catalog/{type}/{id}/{extra}.json`
pub async fn catalog_with_extra<S: MediaSource>(
    State(state): State<AppState<S>>,
    Path((content_type, id, _)): Path<(String, String, String)>,
    uri: Uri,
) -> ApiResult<Json<CatalogResponse>> {
    // Parse the still-encoded segment so an escaped '&' inside a value survives.
    let raw_extra = uri.path().rsplit('/').next().unwrap_or_default();
    let extra = CatalogExtra::from_encoded(strip_json(raw_extra));

    serve_catalog(&state, &content_type, &id, extra).await
}

async fn serve_catalog<S: MediaSource>(
    state: &AppState<S>,
    content_type: &str,
    id: &str,
    extra: CatalogExtra,
) -> ApiResult<Json<CatalogResponse>> {
    if content_type != CONTENT_TYPE {
        return Ok(Json(CatalogResponse { metas: Vec::new() }));
    }

    let metas = state.catalog.catalog(id, &extra).await?;
    Ok(Json(CatalogResponse { metas }))
}

/// `/meta/{type}/{id}.json`
pub async fn meta<S: MediaSource>(
    State(state): State<AppState<S>>,
    Path((content_type, id)): Path<(String, String)>,
) -> ApiResult<Json<MetaResponse>> {
    if content_type != CONTENT_TYPE {
        return Ok(Json(MetaResponse { meta: None }));
    }

    let meta = state.meta.meta(strip_json(&id)).await?;
    Ok(Json(MetaResponse { meta }))
}
