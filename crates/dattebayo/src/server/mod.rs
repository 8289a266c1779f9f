//! HTTP serving layer for the add-on.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use crate::cache::ResponseCache;
use crate::catalog::CatalogService;
use crate::manifest::Manifest;
use crate::meta::MetaService;
use crate::source::MediaSource;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// State shared by every handler
pub struct AppState<S> {
    pub catalog: Arc<CatalogService<S>>,
    pub meta: Arc<MetaService<S>>,
    pub manifest: Arc<Manifest>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            meta: Arc::clone(&self.meta),
            manifest: Arc::clone(&self.manifest),
        }
    }
}

impl<S: MediaSource> AppState<S> {
    pub fn new(source: Arc<S>, cache: Arc<ResponseCache>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(Arc::clone(&source), Arc::clone(&cache))),
            meta: Arc::new(MetaService::new(source, cache)),
            manifest: Arc::new(Manifest::new()),
        }
    }
}

pub fn create_router<S: MediaSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/manifest.json", get(handlers::manifest::<S>))
        .route("/catalog/:type/:id", get(handlers::catalog::<S>))
        .route("/catalog/:type/:id/:extra", get(handlers::catalog_with_extra::<S>))
        .route("/meta/:type/:id", get(handlers::meta::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the add-on until ctrl-c
pub async fn run_server<S: MediaSource + 'static>(
    listener: TcpListener,
    state: AppState<S>,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(
        addr = %addr,
        "Dattebayo add-on running on http://localhost:{}/manifest.json",
        addr.port()
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{media, FakeSource};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(source: FakeSource) -> (Router, Arc<FakeSource>) {
        let source = Arc::new(source);
        let state = AppState::new(Arc::clone(&source), Arc::new(ResponseCache::new()));
        (create_router(state), source)
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_manifest_route() {
        let (router, _) = app(FakeSource::default());

        let (status, body) = get_json(&router, "/manifest.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "org.example.dattebayo");
        assert_eq!(body["catalogs"][1]["id"], "anilist-popular-season");
    }

    #[tokio::test]
    async fn test_root_redirects_to_manifest() {
        let (router, _) = app(FakeSource::default());

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/manifest.json");
    }

    #[tokio::test]
    async fn test_empty_search_catalog() {
        let (router, source) = app(FakeSource::with_media(vec![media(1, "A")]));

        let (status, body) =
            get_json(&router, "/catalog/anime/anilist-search/search=&skip=0.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "metas": [] }));
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_trending_catalog_is_cached() {
        let (router, source) = app(FakeSource::with_media(vec![media(1, "Frieren")]));

        let (_, first) = get_json(&router, "/catalog/anime/anilist-trending.json").await;
        let (_, second) = get_json(&router, "/catalog/anime/anilist-trending.json").await;

        assert_eq!(first, second);
        assert_eq!(
            first["metas"][0],
            json!({
                "id": "anilist:1",
                "type": "anime",
                "name": "Frieren",
                "posterShape": "regular"
            })
        );
        assert_eq!(source.calls(), vec!["trending:1:50"]);
    }

    #[tokio::test]
    async fn test_search_extra_keeps_escaped_ampersand() {
        let (router, source) = app(FakeSource::with_media(Vec::new()));

        let (status, _) = get_json(
            &router,
            "/catalog/anime/anilist-search/search=a%26b&skip=50.json",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(source.calls(), vec!["search:a&b:2:50"]);
    }

    #[tokio::test]
    async fn test_other_content_type_is_empty() {
        let (router, source) = app(FakeSource::with_media(vec![media(1, "A")]));

        let (_, body) = get_json(&router, "/catalog/movie/anilist-trending.json").await;
        assert_eq!(body, json!({ "metas": [] }));

        let (_, body) = get_json(&router, "/meta/movie/anilist:1.json").await;
        assert_eq!(body, json!({ "meta": null }));

        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_meta_not_found() {
        let (router, source) = app(FakeSource::with_detail(None));

        let (status, body) = get_json(&router, "/meta/anime/anilist:12345.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "meta": null }));
        assert_eq!(source.calls(), vec!["media:12345"]);
    }

    #[tokio::test]
    async fn test_meta_found() {
        let mut record = media(9253, "Steins;Gate");
        record.episodes = Some(24);
        let (router, _) = app(FakeSource::with_detail(Some(record)));

        let (status, body) = get_json(&router, "/meta/anime/anilist:9253.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["name"], "Steins;Gate");
        assert_eq!(body["meta"]["videos"].as_array().unwrap().len(), 24);
        assert_eq!(body["meta"]["videos"][23]["id"], "anilist:9253:1:24");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (router, _) = app(FakeSource::failing());

        let (status, body) = get_json(&router, "/catalog/anime/anilist-trending.json").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["err"].as_str().unwrap().contains("upstream unavailable"));
    }
}
