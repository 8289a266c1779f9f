//! Catalog request handling.
//!
//! Maps a catalog id plus its extras (search text, skip offset) onto one of
//! the upstream list queries, caching the mapped rows per catalog and page.

use crate::api::{AniListError, MediaRecord};
use crate::cache::ResponseCache;
use crate::mapper;
use crate::paging::{page_from_skip, parse_skip, PER_PAGE};
use crate::season::current_season_year;
use crate::source::MediaSource;
use chrono::{DateTime, Utc};
use shared::MetaPreview;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Catalog kinds exposed by the add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Trending,
    PopularSeason,
    Search,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Trending,
        CatalogKind::PopularSeason,
        CatalogKind::Search,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Catalog id as declared in the manifest
    pub fn id(&self) -> &'static str {
        match self {
            CatalogKind::Trending => "anilist-trending",
            CatalogKind::PopularSeason => "anilist-popular-season",
            CatalogKind::Search => "anilist-search",
        }
    }

    /// Display name as declared in the manifest
    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::Trending => "Trending Now (AniList)",
            CatalogKind::PopularSeason => "Popular This Season (AniList)",
            CatalogKind::Search => "Search AniList",
        }
    }

    /// How long a fetched page stays cached
    pub fn ttl(&self) -> Duration {
        match self {
            CatalogKind::Trending | CatalogKind::PopularSeason => Duration::from_secs(60),
            CatalogKind::Search => Duration::from_secs(30),
        }
    }
}

/// Extra arguments of a catalog request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogExtra {
    pub search: Option<String>,
    pub search_text: Option<String>,
    pub skip: Option<String>,
}

impl CatalogExtra {
    /// Parse a URL-encoded extra string such as `search=naruto&skip=50`.
    ///
    /// Unknown keys are ignored.
    pub fn from_encoded(encoded: &str) -> Self {
        let mut extra = Self::default();

        for (key, value) in url::form_urlencoded::parse(encoded.as_bytes()) {
            let slot = match &*key {
                "search" => &mut extra.search,
                "searchText" => &mut extra.search_text,
                "skip" => &mut extra.skip,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }

        extra
    }

    /// Trimmed search text, preferring `search` over `searchText`
    pub fn search_query(&self) -> &str {
        [&self.search, &self.search_text]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .trim()
    }

    pub fn skip(&self) -> Option<f64> {
        parse_skip(self.skip.as_deref())
    }
}

/// Serves catalog pages, consulting the response cache first
pub struct CatalogService<S> {
    source: Arc<S>,
    cache: Arc<ResponseCache>,
}

impl<S: MediaSource> CatalogService<S> {
    pub fn new(source: Arc<S>, cache: Arc<ResponseCache>) -> Self {
        Self { source, cache }
    }

    /// Rows for a catalog request, with the season evaluated now
    pub async fn catalog(
        &self,
        catalog_id: &str,
        extra: &CatalogExtra,
    ) -> Result<Vec<MetaPreview>, AniListError> {
        self.catalog_at(catalog_id, extra, Utc::now()).await
    }

    /// Rows for a catalog request, with the season evaluated at `now`.
    ///
    /// Unknown catalogs and blank searches yield no rows without touching
    /// the cache or AniList.
    pub async fn catalog_at(
        &self,
        catalog_id: &str,
        extra: &CatalogExtra,
        now: DateTime<Utc>,
    ) -> Result<Vec<MetaPreview>, AniListError> {
        let Some(kind) = CatalogKind::from_id(catalog_id) else {
            debug!(catalog_id = catalog_id, "Unknown catalog");
            return Ok(Vec::new());
        };

        let page = page_from_skip(extra.skip(), PER_PAGE);

        match kind {
            CatalogKind::Trending => {
                let key = format!("trending:{}", page);
                self.fetch_cached(key, kind.ttl(), || self.source.trending(page, PER_PAGE))
                    .await
            }
            CatalogKind::PopularSeason => {
                let (season, year) = current_season_year(now);
                let key = format!("popularSeason:{}-{}:page={}", season, year, page);
                self.fetch_cached(key, kind.ttl(), || {
                    self.source.popular_in_season(season, year, page, PER_PAGE)
                })
                .await
            }
            CatalogKind::Search => {
                let query = extra.search_query();
                if query.is_empty() {
                    debug!("Empty search query");
                    return Ok(Vec::new());
                }

                let key = format!("search:{}:page={}", query, page);
                self.fetch_cached(key, kind.ttl(), || self.source.search(query, page, PER_PAGE))
                    .await
            }
        }
    }

    async fn fetch_cached<F, Fut>(
        &self,
        key: String,
        ttl: Duration,
        fetch: F,
    ) -> Result<Vec<MetaPreview>, AniListError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<MediaRecord>, AniListError>>,
    {
        if let Some(cached) = self.cache.catalogs.get(&key) {
            return Ok(cached);
        }

        let metas: Vec<MetaPreview> = fetch().await?.into_iter().map(mapper::to_preview).collect();

        info!(key = %key, count = metas.len(), "Fetched catalog page");
        self.cache.catalogs.set(key, metas.clone(), ttl);

        Ok(metas)
    }
}
