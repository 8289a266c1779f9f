//! Upstream media source abstraction.
//!
//! The catalog and meta services only talk to AniList through this trait,
//! so they can be exercised against an in-memory source.

use crate::api::queries::{
    MediaById, MediaByIdVariables, PageVariables, SearchMedia, SearchVariables,
    SeasonPopularMedia, SeasonVariables, TrendingMedia,
};
use crate::api::{AniListClient, AniListError, MediaRecord};
use crate::season::Season;
use std::future::Future;

/// The four fixed upstream queries
pub trait MediaSource: Send + Sync {
    /// Title search, movies excluded
    fn search(
        &self,
        query: &str,
        page: i64,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<MediaRecord>, AniListError>> + Send;

    /// Trending series, movies excluded
    fn trending(
        &self,
        page: i64,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<MediaRecord>, AniListError>> + Send;

    /// Most popular series of a season, movies excluded
    fn popular_in_season(
        &self,
        season: Season,
        year: i32,
        page: i64,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<MediaRecord>, AniListError>> + Send;

    /// Full record for one media id, `None` if AniList has no such media
    fn media_by_id(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<MediaRecord>, AniListError>> + Send;
}

impl MediaSource for AniListClient {
    async fn search(
        &self,
        query: &str,
        page: i64,
        per_page: u32,
    ) -> Result<Vec<MediaRecord>, AniListError> {
        let variables = SearchVariables {
            search: query.to_string(),
            page,
            per_page,
        };
        Ok(self.execute::<SearchMedia>(&variables).await?.into_media())
    }

    async fn trending(&self, page: i64, per_page: u32) -> Result<Vec<MediaRecord>, AniListError> {
        let variables = PageVariables { page, per_page };
        Ok(self.execute::<TrendingMedia>(&variables).await?.into_media())
    }

    async fn popular_in_season(
        &self,
        season: Season,
        year: i32,
        page: i64,
        per_page: u32,
    ) -> Result<Vec<MediaRecord>, AniListError> {
        let variables = SeasonVariables {
            season,
            season_year: year,
            page,
            per_page,
        };
        Ok(self
            .execute::<SeasonPopularMedia>(&variables)
            .await?
            .into_media())
    }

    async fn media_by_id(&self, id: u64) -> Result<Option<MediaRecord>, AniListError> {
        let variables = MediaByIdVariables { id };
        Ok(self.execute::<MediaById>(&variables).await?.media)
    }
}
