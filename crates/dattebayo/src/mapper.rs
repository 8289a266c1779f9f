//! Mapping from AniList media records to add-on metas.
//!
//! Catalog rows use the lite mapping; the meta view uses the full mapping,
//! which also synthesizes a single-season episode list since AniList has no
//! per-episode data.

use crate::api::{MediaRecord, MediaTitle};
use shared::{MetaDetail, MetaPreview, PosterShape, Video, CONTENT_TYPE};

/// Namespace prefix of every item id served by the add-on
pub const ID_PREFIX: &str = "anilist";

/// Title used when AniList has no usable title at all
pub const UNTITLED: &str = "Untitled";

/// Episode count used when AniList has no positive count
pub const FALLBACK_EPISODE_COUNT: u32 = 12;

/// Season number of every synthesized episode
pub const VIDEO_SEASON: u32 = 1;

/// External id for an AniList media id
pub fn item_id(anilist_id: u64) -> String {
    format!("{}:{}", ID_PREFIX, anilist_id)
}

/// Display name: english, then romaji, then native, then "Untitled"
pub fn resolve_title(title: Option<&MediaTitle>) -> String {
    title
        .and_then(MediaTitle::preferred)
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Average score (0-100) as a 0-10 rating with one decimal.
///
/// A zero score is treated as no score.
pub fn normalize_rating(average_score: Option<u32>) -> Option<String> {
    average_score
        .filter(|score| *score > 0)
        .map(|score| format!("{:.1}", f64::from(score) / 10.0))
}

pub fn episode_count(episodes: Option<i64>) -> u32 {
    episodes
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(FALLBACK_EPISODE_COUNT)
}

/// Episodes 1..=count of season 1, titled "S1E{n}"
pub fn synthesize_videos(anilist_id: u64, count: u32) -> Vec<Video> {
    (1..=count)
        .map(|episode| Video {
            id: format!("{}:{}:{}", item_id(anilist_id), VIDEO_SEASON, episode),
            season: VIDEO_SEASON,
            episode,
            title: format!("S{}E{}", VIDEO_SEASON, episode),
        })
        .collect()
}

/// Lite mapping for catalog rows
pub fn to_preview(media: MediaRecord) -> MetaPreview {
    MetaPreview {
        id: item_id(media.id),
        content_type: CONTENT_TYPE.to_string(),
        name: resolve_title(media.title.as_ref()),
        poster: media.cover_image.and_then(|cover| cover.large),
        poster_shape: PosterShape::Regular,
        year: media.season_year,
    }
}

/// Full mapping for the meta view
pub fn to_detail(media: MediaRecord) -> MetaDetail {
    let count = episode_count(media.episodes);
    let poster = media
        .cover_image
        .and_then(|cover| cover.extra_large.or(cover.large));

    MetaDetail {
        id: item_id(media.id),
        content_type: CONTENT_TYPE.to_string(),
        name: resolve_title(media.title.as_ref()),
        description: media.description,
        poster,
        background: media.banner_image,
        genres: media.genres,
        imdb_rating: normalize_rating(media.average_score),
        year: media.season_year,
        website: media.site_url,
        videos: synthesize_videos(media.id, count),
    }
}
