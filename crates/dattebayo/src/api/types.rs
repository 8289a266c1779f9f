//! AniList GraphQL response types.
//!
//! These types represent the JSON documents returned by the AniList API.
//! Every media field is optional because AniList returns `null` freely.

use serde::Deserialize;

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

/// One entry of the GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

/// `data` of a paginated media query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: Option<MediaPage>,
}

impl PageData {
    /// Media list of the page; a missing page or list is empty
    pub fn into_media(self) -> Vec<MediaRecord> {
        self.page.and_then(|page| page.media).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPage {
    pub media: Option<Vec<MediaRecord>>,
}

/// `data` of a single media lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<MediaRecord>,
}

/// Upstream media record
///
/// Only the fields the add-on maps are decoded. The query documents also
/// select `format`, `type`, `status`, `season` and `duration`; serde skips them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: u64,
    pub title: Option<MediaTitle>,
    pub season_year: Option<i32>,
    pub episodes: Option<i64>,
    pub cover_image: Option<CoverImage>,
    pub site_url: Option<String>,

    // Detail-only fields
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub average_score: Option<u32>,
    pub banner_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl MediaTitle {
    /// English, then romaji, then native; blank titles are skipped
    pub fn preferred(&self) -> Option<&str> {
        [&self.english, &self.romaji, &self.native]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_response() {
        let body = r#"{
            "data": {
                "Page": {
                    "media": [{
                        "id": 21,
                        "title": { "romaji": "One Piece", "english": "ONE PIECE", "native": null },
                        "format": "TV",
                        "seasonYear": 1999,
                        "episodes": null,
                        "coverImage": { "large": "https://img/21.jpg" },
                        "siteUrl": "https://anilist.co/anime/21"
                    }]
                }
            }
        }"#;

        let response: GraphQlResponse<PageData> = serde_json::from_str(body).unwrap();
        assert!(response.errors.is_empty());

        let media = response.data.unwrap().into_media();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].id, 21);
        assert_eq!(media[0].season_year, Some(1999));
        assert_eq!(media[0].episodes, None);
        assert_eq!(media[0].average_score, None);
        assert_eq!(
            media[0].cover_image.as_ref().and_then(|c| c.large.as_deref()),
            Some("https://img/21.jpg")
        );
    }

    #[test]
    fn test_null_page_is_empty() {
        let response: GraphQlResponse<PageData> =
            serde_json::from_str(r#"{"data":{"Page":null}}"#).unwrap();
        assert!(response.data.unwrap().into_media().is_empty());

        let response: GraphQlResponse<PageData> =
            serde_json::from_str(r#"{"data":{"Page":{"media":null}}}"#).unwrap();
        assert!(response.data.unwrap().into_media().is_empty());
    }

    #[test]
    fn test_parse_null_media() {
        let body = r#"{
            "data": { "Media": null },
            "errors": [{ "message": "Not Found.", "status": 404 }]
        }"#;

        let response: GraphQlResponse<MediaData> = serde_json::from_str(body).unwrap();
        assert!(response.data.unwrap().media.is_none());
        assert_eq!(response.errors[0].status, Some(404));
    }

    #[test]
    fn test_parse_detail_fields() {
        let body = r#"{
            "id": 1,
            "type": "ANIME",
            "title": { "romaji": "Cowboy Bebop", "english": "Cowboy Bebop", "native": "カウボーイビバップ" },
            "description": "Space bounty hunters.",
            "format": "TV",
            "status": "FINISHED",
            "season": "SPRING",
            "seasonYear": 1998,
            "episodes": 26,
            "duration": 24,
            "genres": ["Action", "Sci-Fi"],
            "averageScore": 86,
            "coverImage": { "large": "https://img/l.jpg", "extraLarge": "https://img/xl.jpg" },
            "bannerImage": "https://img/banner.jpg",
            "siteUrl": "https://anilist.co/anime/1"
        }"#;

        let media: MediaRecord = serde_json::from_str(body).unwrap();
        assert_eq!(media.description.as_deref(), Some("Space bounty hunters."));
        assert_eq!(media.banner_image.as_deref(), Some("https://img/banner.jpg"));
        assert_eq!(media.average_score, Some(86));
        assert_eq!(media.episodes, Some(26));
        assert_eq!(media.genres.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            media.cover_image.unwrap().extra_large.as_deref(),
            Some("https://img/xl.jpg")
        );
    }

    #[test]
    fn test_preferred_title() {
        let title = MediaTitle {
            romaji: Some("Shingeki no Kyojin".to_string()),
            english: Some(String::new()),
            native: None,
        };
        assert_eq!(title.preferred(), Some("Shingeki no Kyojin"));

        assert_eq!(MediaTitle::default().preferred(), None);
    }
}
