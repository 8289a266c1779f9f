//! Typed GraphQL query contracts.
//!
//! Each query pairs a fixed document with the variables it accepts and the
//! `data` shape it returns, so a query can only be executed with matching
//! variables and decoded into the matching response type.

use super::types::{MediaData, PageData};
use crate::season::Season;
use serde::{de::DeserializeOwned, Serialize};

/// A fixed GraphQL operation
pub trait GraphQlQuery {
    /// Operation name, used for logging
    const OPERATION: &'static str;

    /// GraphQL document sent as `query`
    const DOCUMENT: &'static str;

    /// Variables sent as `variables`
    type Variables: Serialize + Send + Sync;

    /// Shape of the response `data` field
    type Data: DeserializeOwned;
}

/// Title search, movies excluded, upstream default ordering
pub struct SearchMedia;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables {
    pub search: String,
    pub page: i64,
    pub per_page: u32,
}

impl GraphQlQuery for SearchMedia {
    const OPERATION: &'static str = "search";
    const DOCUMENT: &'static str = r#"
query ($search: String!, $perPage: Int, $page: Int) {
    Page(page: $page, perPage: $perPage) {
        media(search: $search, type: ANIME, format_not_in: [MOVIE]) {
            id
            title { romaji english native }
            format
            seasonYear
            episodes
            coverImage { large }
            siteUrl
        }
    }
}
"#;

    type Variables = SearchVariables;
    type Data = PageData;
}

/// Trending series, movies excluded
pub struct TrendingMedia;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVariables {
    pub page: i64,
    pub per_page: u32,
}

impl GraphQlQuery for TrendingMedia {
    const OPERATION: &'static str = "trending";
    const DOCUMENT: &'static str = r#"
query ($page: Int, $perPage: Int) {
    Page(page: $page, perPage: $perPage) {
        media(type: ANIME, sort: TRENDING_DESC, format_not_in: [MOVIE]) {
            id
            title { romaji english native }
            format
            seasonYear
            episodes
            coverImage { large }
            siteUrl
        }
    }
}
"#;

    type Variables = PageVariables;
    type Data = PageData;
}

/// Most popular series of one broadcast season, movies excluded
pub struct SeasonPopularMedia;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonVariables {
    pub season: Season,
    pub season_year: i32,
    pub page: i64,
    pub per_page: u32,
}

impl GraphQlQuery for SeasonPopularMedia {
    const OPERATION: &'static str = "popularSeason";
    const DOCUMENT: &'static str = r#"
query ($page: Int, $perPage: Int, $season: MediaSeason!, $seasonYear: Int!) {
    Page(page: $page, perPage: $perPage) {
        media(
            type: ANIME
            season: $season
            seasonYear: $seasonYear
            sort: POPULARITY_DESC
            format_not_in: [MOVIE]
        ) {
            id
            title { romaji english native }
            format
            seasonYear
            episodes
            coverImage { large }
            siteUrl
        }
    }
}
"#;

    type Variables = SeasonVariables;
    type Data = PageData;
}

/// Full record for a single media id
pub struct MediaById;

#[derive(Debug, Clone, Serialize)]
pub struct MediaByIdVariables {
    pub id: u64,
}

impl GraphQlQuery for MediaById {
    const OPERATION: &'static str = "mediaById";
    const DOCUMENT: &'static str = r#"
query ($id: Int!) {
    Media(id: $id) {
        id
        type
        title { romaji english native }
        description(asHtml: false)
        format
        status
        season
        seasonYear
        episodes
        duration
        genres
        averageScore
        coverImage { large extraLarge }
        bannerImage
        siteUrl
    }
}
"#;

    type Variables = MediaByIdVariables;
    type Data = MediaData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_season_variables_wire_format() {
        let vars = SeasonVariables {
            season: Season::Summer,
            season_year: 2024,
            page: 2,
            per_page: 50,
        };

        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({ "season": "SUMMER", "seasonYear": 2024, "page": 2, "perPage": 50 })
        );
    }

    #[test]
    fn test_search_variables_wire_format() {
        let vars = SearchVariables {
            search: "frieren".to_string(),
            page: 1,
            per_page: 50,
        };

        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({ "search": "frieren", "page": 1, "perPage": 50 })
        );
    }

    #[test]
    fn test_list_queries_exclude_movies() {
        for document in [
            SearchMedia::DOCUMENT,
            TrendingMedia::DOCUMENT,
            SeasonPopularMedia::DOCUMENT,
        ] {
            assert!(document.contains("format_not_in: [MOVIE]"));
        }

        assert!(TrendingMedia::DOCUMENT.contains("TRENDING_DESC"));
        assert!(SeasonPopularMedia::DOCUMENT.contains("POPULARITY_DESC"));
        assert!(MediaById::DOCUMENT.contains("extraLarge"));
    }
}
