//! In-memory media source for tests.

use crate::api::{AniListError, MediaRecord, MediaTitle};
use crate::season::Season;
use crate::source::MediaSource;
use std::sync::Mutex;

/// Canned media source that records every upstream call
#[derive(Debug, Default)]
pub struct FakeSource {
    /// Returned by every list query
    pub media: Vec<MediaRecord>,
    /// Returned by `media_by_id`
    pub detail: Option<MediaRecord>,
    /// Fail every call with a 500 status
    pub fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_media(media: Vec<MediaRecord>) -> Self {
        Self {
            media,
            ..Default::default()
        }
    }

    pub fn with_detail(detail: Option<MediaRecord>) -> Self {
        Self {
            detail,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Calls made so far, e.g. `trending:1:50`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) -> Result<(), AniListError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(AniListError::Status {
                status: 500,
                body: "upstream unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl MediaSource for FakeSource {
    async fn search(
        &self,
        query: &str,
        page: i64,
        per_page: u32,
    ) -> Result<Vec<MediaRecord>, AniListError> {
        self.record(format!("search:{query}:{page}:{per_page}"))?;
        Ok(self.media.clone())
    }

    async fn trending(&self, page: i64, per_page: u32) -> Result<Vec<MediaRecord>, AniListError> {
        self.record(format!("trending:{page}:{per_page}"))?;
        Ok(self.media.clone())
    }

    async fn popular_in_season(
        &self,
        season: Season,
        year: i32,
        page: i64,
        per_page: u32,
    ) -> Result<Vec<MediaRecord>, AniListError> {
        self.record(format!("popular:{season}:{year}:{page}:{per_page}"))?;
        Ok(self.media.clone())
    }

    async fn media_by_id(&self, id: u64) -> Result<Option<MediaRecord>, AniListError> {
        self.record(format!("media:{id}"))?;
        Ok(self.detail.clone())
    }
}

/// Minimal record with a romaji title
pub fn media(id: u64, romaji: &str) -> MediaRecord {
    MediaRecord {
        id,
        title: Some(MediaTitle {
            romaji: Some(romaji.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}
