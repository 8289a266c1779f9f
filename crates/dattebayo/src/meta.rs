//! Meta (detail view) request handling.

use crate::api::AniListError;
use crate::cache::ResponseCache;
use crate::mapper::{self, ID_PREFIX};
use crate::source::MediaSource;
use shared::MetaDetail;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How long a fetched detail record stays cached
pub const META_TTL: Duration = Duration::from_secs(60);

/// AniList id from an item id such as `anilist:21`.
///
/// Episode ids (`anilist:21:1:3`) resolve to their series.
pub fn parse_item_id(id: &str) -> Option<u64> {
    let rest = id.strip_prefix(ID_PREFIX)?.strip_prefix(':')?;
    rest.split(':').next()?.parse().ok()
}

/// Serves detail records, consulting the response cache first
pub struct MetaService<S> {
    source: Arc<S>,
    cache: Arc<ResponseCache>,
}

impl<S: MediaSource> MetaService<S> {
    pub fn new(source: Arc<S>, cache: Arc<ResponseCache>) -> Self {
        Self { source, cache }
    }

    /// Detail record for an item id, `None` for foreign or unknown ids
    pub async fn meta(&self, id: &str) -> Result<Option<MetaDetail>, AniListError> {
        let Some(anilist_id) = parse_item_id(id) else {
            debug!(id = id, "Not an AniList item id");
            return Ok(None);
        };

        let key = format!("meta:{}", anilist_id);
        if let Some(cached) = self.cache.metas.get(&key) {
            return Ok(Some(cached));
        }

        let Some(media) = self.source.media_by_id(anilist_id).await? else {
            info!(anilist_id = anilist_id, "AniList has no such media");
            return Ok(None);
        };

        let meta = mapper::to_detail(media);
        info!(anilist_id = anilist_id, videos = meta.videos.len(), "Fetched meta");
        self.cache.metas.set(key, meta.clone(), META_TTL);

        Ok(Some(meta))
    }
}
