use thiserror::Error;

/// Errors from the AniList GraphQL API.
#[derive(Debug, Error)]
pub enum AniListError {
    #[error("AniList {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode AniList response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("AniList GraphQL error: {0}")]
    GraphQl(String),

    #[error("AniList response had no data")]
    MissingData,
}

impl AniListError {
    /// Upstream HTTP status, when the failure came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            AniListError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
