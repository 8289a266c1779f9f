//! AniList GraphQL client.

use super::error::AniListError;
use super::queries::GraphQlQuery;
use super::types::GraphQlResponse;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

/// Public AniList GraphQL endpoint
pub const API_URL: &str = "https://graphql.anilist.co";

const USER_AGENT: &str = concat!("Dattebayo/", env!("CARGO_PKG_VERSION"));

/// Request body for a GraphQL POST
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

/// AniList GraphQL API client.
///
/// Requests are sent once; there is no retry and no request timeout.
#[derive(Debug, Clone)]
pub struct AniListClient {
    http: Client,
    endpoint: String,
}

impl AniListClient {
    /// Create a client for the public AniList endpoint
    pub fn new() -> Result<Self, AniListError> {
        Self::with_endpoint(API_URL)
    }

    /// Create a client for a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, AniListError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a typed query and return its `data` payload
    pub async fn execute<Q: GraphQlQuery>(
        &self,
        variables: &Q::Variables,
    ) -> Result<Q::Data, AniListError> {
        debug!(operation = Q::OPERATION, "AniList GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&GraphQlRequest {
                query: Q::DOCUMENT,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                operation = Q::OPERATION,
                status = %status,
                body = %body,
                "AniList request failed"
            );
            return Err(AniListError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GraphQlResponse<Q::Data> = serde_json::from_str(&body)?;

        match parsed.data {
            Some(data) => Ok(data),
            None if !parsed.errors.is_empty() => {
                let messages: Vec<_> = parsed.errors.into_iter().map(|e| e.message).collect();
                Err(AniListError::GraphQl(messages.join("; ")))
            }
            None => Err(AniListError::MissingData),
        }
    }
}
