use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{MovieDetail, MovieSummary, ResponseStatus, SearchEnvelope};

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Shown when a failed search carries no `Error` message of its own.
const SEARCH_FALLBACK_ERROR: &str = "No movies found!";
/// Shown when a failed lookup carries no `Error` message of its own.
const LOOKUP_FALLBACK_ERROR: &str = "Movie not found!";

/// Errors that can occur while talking to the catalog API.
///
/// All variants reduce to a single displayable message at the reducer
/// boundary via `Display`. `NotFound` prints the API's message verbatim,
/// since that text is shown to the user as-is.
#[derive(Debug)]
pub enum CatalogError {
    /// The API reported a logical failure (`Response: "False"`).
    NotFound(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The response body was not JSON, or not the expected shape.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(msg) => write!(f, "{msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The seam between the UI and the concrete catalog backend. Tests drive the
/// app through a stub implementation instead of the network.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Searches the catalog by title and returns the matching summaries.
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Fetches the full record for one identifier.
    async fn movie_by_id(&self, id: &str) -> Result<MovieDetail, CatalogError>;
}

/// OMDb API client.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Creates a new OMDb client.
    ///
    /// # Arguments
    /// * `api_key` - OMDb API key. An empty key is sent as-is; the remote
    ///   API rejects it, which is where a missing key surfaces.
    /// * `base_url` - Optional custom base URL (defaults to OMDb's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Issues one GET against the base URL and returns the raw body.
    ///
    /// The HTTP status is logged but not consulted: OMDb reports failures
    /// inside the JSON payload, and a non-JSON body surfaces as a parse
    /// error at the call site.
    async fn fetch_body(&self, params: &[(&str, &str)]) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("OMDb response status: {}", response.status());

        response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))
    }
}

#[async_trait]
impl MovieProvider for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        info!("OMDb title search: {}", term);

        let body = self.fetch_body(&[("s", term)]).await?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if envelope.is_failure() {
            let message = envelope
                .error
                .unwrap_or_else(|| SEARCH_FALLBACK_ERROR.to_string());
            warn!("OMDb search failed: {}", message);
            return Err(CatalogError::NotFound(message));
        }

        debug!("OMDb search returned {} result(s)", envelope.search.len());
        Ok(envelope.search)
    }

    async fn movie_by_id(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        info!("OMDb lookup: {}", id);

        let body = self.fetch_body(&[("i", id)]).await?;
        let status: ResponseStatus =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if status.is_failure() {
            let message = status
                .error
                .unwrap_or_else(|| LOOKUP_FALLBACK_ERROR.to_string());
            warn!("OMDb lookup failed: {}", message);
            return Err(CatalogError::NotFound(message));
        }

        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
