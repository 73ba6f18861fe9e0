use serde::Deserialize;

/// OMDb's convention for "field not available".
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Substituted wherever a poster field carries the `"N/A"` sentinel.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/200x300?text=No+Image";

/// Abbreviated movie record returned by a title search.
///
/// Field names on the wire are OMDb's PascalCase names; `imdbID` is the
/// primary key throughout the app.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

/// Full movie record returned by an identifier lookup.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub genre: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub plot: String,
    pub poster: String,
}

impl From<&MovieDetail> for MovieSummary {
    /// Collapses a detail record to its summary shape, so favorites hold a
    /// single uniform record type no matter which panel they were added from.
    fn from(detail: &MovieDetail) -> Self {
        MovieSummary {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster: detail.poster.clone(),
        }
    }
}

/// Returns the poster URL for display, substituting the placeholder for the
/// `"N/A"` sentinel. Any other value passes through unchanged.
pub fn poster_or_placeholder(poster: &str) -> &str {
    if poster == POSTER_UNAVAILABLE {
        PLACEHOLDER_POSTER_URL
    } else {
        poster
    }
}

/// Envelope of a search response.
#[derive(Deserialize, Debug)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchEnvelope {
    pub fn is_failure(&self) -> bool {
        self.response == "False"
    }
}

/// Status fields of a lookup response. The detail fields sit at the top
/// level of the same object and are parsed separately on success.
#[derive(Deserialize, Debug)]
pub(crate) struct ResponseStatus {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl ResponseStatus {
    pub fn is_failure(&self) -> bool {
        self.response == "False"
    }
}
