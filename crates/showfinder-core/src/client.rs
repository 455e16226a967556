//! HTTP client for the TVMaze API
//!
//! Issues the two read-only requests the front-end needs and normalizes
//! their JSON bodies. No retries, no caching: every call hits the network.

use std::time::Duration;

use crate::error::{Result, ShowFinderError};
use crate::parser::{parse_episode_list, parse_show_search};
use crate::types::{Episode, Show};
use crate::url::{BASE_URL, build_episodes_url, build_search_url};

const USER_AGENT: &str = concat!("showfinder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: "https://api.tvmaze.com/")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// TVMaze API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(ShowFinderError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search shows matching a free-text term
    ///
    /// The term is sent as-is, including the empty string.
    ///
    /// # Returns
    /// Shows in upstream order; a show without an image gets the
    /// placeholder poster
    ///
    /// # Errors
    /// - `HttpError` / `Status` if the request fails
    /// - `ParseError` if the body is not a list of search hits
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showfinder_core::Result<()> {
    /// use showfinder_core::TvMazeClient;
    /// let client = TvMazeClient::new()?;
    /// for show in client.search_shows("batman").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let url = build_search_url(&self.base_url, term);
        let body = self.fetch(&url).await?;
        let shows = parse_show_search(&body)?;
        tracing::debug!(term, count = shows.len(), "Show search finished");
        Ok(shows)
    }

    /// List the episodes of a show
    ///
    /// # Errors
    /// - `HttpError` / `Status` if the request fails (e.g. unknown id → 404)
    /// - `ParseError` if the body is not a list of episodes
    pub async fn get_episodes(&self, show_id: u64) -> Result<Vec<Episode>> {
        let url = build_episodes_url(&self.base_url, show_id);
        let body = self.fetch(&url).await?;
        let episodes = parse_episode_list(&body)?;
        tracing::debug!(show_id, count = episodes.len(), "Episode list fetched");
        Ok(episodes)
    }

    /// Perform a single GET and return the body on a success status
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ShowFinderError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShowFinderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(ShowFinderError::HttpError)
    }
}
