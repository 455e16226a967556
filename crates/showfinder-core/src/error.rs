//! Error types for showfinder
//!
//! Provides the error enum shared by the API client and the interaction
//! controller, with human-readable messages and webview-compatible
//! serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all showfinder operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ShowFinderError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Markup template failed to render
    #[error("Failed to render markup: {0}")]
    Render(#[from] askama::Error),

    /// Clicked card has no resolvable show id
    #[error("No show card at position {0}")]
    CardNotFound(usize),
}

impl ShowFinderError {
    /// True for transport failures and non-success statuses
    pub fn is_network(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::Status { .. })
    }
}

impl From<serde_json::Error> for ShowFinderError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl Serialize for ShowFinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showfinder operations
pub type Result<T> = std::result::Result<T, ShowFinderError>;
