//! Core data types for showfinder
//!
//! Contains the normalized records rendered into the page.

use serde::{Deserialize, Serialize};

/// Placeholder poster used when the upstream show has no image
pub const DEFAULT_IMAGE: &str = "https://tinyurl.com/tv-missing";

/// A TV show reduced to what the result cards display
///
/// All fields implement Serialize and Deserialize for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Upstream show id, written into the card as `data-show-id`
    pub id: u64,

    /// Show title
    pub name: String,

    /// Summary as upstream markup (e.g., "<p><b>Batman</b> ...</p>")
    pub summary: String,

    /// Medium-size poster URL, or [`DEFAULT_IMAGE`]; never empty
    pub image: String,
}

/// A single episode as listed for a show
///
/// `name` and `number` are passed through from upstream, where either may be
/// `null` (untitled episodes, specials).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: Option<String>,
    pub season: u32,
    pub number: Option<u32>,
}

impl Episode {
    /// Text of the episode's list item, e.g. "Pilot (Season: 1, Number: 1)"
    ///
    /// Missing values print as `null`.
    pub fn label(&self) -> String {
        format!(
            "{} (Season: {}, Number: {})",
            self.name.as_deref().unwrap_or("null"),
            self.season,
            self.number.map_or_else(|| "null".to_string(), |n| n.to_string()),
        )
    }
}
