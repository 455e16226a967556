//! Page surface the front-end renders into
//!
//! A [`Surface`] stands in for the four DOM nodes the front-end touches: the
//! search input, the shows list, the episodes area and the episodes list.
//! Renderers only ever replace a list wholesale or toggle the episodes area.

use serde::{Deserialize, Serialize};

/// Handle on the page's containers and controls
pub trait Surface {
    /// Current value of the search input (`#searchForm-term`)
    fn search_term(&self) -> String;

    /// Replace every child of the shows list with `cards`
    fn replace_shows(&mut self, cards: Vec<String>);

    /// Current contents of the shows list as markup
    fn shows_markup(&self) -> String;

    /// Replace every child of the episodes list with `items`
    fn replace_episodes(&mut self, items: Vec<String>);

    /// Show or hide the episodes area
    fn set_episodes_visible(&mut self, visible: bool);

    /// Whether the episodes area is currently shown
    fn episodes_visible(&self) -> bool;
}

/// In-memory page, used by tests and by the webview bridge
///
/// Starts with an empty search term, empty lists and a hidden episodes area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPage {
    search_term: String,
    shows: Vec<String>,
    episodes: Vec<String>,
    episodes_visible: bool,
}

impl MemoryPage {
    /// Blank page with the episodes area hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into the search input
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Card markup currently in the shows list
    pub fn show_cards(&self) -> &[String] {
        &self.shows
    }

    /// Item markup currently in the episodes list
    pub fn episode_items(&self) -> &[String] {
        &self.episodes
    }

    /// Current contents of the episodes list as markup
    pub fn episodes_markup(&self) -> String {
        self.episodes.concat()
    }

    /// Serializable copy of what the page shows right now
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            shows_html: self.shows_markup(),
            episodes_html: self.episodes_markup(),
            episodes_visible: self.episodes_visible,
        }
    }
}

impl Surface for MemoryPage {
    fn search_term(&self) -> String {
        self.search_term.clone()
    }

    fn replace_shows(&mut self, cards: Vec<String>) {
        self.shows = cards;
    }

    fn shows_markup(&self) -> String {
        self.shows.concat()
    }

    fn replace_episodes(&mut self, items: Vec<String>) {
        self.episodes = items;
    }

    fn set_episodes_visible(&mut self, visible: bool) {
        self.episodes_visible = visible;
    }

    fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }
}

/// Page state handed to a webview for painting
///
/// The webview sets `#showsList` and `#episodesList` innerHTML from the two
/// markup fields and toggles `#episodesArea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub shows_html: String,
    pub episodes_html: String,
    pub episodes_visible: bool,
}
