//! Show card lookup in rendered markup
//!
//! Recovers a show id from the shows container by walking from a clicked
//! "Episodes" button up to its enclosing `.Show` card.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ShowFinderError};

/// Class of the per-card "Episodes" button
pub const EPISODES_BUTTON_CLASS: &str = "Show-getEpisodes";

/// Class of a show card
pub const CARD_CLASS: &str = "Show";

/// Reads the show id for the `card`-th "Episodes" button in `markup`
///
/// # Arguments
/// * `markup` - Current contents of the shows container
/// * `card` - Zero-based position of the clicked button
///
/// # Returns
/// `Some(id)` if the button exists and its closest `.Show` ancestor carries
/// a numeric `data-show-id`, `None` otherwise
///
/// # Errors
/// Returns `ParseError` if the button selector cannot be built
pub fn find_show_id(markup: &str, card: usize) -> Result<Option<u64>> {
    let fragment = Html::parse_fragment(markup);
    let button_selector = Selector::parse(&format!("button.{}", EPISODES_BUTTON_CLASS))
        .map_err(|e| ShowFinderError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let Some(button) = fragment.select(&button_selector).nth(card) else {
        return Ok(None);
    };

    Ok(closest_card(&button)
        .and_then(|el| el.value().attr("data-show-id"))
        .and_then(|id| id.trim().parse().ok()))
}

/// Nearest ancestor element carrying the card class
fn closest_card<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().classes().any(|c| c == CARD_CLASS))
}
