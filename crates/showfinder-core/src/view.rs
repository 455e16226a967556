//! Markup rendering for show cards and episode lists
//!
//! Renderers build markup from normalized records through askama templates
//! and push it into a [`Surface`], always replacing the target list entirely.
//! Template values are HTML-escaped unless marked `|safe`.

use askama::Template;

use crate::error::Result;
use crate::parser::card::{CARD_CLASS, EPISODES_BUTTON_CLASS};
use crate::surface::Surface;
use crate::types::{Episode, Show};

/// How a show summary is written into its card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryMode {
    /// Upstream markup injected verbatim
    #[default]
    Trusted,
    /// Markup reduced to text, then escaped
    PlainText,
}

#[derive(Template)]
#[template(path = "show_card.html")]
struct ShowCardTemplate<'a> {
    id: u64,
    name: &'a str,
    image: &'a str,
    summary: &'a str,
    trusted: bool,
    card_class: &'a str,
    button_class: &'a str,
}

#[derive(Template)]
#[template(source = "<li>{{ label }}</li>", ext = "html")]
struct EpisodeItemTemplate {
    label: String,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
}

/// Replace the shows list with one card per show, in order
///
/// # Errors
/// Returns `Render` if a card template fails; the list is left untouched
pub fn render_shows<S: Surface + ?Sized>(
    surface: &mut S,
    shows: &[Show],
    mode: SummaryMode,
) -> Result<()> {
    let cards = shows
        .iter()
        .map(|show| show_card(show, mode))
        .collect::<Result<Vec<_>>>()?;
    surface.replace_shows(cards);
    tracing::info!(count = shows.len(), "Rendered shows");
    Ok(())
}

/// Replace the episodes list and reveal the episodes area
///
/// The area is revealed even when `episodes` is empty.
///
/// # Errors
/// Returns `Render` if an item template fails; the surface is left untouched
pub fn render_episodes<S: Surface + ?Sized>(surface: &mut S, episodes: &[Episode]) -> Result<()> {
    let items = episodes
        .iter()
        .map(episode_item)
        .collect::<Result<Vec<_>>>()?;
    surface.replace_episodes(items);
    surface.set_episodes_visible(true);
    tracing::info!(count = episodes.len(), "Rendered episodes");
    Ok(())
}

/// Markup for a single show card
///
/// The card root carries `data-show-id` so the id can be read back at click
/// time.
pub fn show_card(show: &Show, mode: SummaryMode) -> Result<String> {
    let plain;
    let summary = match mode {
        SummaryMode::Trusted => show.summary.as_str(),
        SummaryMode::PlainText => {
            plain = nanohtml2text::html2text(&show.summary);
            plain.trim()
        }
    };

    let card = ShowCardTemplate {
        id: show.id,
        name: &show.name,
        image: &show.image,
        summary,
        trusted: mode == SummaryMode::Trusted,
        card_class: CARD_CLASS,
        button_class: EPISODES_BUTTON_CLASS,
    };
    Ok(card.render()?)
}

/// Markup for a single episode list item
pub fn episode_item(episode: &Episode) -> Result<String> {
    let item = EpisodeItemTemplate {
        label: episode.label(),
    };
    Ok(item.render()?)
}

/// Static document skeleton carrying the containers the front-end uses
pub fn render_page_shell() -> Result<String> {
    Ok(PageTemplate {
        title: "TV Show Search",
    }
    .render()?)
}
