//! Interaction controller
//!
//! Binds the two user triggers of the page to the API client and the
//! renderers:
//! - search submit: fetch shows for the typed term, hide the episodes area,
//!   render the cards
//! - "Episodes" click (delegated from the shows list): resolve the card's
//!   show id, fetch its episodes, render them
//!
//! Triggers are independent. Nothing serializes or cancels them, so when
//! several are in flight the surface shows whichever finished last.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::client::TvMazeClient;
use crate::error::{Result, ShowFinderError};
use crate::parser::card::{EPISODES_BUTTON_CLASS, find_show_id};
use crate::surface::Surface;
use crate::types::Show;
use crate::view::{SummaryMode, render_episodes, render_shows};

/// What a handler does with a failed fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error to the caller; nothing is rendered
    #[default]
    Propagate,
    /// Log the error and report [`Handled::Failed`]; nothing is rendered
    Log,
}

/// Configuration for the controller
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    pub summary_mode: SummaryMode,
    pub error_policy: ErrorPolicy,
}

/// Outcome of dispatching an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Fetch succeeded and the surface was updated
    Rendered,
    /// Event did not match the handler's filter
    Ignored,
    /// Fetch failed and was logged (only under [`ErrorPolicy::Log`])
    Failed,
}

/// Submission of the search form
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the browser's page navigation for this submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Click inside the shows list
///
/// `card` is the zero-based position of the card containing the clicked
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target_classes: Vec<String>,
    card: usize,
}

impl ClickEvent {
    /// Click on an element with the given classes
    pub fn new<I, C>(classes: I, card: usize) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            target_classes: classes.into_iter().map(Into::into).collect(),
            card,
        }
    }

    /// Click on the "Episodes" button of a card
    pub fn episodes_button(card: usize) -> Self {
        Self::new(
            ["btn", "btn-outline-light", "btn-sm", EPISODES_BUTTON_CLASS],
            card,
        )
    }

    /// Whether the clicked element carries `class`
    pub fn targets(&self, class: &str) -> bool {
        self.target_classes.iter().any(|c| c == class)
    }

    pub fn card(&self) -> usize {
        self.card
    }
}

/// Wires page events to fetches and renders
///
/// The surface sits behind an async mutex that is held only while reading
/// or writing it, never across a request.
pub struct Controller<S> {
    client: TvMazeClient,
    surface: Arc<Mutex<S>>,
    cards: Arc<RwLock<Vec<Show>>>,
    config: ControllerConfig,
}

impl<S> Clone for Controller<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            surface: Arc::clone(&self.surface),
            cards: Arc::clone(&self.cards),
            config: self.config,
        }
    }
}

impl<S: Surface + Send> Controller<S> {
    /// Create a controller with default configuration
    pub fn new(client: TvMazeClient, surface: S) -> Self {
        Self::with_config(client, surface, ControllerConfig::default())
    }

    pub fn with_config(client: TvMazeClient, surface: S, config: ControllerConfig) -> Self {
        Self {
            client,
            surface: Arc::new(Mutex::new(surface)),
            cards: Arc::new(RwLock::new(Vec::new())),
            config,
        }
    }

    /// Shared handle on the surface
    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    pub fn client(&self) -> &TvMazeClient {
        &self.client
    }

    /// Shows behind the cards currently rendered, in card order
    pub async fn rendered_shows(&self) -> Vec<Show> {
        self.cards.read().await.clone()
    }

    /// Handle a search form submission
    ///
    /// Prevents the default navigation, searches for the current input
    /// value, hides the episodes area and renders the results. On failure the
    /// surface is left untouched.
    ///
    /// # Errors
    /// Under [`ErrorPolicy::Propagate`], any error from the search request
    pub async fn on_submit(&self, event: &mut SubmitEvent) -> Result<Handled> {
        event.prevent_default();
        let outcome = self.search_and_display().await;
        self.settle("search", outcome)
    }

    /// Handle a click delegated from the shows list
    ///
    /// Only clicks on an "Episodes" button are handled; anything else is
    /// [`Handled::Ignored`].
    ///
    /// # Errors
    /// Under [`ErrorPolicy::Propagate`]:
    /// - `CardNotFound` if the clicked card has no show id
    /// - any error from the episode request
    pub async fn on_click(&self, event: &ClickEvent) -> Result<Handled> {
        if !event.targets(EPISODES_BUTTON_CLASS) {
            return Ok(Handled::Ignored);
        }
        let outcome = self.show_episodes(event.card()).await;
        self.settle("episodes", outcome)
    }

    async fn search_and_display(&self) -> Result<()> {
        let term = self.surface.lock().await.search_term();
        let shows = self.client.search_shows(&term).await?;

        let mut surface = self.surface.lock().await;
        surface.set_episodes_visible(false);
        render_shows(&mut *surface, &shows, self.config.summary_mode)?;
        *self.cards.write().await = shows;
        Ok(())
    }

    async fn show_episodes(&self, card: usize) -> Result<()> {
        let show_id = self.resolve_show_id(card).await?;
        let episodes = self.client.get_episodes(show_id).await?;

        let mut surface = self.surface.lock().await;
        render_episodes(&mut *surface, &episodes)
    }

    /// Show id for a card: registry first, then the card's `data-show-id`
    async fn resolve_show_id(&self, card: usize) -> Result<u64> {
        if let Some(show) = self.cards.read().await.get(card) {
            return Ok(show.id);
        }

        let markup = self.surface.lock().await.shows_markup();
        find_show_id(&markup, card)?.ok_or(ShowFinderError::CardNotFound(card))
    }

    fn settle(&self, trigger: &str, outcome: Result<()>) -> Result<Handled> {
        match outcome {
            Ok(()) => Ok(Handled::Rendered),
            Err(e) => match self.config.error_policy {
                ErrorPolicy::Propagate => Err(e),
                ErrorPolicy::Log => {
                    tracing::warn!(trigger, error = %e, "Handler failed");
                    Ok(Handled::Failed)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::surface::MemoryPage;

    fn offline_controller(policy: ErrorPolicy) -> Controller<MemoryPage> {
        // Nothing listens on port 1, so every request fails fast
        let client = TvMazeClient::with_config(ClientConfig::with_base_url("http://127.0.0.1:1"))
            .unwrap();
        Controller::with_config(
            client,
            MemoryPage::new(),
            ControllerConfig {
                error_policy: policy,
                ..ControllerConfig::default()
            },
        )
    }

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_click_event_targets() {
        let event = ClickEvent::episodes_button(2);
        assert!(event.targets("Show-getEpisodes"));
        assert!(!event.targets("Show"));
        assert_eq!(event.card(), 2);
    }

    #[tokio::test]
    async fn test_click_outside_button_is_ignored() {
        let controller = offline_controller(ErrorPolicy::Propagate);
        let event = ClickEvent::new(["text-primary"], 0);
        assert_eq!(controller.on_click(&event).await.unwrap(), Handled::Ignored);
    }

    #[tokio::test]
    async fn test_click_without_cards_is_card_not_found() {
        let controller = offline_controller(ErrorPolicy::Propagate);
        let result = controller.on_click(&ClickEvent::episodes_button(0)).await;
        assert!(matches!(result, Err(ShowFinderError::CardNotFound(0))));
    }

    #[tokio::test]
    async fn test_submit_failure_propagates_and_prevents_default() {
        let controller = offline_controller(ErrorPolicy::Propagate);
        let mut event = SubmitEvent::new();

        let result = controller.on_submit(&mut event).await;

        assert!(event.default_prevented());
        assert!(result.unwrap_err().is_network());
    }

    #[tokio::test]
    async fn test_submit_failure_logged_leaves_surface_untouched() {
        let controller = offline_controller(ErrorPolicy::Log);
        {
            let surface = controller.surface();
            let mut page = surface.lock().await;
            page.replace_shows(vec!["<div>old</div>".to_string()]);
            page.set_episodes_visible(true);
        }

        let handled = controller.on_submit(&mut SubmitEvent::new()).await.unwrap();

        assert_eq!(handled, Handled::Failed);
        let surface = controller.surface();
        let page = surface.lock().await;
        assert_eq!(page.shows_markup(), "<div>old</div>");
        assert!(page.episodes_visible());
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_markup() {
        let controller = offline_controller(ErrorPolicy::Propagate);
        {
            let surface = controller.surface();
            surface.lock().await.replace_shows(vec![
                r#"<div data-show-id="42" class="Show"><button class="Show-getEpisodes">Episodes</button></div>"#
                    .to_string(),
            ]);
        }

        assert_eq!(controller.resolve_show_id(0).await.unwrap(), 42);
    }
}
