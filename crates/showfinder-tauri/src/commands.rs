//! Tauri commands for showfinder
//!
//! This module contains all Tauri command implementations. Errors cross the
//! bridge as their display string.

use showfinder_core::{ClickEvent, Episode, PageSnapshot, Show, SubmitEvent, render_page_shell};
use tauri::State;

use crate::FinderState;

/// Search TVMaze for shows matching a term
///
/// Raw data access; the page is not touched.
#[tauri::command]
pub async fn search_shows(
    state: State<'_, FinderState>,
    term: String,
) -> Result<Vec<Show>, String> {
    state
        .controller
        .client()
        .search_shows(&term)
        .await
        .map_err(|e| e.to_string())
}

/// List a show's episodes
///
/// Raw data access; the page is not touched.
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, FinderState>,
    show_id: u64,
) -> Result<Vec<Episode>, String> {
    state
        .controller
        .client()
        .get_episodes(show_id)
        .await
        .map_err(|e| e.to_string())
}

/// Submit the search form with `term` typed into the input
///
/// # Returns
/// Page state to paint: new cards, episodes area hidden
#[tauri::command]
pub async fn submit_search(
    state: State<'_, FinderState>,
    term: String,
) -> Result<PageSnapshot, String> {
    state.controller.surface().lock().await.set_search_term(term);

    let mut event = SubmitEvent::new();
    state
        .controller
        .on_submit(&mut event)
        .await
        .map_err(|e| e.to_string())?;

    Ok(state.snapshot().await)
}

/// Click the "Episodes" button of the `card`-th show card
///
/// # Returns
/// Page state to paint: episode list filled, episodes area visible
#[tauri::command]
pub async fn request_episodes(
    state: State<'_, FinderState>,
    card: usize,
) -> Result<PageSnapshot, String> {
    state
        .controller
        .on_click(&ClickEvent::episodes_button(card))
        .await
        .map_err(|e| e.to_string())?;

    Ok(state.snapshot().await)
}

/// Document skeleton with the containers the snapshots target
#[tauri::command]
pub fn page_shell() -> Result<String, String> {
    render_page_shell().map_err(|e| e.to_string())
}
