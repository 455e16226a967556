//! Showfinder Tauri Integration
//!
//! Provides a Tauri plugin that runs the show search front-end in Rust and
//! hands the resulting page state to the webview for painting.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showfinder_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! document.body.innerHTML = await invoke('plugin:showfinder|page_shell');
//!
//! // Search form submitted
//! const page = await invoke('plugin:showfinder|submit_search', { term: 'batman' });
//! document.querySelector('#showsList').innerHTML = page.showsHtml;
//!
//! // "Episodes" clicked on the first card
//! const next = await invoke('plugin:showfinder|request_episodes', { card: 0 });
//! document.querySelector('#episodesList').innerHTML = next.episodesHtml;
//! ```

use showfinder_core::{Controller, MemoryPage, PageSnapshot, TvMazeClient};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Controller shared by all commands
///
/// The controller is internally synchronized, so commands may run
/// concurrently; the page shows whichever finishes last.
pub struct FinderState {
    pub(crate) controller: Controller<MemoryPage>,
}

impl FinderState {
    /// Create a new FinderState against the public TVMaze API
    ///
    /// # Errors
    /// Returns error string if the HTTP client cannot be built
    pub fn new() -> Result<Self, String> {
        let client = TvMazeClient::new().map_err(|e| e.to_string())?;
        Ok(Self::with_client(client))
    }

    /// Create a FinderState around an existing client
    pub fn with_client(client: TvMazeClient) -> Self {
        Self {
            controller: Controller::new(client, MemoryPage::new()),
        }
    }

    /// Current page state
    pub async fn snapshot(&self) -> PageSnapshot {
        self.controller.surface().lock().await.snapshot()
    }
}

/// Initialize the showfinder plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("showfinder")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::get_episodes,
            commands::submit_search,
            commands::request_episodes,
            commands::page_shell
        ])
        .setup(|app, _api| {
            let state = FinderState::new().map_err(Box::<dyn std::error::Error>::from)?;
            tracing::info!("showfinder plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showfinder_core::{Episode, Show};
