//! Showfinder Core Library
//!
//! Search TV shows by keyword and browse a show's episodes through the
//! public TVMaze API, rendering results into a page surface.
//!
//! # Overview
//!
//! - [`TvMazeClient`] issues the show search and episode list requests and
//!   normalizes the JSON into [`Show`] and [`Episode`]
//! - [`view`] turns those records into card and list markup
//! - [`Surface`] is the handle on the page containers; [`MemoryPage`] keeps
//!   them in memory
//! - [`Controller`] wires the search submit and "Episodes" click triggers
//!
//! # Example
//!
//! ```no_run
//! use showfinder_core::{ClickEvent, Controller, MemoryPage, Result, SubmitEvent, TvMazeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut page = MemoryPage::new();
//!     page.set_search_term("batman");
//!
//!     let controller = Controller::new(TvMazeClient::new()?, page);
//!     controller.on_submit(&mut SubmitEvent::new()).await?;
//!
//!     // "Episodes" button of the first card
//!     controller.on_click(&ClickEvent::episodes_button(0)).await?;
//!
//!     let surface = controller.surface();
//!     for item in surface.lock().await.episode_items() {
//!         println!("{}", item);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod controller;
mod error;
pub mod parser;
mod surface;
mod types;
pub mod url;
pub mod view;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export controller types
pub use controller::{
    ClickEvent, Controller, ControllerConfig, ErrorPolicy, Handled, SubmitEvent,
};

// Re-export error types
pub use error::{Result, ShowFinderError};

// Re-export parser functions
pub use parser::{find_show_id, parse_episode_list, parse_show_search};

// Re-export surface types
pub use surface::{MemoryPage, PageSnapshot, Surface};

// Re-export data types
pub use types::{DEFAULT_IMAGE, Episode, Show};

// Re-export renderers
pub use view::{SummaryMode, render_episodes, render_page_shell, render_shows};
