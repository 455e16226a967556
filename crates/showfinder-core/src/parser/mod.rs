//! Parsers for upstream responses and rendered markup
//!
//! Contains modules for the two TVMaze response bodies and for reading
//! show ids back out of the shows container.

pub mod card;
pub mod episodes;
pub mod search;

pub use card::find_show_id;
pub use episodes::parse_episode_list;
pub use search::parse_show_search;
