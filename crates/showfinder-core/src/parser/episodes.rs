//! Episode list response parser

use crate::error::Result;
use crate::types::Episode;

/// Parses a `/shows/{id}/episodes` body into episodes, preserving order
///
/// Upstream episodes carry many more fields (airdate, runtime, ...); only
/// `id`, `name`, `season` and `number` are kept, verbatim. A `null` name or
/// number is kept as `None` rather than failing the whole list.
///
/// # Errors
/// Returns `ParseError` if the body is not an array of episodes
pub fn parse_episode_list(body: &str) -> Result<Vec<Episode>> {
    Ok(serde_json::from_str(body)?)
}
