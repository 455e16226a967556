//! URL helper functions for the TVMaze API
//!
//! Provides functions for building search and episode-list URLs against a
//! configurable base.

/// Public TVMaze API root
pub const BASE_URL: &str = "https://api.tvmaze.com/";

/// Joins `base` and `path` with exactly one slash between them
fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Builds the show search URL for a given term
///
/// URL encodes the term and passes it as the `q` query parameter.
/// An empty term is sent as-is.
///
/// # Example
/// ```
/// use showfinder_core::url::build_search_url;
/// let url = build_search_url("https://api.tvmaze.com/", "the office");
/// assert_eq!(url, "https://api.tvmaze.com/search/shows?q=the%20office");
/// ```
pub fn build_search_url(base: &str, term: &str) -> String {
    let encoded = urlencoding::encode(term);
    format!("{}?q={}", join(base, "search/shows"), encoded)
}

/// Builds the episode list URL for a show
///
/// # Example
/// ```
/// use showfinder_core::url::build_episodes_url;
/// let url = build_episodes_url("https://api.tvmaze.com", 975);
/// assert_eq!(url, "https://api.tvmaze.com/shows/975/episodes");
/// ```
pub fn build_episodes_url(base: &str, show_id: u64) -> String {
    join(base, &format!("shows/{}/episodes", show_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_simple() {
        let url = build_search_url(BASE_URL, "batman");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=batman");
    }

    #[test]
    fn test_build_search_url_encodes_reserved_chars() {
        let url = build_search_url(BASE_URL, "law & order");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=law%20%26%20order");
    }

    #[test]
    fn test_build_search_url_empty_term() {
        let url = build_search_url(BASE_URL, "");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=");
    }

    #[test]
    fn test_build_episodes_url_with_trailing_slash() {
        let url = build_episodes_url("https://api.tvmaze.com/", 1);
        assert_eq!(url, "https://api.tvmaze.com/shows/1/episodes");
    }

    #[test]
    fn test_build_urls_with_local_base() {
        assert_eq!(
            build_episodes_url("http://127.0.0.1:4000", 42),
            "http://127.0.0.1:4000/shows/42/episodes"
        );
        assert_eq!(
            build_search_url("http://127.0.0.1:4000", "x"),
            "http://127.0.0.1:4000/search/shows?q=x"
        );
    }
}
