//! Show search response parser
//!
//! Parses the JSON body of `/search/shows` and normalizes each hit into a
//! [`Show`].

use serde::Deserialize;

use crate::error::Result;
use crate::types::{DEFAULT_IMAGE, Show};

/// One element of the search response: `{ "score": .., "show": {..} }`
#[derive(Debug, Deserialize)]
struct SearchHit {
    show: RawShow,
}

#[derive(Debug, Deserialize)]
struct RawShow {
    id: u64,
    name: String,
    summary: Option<String>,
    image: Option<RawImage>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    medium: String,
}

impl From<RawShow> for Show {
    fn from(raw: RawShow) -> Self {
        Show {
            id: raw.id,
            name: raw.name,
            summary: raw.summary.unwrap_or_default(),
            image: raw
                .image
                .map(|img| img.medium)
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
        }
    }
}

/// Parses a show search response body into shows, preserving order
///
/// # Arguments
/// * `body` - Raw JSON text from `/search/shows`
///
/// # Errors
/// Returns `ParseError` if the body is not an array of search hits
pub fn parse_show_search(body: &str) -> Result<Vec<Show>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    Ok(hits.into_iter().map(|hit| Show::from(hit.show)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowFinderError;
    use proptest::prelude::*;

    #[test]
    fn test_parse_empty_array() {
        let shows = parse_show_search("[]").unwrap();
        assert!(shows.is_empty());
    }

    #[test]
    fn test_parse_hit_with_image() {
        let body = r#"[
            {
                "score": 0.91,
                "show": {
                    "id": 975,
                    "url": "https://www.tvmaze.com/shows/975/batman",
                    "name": "Batman",
                    "language": "English",
                    "summary": "<p>Wacky adventures of the Caped Crusader.</p>",
                    "image": {
                        "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg",
                        "original": "https://static.tvmaze.com/uploads/images/original_untouched/6/16463.jpg"
                    }
                }
            }
        ]"#;

        let shows = parse_show_search(body).unwrap();
        assert_eq!(shows.len(), 1);

        let show = &shows[0];
        assert_eq!(show.id, 975);
        assert_eq!(show.name, "Batman");
        assert_eq!(show.summary, "<p>Wacky adventures of the Caped Crusader.</p>");
        assert_eq!(
            show.image,
            "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg"
        );
    }

    #[test]
    fn test_parse_hit_without_image_uses_default() {
        let body = r#"[{"show": {"id": 1, "name": "X", "summary": "<p>s</p>", "image": null}}]"#;

        let shows = parse_show_search(body).unwrap();
        assert_eq!(shows[0].image, DEFAULT_IMAGE);
        assert_eq!(shows[0].summary, "<p>s</p>");
    }

    #[test]
    fn test_parse_hit_with_missing_image_key() {
        let body = r#"[{"show": {"id": 1, "name": "X", "summary": "s"}}]"#;

        let shows = parse_show_search(body).unwrap();
        assert_eq!(shows[0].image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_parse_null_summary_becomes_empty() {
        let body = r#"[{"show": {"id": 2, "name": "Y", "summary": null, "image": null}}]"#;

        let shows = parse_show_search(body).unwrap();
        assert_eq!(shows[0].summary, "");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_show_search(r#"{"show": {}}"#);
        match result {
            Err(ShowFinderError::ParseError(_)) => {}
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_hit_without_show() {
        let result = parse_show_search(r#"[{"score": 1.0}]"#);
        assert!(matches!(result, Err(ShowFinderError::ParseError(_))));
    }

    fn hit_json(id: u64, name: &str, image: &Option<String>) -> serde_json::Value {
        serde_json::json!({
            "score": 0.5,
            "show": {
                "id": id,
                "name": name,
                "summary": "<p>summary</p>",
                "image": image.as_ref().map(|m| serde_json::json!({ "medium": m, "original": m })),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_image_never_empty_and_order_preserved(
            hits in prop::collection::vec(
                (any::<u64>(), "[A-Za-z ]{1,20}", prop::option::of("https://img\\.example/[a-z]{1,10}\\.jpg")),
                0..20,
            )
        ) {
            let body = serde_json::Value::Array(
                hits.iter().map(|(id, name, image)| hit_json(*id, name, image)).collect(),
            )
            .to_string();

            let shows = parse_show_search(&body).unwrap();
            prop_assert_eq!(shows.len(), hits.len());

            for (show, (id, name, image)) in shows.iter().zip(hits.iter()) {
                prop_assert_eq!(show.id, *id);
                prop_assert_eq!(&show.name, name);
                prop_assert!(!show.image.is_empty());
                match image {
                    Some(medium) => prop_assert_eq!(&show.image, medium),
                    None => prop_assert_eq!(show.image.as_str(), DEFAULT_IMAGE),
                }
            }
        }
    }
}
