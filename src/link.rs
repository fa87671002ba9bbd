//! Search-link synthesis for records without a stored URL.
//!
//! The catalog never persists these fallbacks; they are computed on demand
//! whenever a record's `link` field is empty.

/// Fixed search provider template the query terms are embedded into.
const SEARCH_URL_PREFIX: &str = "https://www.youtube.com/results?search_query=";

/// Build a search URL from the non-empty `parts`, space-joined and
/// percent-encoded.
#[must_use]
pub fn search_link(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{SEARCH_URL_PREFIX}{}", urlencoding::encode(&joined))
}

/// Deterministic fallback for a record lacking a link: a search over the
/// record's own fields plus the literal term "song".
#[must_use]
pub fn fallback_link(title: &str, artist: &str, language: &str, mood: &str) -> String {
    search_link(&[title, artist, language, mood, "song"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_link_joins_and_encodes() {
        let url = search_link(&["Telugu", "Happy", "song"]);
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=Telugu%20Happy%20song"
        );
    }

    #[test]
    fn test_search_link_skips_empty_parts() {
        let url = search_link(&["", "Hindi", "", "Calm"]);
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=Hindi%20Calm"
        );
    }

    #[test]
    fn test_search_link_encodes_reserved_characters() {
        let url = search_link(&["AC/DC", "T.N.T & more"]);
        assert!(url.starts_with(SEARCH_URL_PREFIX));
        assert!(!url.contains('/') || url.contains("%2F"));
        assert!(url.contains("%26"), "ampersand must be encoded: {url}");
    }

    #[test]
    fn test_fallback_link_is_deterministic() {
        let first = fallback_link("X", "Unknown", "English", "Happy");
        let second = fallback_link("X", "Unknown", "English", "Happy");
        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://www.youtube.com/results?search_query=X%20Unknown%20English%20Happy%20song"
        );
    }
}
