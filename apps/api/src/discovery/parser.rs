//! SERP HTML extraction.
//!
//! Pulls profile links out of a search results page: every anchor whose
//! href contains the profile-path marker, the anchor's visible text, and
//! the nearest following snippet node the results page renders under each
//! hit. Everything here is tolerant; unrecognized markup yields fewer
//! links, never an error.

use scraper::{ElementRef, Html};

/// Path marker identifying personal-profile links in result hrefs.
pub const PROFILE_PATH_MARKER: &str = "linkedin.com/in/";

/// CSS class the results page puts on snippet text nodes.
const SNIPPET_CLASS: &str = "BNeawe";

/// One profile anchor recovered from a results page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLink {
    /// The raw href, used for first-pass dedup across queries.
    pub url: String,
    /// Public handle derived from the href.
    pub public_id: String,
    /// Visible anchor text; may be empty.
    pub anchor_text: String,
    /// Text of the nearest following snippet node, when present.
    pub snippet: Option<String>,
}

/// Extracts all profile links from a results page in document order.
pub fn extract_profile_links(html: &str) -> Vec<ProfileLink> {
    let document = Html::parse_document(html);
    // Flattened document-order view, so "nearest following snippet" is a
    // forward scan from the anchor's position.
    let elements: Vec<ElementRef> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    let mut links = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        if element.value().name() != "a" {
            continue;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(public_id) = public_id_from_href(href) else {
            continue;
        };

        let snippet = elements[index + 1..]
            .iter()
            .find(|el| is_snippet(el))
            .map(|el| el.text().collect::<String>());

        links.push(ProfileLink {
            url: href.to_string(),
            public_id,
            anchor_text: element.text().collect::<String>(),
            snippet,
        });
    }
    links
}

/// Derives the public handle from a result href: the substring after the
/// profile-path marker, cut at the first `&` (result pages append tracking
/// parameters), trimmed of slashes. Empty handles and fragment artifacts
/// (`#`) indicate internal links and are rejected.
fn public_id_from_href(href: &str) -> Option<String> {
    let (_, tail) = href.split_once(PROFILE_PATH_MARKER)?;
    let public_id = tail.split('&').next()?.trim_matches('/');
    if public_id.is_empty() || public_id.contains('#') {
        return None;
    }
    Some(public_id.to_string())
}

fn is_snippet(element: &ElementRef) -> bool {
    element.value().name() == "div" && element.value().classes().any(|class| class == SNIPPET_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_marker_anchors_only() {
        let html = r#"
            <html><body>
                <a href="/url?q=https://www.linkedin.com/in/jane-doe&sa=U">Jane Doe</a>
                <a href="https://example.com/about">About</a>
            </body></html>
        "#;
        let links = extract_profile_links(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].public_id, "jane-doe");
        assert_eq!(links[0].anchor_text, "Jane Doe");
    }

    #[test]
    fn test_public_id_cut_at_tracking_params_and_slashes() {
        assert_eq!(
            public_id_from_href("/url?q=https://www.linkedin.com/in/jane-doe/&ved=abc"),
            Some("jane-doe".to_string())
        );
        assert_eq!(
            public_id_from_href("https://www.linkedin.com/in/john-smith"),
            Some("john-smith".to_string())
        );
    }

    #[test]
    fn test_fragment_and_empty_ids_are_rejected() {
        assert_eq!(public_id_from_href("https://www.linkedin.com/in/"), None);
        assert_eq!(public_id_from_href("https://www.linkedin.com/in/#section"), None);
        assert_eq!(public_id_from_href("https://example.com/no-marker"), None);
    }

    #[test]
    fn test_snippet_comes_from_nearest_following_node() {
        let html = r#"
            <html><body>
                <div class="BNeawe">Stale snippet before the anchor</div>
                <a href="https://www.linkedin.com/in/jane-doe">Jane Doe</a>
                <div class="BNeawe">Engineering Manager at Acme</div>
                <div class="BNeawe">Unrelated later snippet</div>
            </body></html>
        "#;
        let links = extract_profile_links(html);
        assert_eq!(
            links[0].snippet.as_deref(),
            Some("Engineering Manager at Acme")
        );
    }

    #[test]
    fn test_missing_snippet_is_none() {
        let html = r#"<html><body><a href="https://www.linkedin.com/in/jane-doe">Jane</a></body></html>"#;
        let links = extract_profile_links(html);
        assert_eq!(links[0].snippet, None);
    }

    #[test]
    fn test_anchor_text_collects_nested_markup() {
        let html = r#"
            <html><body>
                <a href="https://www.linkedin.com/in/jane-doe"><h3>Jane Doe</h3></a>
            </body></html>
        "#;
        let links = extract_profile_links(html);
        assert_eq!(links[0].anchor_text, "Jane Doe");
    }

    #[test]
    fn test_unparseable_markup_yields_empty_list() {
        assert!(extract_profile_links("<<< not really html >>>").is_empty());
        assert!(extract_profile_links("").is_empty());
    }
}
