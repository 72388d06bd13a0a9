use super::types::ShortLinkMatch;
use regex::Regex;
use std::sync::LazyLock;

/// Host every short link lives on.
pub const SHORT_LINK_HOST: &str = "b23.tv";

static SHORT_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?://)?b23\.tv/[a-zA-Z0-9]+").unwrap());

/// Cheap precheck run before any matching or fetching.
pub fn contains_short_link_host(text: &str) -> bool {
    text.contains(SHORT_LINK_HOST)
}

/// Find every short link in `text`, in order of appearance.
///
/// Returns `None` when the text holds no short link at all; a returned
/// vector is never empty. Duplicates are kept, one entry per occurrence.
pub fn find_short_links(text: &str) -> Option<Vec<ShortLinkMatch>> {
    if !contains_short_link_host(text) {
        return None;
    }

    let matches: Vec<ShortLinkMatch> = SHORT_LINK_RE
        .find_iter(text)
        .map(|m| ShortLinkMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
        .collect();

    if matches.is_empty() {
        None
    } else {
        Some(matches)
    }
}

/// Turn a matched short link into an absolute URL suitable for fetching.
pub fn normalize_url(short_link: &str) -> String {
    if short_link.starts_with("http") {
        short_link.to_string()
    } else {
        format!("https://{short_link}")
    }
}
