use super::Classifier;
use crate::links::types::{ContentKind, ResolvedLink};
use regex::Regex;
use std::sync::LazyLock;

const VIDEO_MARKER: &str = r#"og:type" content="video"#;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"property="og:title" content="(.*?)_哔哩哔哩_bilibili"#).unwrap()
});

static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://www\.bilibili\.com/video/BV[a-zA-Z0-9]+").unwrap()
});

/// Video pages: `og:type` is `video`, canonical URL is the `BV` path.
#[derive(Debug, Default, Clone, Copy)]
pub struct VideoClassifier;

impl Classifier for VideoClassifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Video
    }

    fn classify(&self, _url: &str, body: &str) -> Option<ResolvedLink> {
        if !is_video_page(body) {
            return None;
        }
        let title = video_title(body)?;
        let url = video_canonical_url(body)?;
        Some(ResolvedLink::new(url, title))
    }
}

pub fn is_video_page(body: &str) -> bool {
    body.contains(VIDEO_MARKER)
}

/// `og:title` with the `_哔哩哔哩_bilibili` site suffix cut off.
pub fn video_title(body: &str) -> Option<&str> {
    TITLE_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
}

pub fn video_canonical_url(body: &str) -> Option<&str> {
    CANONICAL_RE.find(body).map(|m| m.as_str())
}
