use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One occurrence of a short link in the input text.
///
/// Identity is the exact byte span; identical links at different positions
/// are distinct matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl ShortLinkMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Canonical URL and display title produced by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub url: String,
    pub title: String,
}

impl ResolvedLink {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Render as `[title](url)`.
    pub fn to_markdown(&self) -> String {
        format!("[{}]({})", self.title, self.url)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Video,
    Live,
    Article,
    Music,
}

impl ContentKind {
    pub const DEFAULT_ORDER: [Self; 4] = [Self::Video, Self::Live, Self::Article, Self::Music];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved { kind: ContentKind, link: ResolvedLink },
    /// Every classifier declined the fetched page.
    Unknown,
    /// The page could not be fetched at all.
    FetchFailed,
}

impl ResolutionOutcome {
    pub fn resolved(&self) -> Option<&ResolvedLink> {
        match self {
            Self::Resolved { link, .. } => Some(link),
            Self::Unknown | Self::FetchFailed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub short_link: ShortLinkMatch,
    pub outcome: ResolutionOutcome,
}

impl LinkReport {
    /// Text that takes the short link's place in the output.
    pub fn replacement(&self) -> String {
        self.outcome
            .resolved()
            .map_or_else(|| self.short_link.text.clone(), ResolvedLink::to_markdown)
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    pub text: String,
    pub modified: bool,
}

impl ProcessedText {
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            modified: false,
        }
    }
}
