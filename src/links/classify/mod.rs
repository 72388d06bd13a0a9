//! Content classification for fetched short-link targets.
//!
//! Each classifier looks for its category's marker in the raw page body and
//! either extracts a canonical URL plus title or declines. Markup is matched
//! with plain text patterns; each pattern lives in a named function next to
//! its classifier so a site change touches exactly one rule.

pub mod article;
pub mod live;
pub mod music;
pub mod video;

pub use article::ArticleClassifier;
pub use live::LiveClassifier;
pub use music::MusicClassifier;
pub use video::VideoClassifier;

use super::types::{ContentKind, ResolvedLink};

pub trait Classifier: Send + Sync {
    fn kind(&self) -> ContentKind;

    /// Extract a complete `ResolvedLink` from `body`, or `None` when the
    /// page is not this category or any required field is missing.
    fn classify(&self, url: &str, body: &str) -> Option<ResolvedLink>;
}

pub fn classifier_for(kind: ContentKind) -> Box<dyn Classifier> {
    match kind {
        ContentKind::Video => Box::new(VideoClassifier),
        ContentKind::Live => Box::new(LiveClassifier),
        ContentKind::Article => Box::new(ArticleClassifier),
        ContentKind::Music => Box::new(MusicClassifier),
    }
}

/// Classifiers tried in priority order; the first acceptance wins.
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierChain {
    pub fn new(classifiers: Vec<Box<dyn Classifier>>) -> Self {
        Self { classifiers }
    }

    pub fn from_order(order: &[ContentKind]) -> Self {
        Self::new(order.iter().copied().map(classifier_for).collect())
    }

    pub fn order(&self) -> Vec<ContentKind> {
        self.classifiers.iter().map(|c| c.kind()).collect()
    }

    pub fn classify(&self, url: &str, body: &str) -> Option<(ContentKind, ResolvedLink)> {
        self.classifiers.iter().find_map(|classifier| {
            let link = classifier.classify(url, body)?;
            tracing::debug!(url, kind = %classifier.kind(), "classified");
            Some((classifier.kind(), link))
        })
    }
}

impl Default for ClassifierChain {
    fn default() -> Self {
        Self::from_order(&ContentKind::DEFAULT_ORDER)
    }
}

impl std::fmt::Debug for ClassifierChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierChain")
            .field("order", &self.order())
            .finish()
    }
}
