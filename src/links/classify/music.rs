use super::Classifier;
use crate::links::types::{ContentKind, ResolvedLink};

/// Audio pages are not resolved yet; this classifier reserves the slot in
/// the priority order and always declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct MusicClassifier;

impl Classifier for MusicClassifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Music
    }

    fn classify(&self, _url: &str, _body: &str) -> Option<ResolvedLink> {
        None
    }
}
