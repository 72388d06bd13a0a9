pub mod classify;
pub mod detector;
pub mod fetcher;
pub mod resolver;
pub mod types;

pub use classify::{Classifier, ClassifierChain};
pub use detector::{find_short_links, normalize_url};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use resolver::{Resolver, apply_replacements};
pub use types::{
    ContentKind, LinkReport, ProcessedText, ResolutionOutcome, ResolvedLink, ShortLinkMatch,
};
