use super::classify::ClassifierChain;
use super::detector::{find_short_links, normalize_url};
use super::fetcher::{HttpPageFetcher, PageFetcher};
use super::types::{LinkReport, ProcessedText, ResolutionOutcome, ShortLinkMatch};
use crate::config::Config;
use crate::error::FetchError;
use crate::host::{Notifier, UNKNOWN_TYPE_NOTICE};
use std::sync::Arc;

/// Drives one resolution pass: detect, fetch, classify, substitute.
///
/// Links are processed one at a time in input order. Every occurrence is
/// fetched, including repeats of the same short link, and a failure on one
/// link never stops the others.
pub struct Resolver {
    fetcher: Box<dyn PageFetcher>,
    chain: ClassifierChain,
    notifier: Arc<dyn Notifier>,
}

impl Resolver {
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        chain: ClassifierChain,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            fetcher,
            chain,
            notifier,
        }
    }

    /// HTTP fetcher and classifier order taken from `config`.
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self, FetchError> {
        let fetcher = HttpPageFetcher::new(&config.fetch)?;
        let chain = ClassifierChain::from_order(&config.classify.order);
        Ok(Self::new(Box::new(fetcher), chain, notifier))
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub async fn resolve(&self, text: &str) -> ProcessedText {
        self.resolve_detailed(text).await.0
    }

    /// Like [`Resolver::resolve`], also returning one report per short link.
    pub async fn resolve_detailed(&self, text: &str) -> (ProcessedText, Vec<LinkReport>) {
        let Some(matches) = find_short_links(text) else {
            return (ProcessedText::unchanged(text), Vec::new());
        };

        tracing::debug!(count = matches.len(), "resolving short links");
        let mut reports = Vec::with_capacity(matches.len());
        for short_link in matches {
            let outcome = self.resolve_one(&short_link).await;
            reports.push(LinkReport {
                short_link,
                outcome,
            });
        }

        (apply_replacements(text, &reports), reports)
    }

    async fn resolve_one(&self, short_link: &ShortLinkMatch) -> ResolutionOutcome {
        let url = normalize_url(&short_link.text);

        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "short link fetch failed");
                return ResolutionOutcome::FetchFailed;
            }
        };

        if let Some((kind, link)) = self.chain.classify(&url, &body) {
            tracing::info!(url = %url, kind = %kind, target = %link.url, "short link resolved");
            ResolutionOutcome::Resolved { kind, link }
        } else {
            tracing::info!(url = %url, "short link is not a known content type");
            self.notifier.notify(UNKNOWN_TYPE_NOTICE);
            ResolutionOutcome::Unknown
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// Substitute every resolved link into `text` by span.
///
/// `reports` must be in input order with non-overlapping spans, as produced
/// by [`find_short_links`]. Spans are applied right to left so earlier spans
/// stay valid.
pub fn apply_replacements(text: &str, reports: &[LinkReport]) -> ProcessedText {
    let mut output = text.to_string();
    let mut modified = false;

    for report in reports.iter().rev() {
        if let Some(link) = report.outcome.resolved() {
            output.replace_range(report.short_link.span(), &link.to_markdown());
            modified = true;
        }
    }

    ProcessedText {
        text: output,
        modified,
    }
}
