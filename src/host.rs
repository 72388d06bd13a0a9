//! Capabilities the embedding editor provides: a place to put resolved text
//! and a way to show a short message. Nothing here depends on a specific
//! host; the CLI wires stdout and stderr in.

use crate::error::HostError;
use crate::links::detector::contains_short_link_host;
use crate::links::Resolver;
use console::style;
use std::io::Write;

pub const UNKNOWN_TYPE_NOTICE: &str = "this b23.tv link is not a known type";
pub const RESOLVED_NOTICE: &str = "b23.tv links automatically resolved";

/// Transient, user-facing message sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sends notices to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(notice = message, "notice");
    }
}

/// Prints notices to stderr, keeping stdout for the resolved text.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{} {message}", style("b23link:").cyan().bold());
    }
}

/// Where resolved text goes once a paste has been processed.
pub trait PasteTarget: Send {
    /// Replace the just-pasted range with `text`.
    fn replace_pasted(&mut self, text: &str) -> Result<(), HostError>;
}

/// Target backed by any writer (stdout, a buffer, a file).
#[derive(Debug)]
pub struct WriterTarget<W> {
    writer: W,
}

impl<W: Write + Send> WriterTarget<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> PasteTarget for WriterTarget<W> {
    fn replace_pasted(&mut self, text: &str) -> Result<(), HostError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Nothing to change; the pasted text stays as it is.
    Untouched,
    /// Resolved text was handed to the target.
    Replaced,
    /// Links were resolved but the target refused the text.
    Discarded,
}

/// Full paste flow: precheck, resolve, and hand the result to `target` only
/// when at least one link was rewritten.
pub async fn handle_paste(
    resolver: &Resolver,
    target: &mut dyn PasteTarget,
    pasted: &str,
) -> PasteOutcome {
    if !contains_short_link_host(pasted) {
        return PasteOutcome::Untouched;
    }

    let processed = resolver.resolve(pasted).await;
    if !processed.modified {
        return PasteOutcome::Untouched;
    }

    match target.replace_pasted(&processed.text) {
        Ok(()) => {
            resolver.notifier().notify(RESOLVED_NOTICE);
            PasteOutcome::Replaced
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to apply resolved b23.tv links");
            PasteOutcome::Discarded
        }
    }
}
