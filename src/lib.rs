#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod error;
pub mod host;
pub mod links;

pub use config::Config;
pub use error::{B23Error, ConfigError, FetchError, HostError};
pub use host::{
    LogNotifier, Notifier, PasteOutcome, PasteTarget, StderrNotifier, WriterTarget, handle_paste,
};
pub use links::{ContentKind, ProcessedText, ResolvedLink, Resolver};
