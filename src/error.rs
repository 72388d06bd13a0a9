use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `b23link`.
///
/// Library callers can match on these to decide recovery strategy; the
/// binary and config loading continue to use `anyhow::Result` for ad-hoc
/// context chains.
#[derive(Debug, Error)]
pub enum B23Error {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Page fetching ────────────────────────────────────────────────────
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    // ── Host integration ─────────────────────────────────────────────────
    #[error("host: {0}")]
    Host(#[from] HostError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Fetch errors ────────────────────────────────────────────────────────────

/// Transport-level failure loading a short link's target page.
///
/// HTTP error statuses are not failures: the body is still classified.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a non-`reqwest` transport supplied by a host.
    #[error("fetching {url} failed: {message}")]
    Transport { url: String, message: String },
}

// ─── Host integration errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no active edit target")]
    NoActiveTarget,

    #[error("writing resolved text failed: {0}")]
    Write(#[from] std::io::Error),
}
