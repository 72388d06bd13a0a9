pub mod schema;

pub use schema::{ClassifyConfig, Config, DEFAULT_USER_AGENT, FetchConfig, LoggingConfig};
