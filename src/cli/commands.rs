use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `b23link` - resolve b23.tv short links into titled markdown links.
#[derive(Parser, Debug)]
#[command(name = "b23link")]
#[command(version)]
#[command(about = "Resolve b23.tv short links in text into [title](url) links.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.b23link/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite every short link in TEXT (or stdin) and print the result
    Resolve {
        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },

    /// Show how each short link in TEXT (or stdin) resolves
    Inspect {
        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },

    /// Print the effective configuration
    Config,
}
