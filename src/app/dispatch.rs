use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use b23link::links::{LinkReport, ResolutionOutcome};
use b23link::{Config, PasteOutcome, Resolver, StderrNotifier, WriterTarget, handle_paste};
use console::style;
use std::io::Write;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Resolve { text } => resolve(&config, text).await,
        Commands::Inspect { text } => inspect(&config, text).await,
        Commands::Config => show_config(&config),
    }
}

async fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn build_resolver(config: &Config) -> Result<Resolver> {
    Resolver::from_config(config, Arc::new(StderrNotifier)).context("Failed to build HTTP client")
}

/// Behaves like a paste: resolved text replaces the input on stdout, and
/// input with nothing to rewrite is echoed back unchanged.
async fn resolve(config: &Config, text: Option<String>) -> Result<()> {
    let input = read_input(text).await?;
    let resolver = build_resolver(config)?;
    let mut target = WriterTarget::new(std::io::stdout());

    match handle_paste(&resolver, &mut target, &input).await {
        PasteOutcome::Replaced => Ok(()),
        PasteOutcome::Untouched => {
            let mut stdout = std::io::stdout();
            stdout.write_all(input.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        PasteOutcome::Discarded => bail!("could not write resolved text to stdout"),
    }
}

async fn inspect(config: &Config, text: Option<String>) -> Result<()> {
    let input = read_input(text).await?;
    let resolver = build_resolver(config)?;
    let (processed, reports) = resolver.resolve_detailed(&input).await;

    if reports.is_empty() {
        println!("no b23.tv links found");
        return Ok(());
    }

    for report in &reports {
        println!("{}", render_report(report));
    }
    println!(
        "{} of {} link(s) resolved",
        reports
            .iter()
            .filter(|r| r.outcome.resolved().is_some())
            .count(),
        reports.len()
    );
    tracing::debug!(modified = processed.modified, "inspect finished");
    Ok(())
}

fn render_report(report: &LinkReport) -> String {
    let status = match &report.outcome {
        ResolutionOutcome::Resolved { kind, .. } => style(kind.to_string()).green().to_string(),
        ResolutionOutcome::Unknown => style("unknown").yellow().to_string(),
        ResolutionOutcome::FetchFailed => style("fetch failed").red().to_string(),
    };
    format!(
        "{}\t{status}\t{}",
        report.short_link.text,
        report.replacement()
    )
}

fn show_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("# {}", config.config_path.display());
    print!("{rendered}");
    Ok(())
}
