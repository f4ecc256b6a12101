//! CLI entrypoint for Collapse Tools
//!
//! Wires the layers together: file config, ANSI theme, replay tools and the
//! console host, then renders each transcript entry the way the agent
//! terminal would.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use collapse_application::CollapseToolsExtension;
use collapse_domain::ConfigIssue;
use collapse_infrastructure::ConfigLoader;
use collapse_presentation::{AnsiTheme, Cli, ConsoleHost, ReplayToolFactory, parse_transcript};
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Rendered output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_issues(&config.validate());

    let (colors, _) = config.theme.parse_colors();
    let (theme, theme_issues) = AnsiTheme::from_config(config.theme.color && !cli.no_color, &colors);
    report_issues(&theme_issues);

    let entries = match &cli.transcript {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open transcript {}", path.display()))?;
            parse_transcript(BufReader::new(file))
        }
        None => parse_transcript(io::stdin().lock()),
    }
    .context("Failed to read transcript")?;
    info!(entries = entries.len(), "Transcript loaded");

    // === Dependency Injection ===
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let factory = ReplayToolFactory::from_entries(&entries);
    let mut host = ConsoleHost::new(&cwd, Arc::new(theme));

    let extension = CollapseToolsExtension::new(&cwd, config.to_overlay_config());
    extension
        .activate(&mut host, &factory)
        .context("Failed to activate collapse tools")?;

    host.start_session();

    let options = cli.render_options();
    for (index, entry) in entries.iter().enumerate() {
        let call_id = entry
            .id
            .clone()
            .unwrap_or_else(|| format!("call-{}", index + 1));
        let rendered = host
            .replay(&call_id, entry, options)
            .await
            .with_context(|| format!("Failed to replay {} ({})", entry.tool, call_id))?;
        println!("{}", rendered);
    }

    Ok(())
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        warn!("{}", issue.message);
    }
}
