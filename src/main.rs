//! TCG Catalog main entry point
//!
//! This is the command-line interface for the Pokémon TCG catalog scraper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tcg_catalog::config::{load_config_with_hash, validate, Config};
use tcg_catalog::crawler::run_catalog;
use tcg_catalog::output::print_statistics;
use tcg_catalog::sources::build_plans;
use tcg_catalog::WriteOutcome;
use tracing_subscriber::EnvFilter;

/// TCG Catalog: scrapes Pokémon TCG storefronts into one JSON catalog
///
/// Without flags, runs one crawl of every built-in storefront and rewrites
/// the catalog only when its contents changed.
#[derive(Parser, Debug)]
#[command(name = "tcg-catalog")]
#[command(version = "1.0.0")]
#[command(about = "Pokémon TCG storefront catalog scraper", long_about = None)]
struct Cli {
    /// Path to a TOML file overriding the built-in configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the catalog to this path instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the storefronts and listing pages that would be crawled, then exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(output) = cli.output {
        config.output.catalog_path = output.to_string_lossy().into_owned();
    }
    validate(&config).context("invalid configuration")?;

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    handle_run(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tcg_catalog=info,warn"),
            1 => EnvFilter::new("tcg_catalog=debug,info"),
            2 => EnvFilter::new("tcg_catalog=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== TCG Catalog Dry Run ===\n");

    println!("HTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!(
        "  Attempts on 429: {} (backoff from {}ms)",
        config.http.max_attempts, config.http.backoff_base_ms
    );
    println!("  Page cap per section: {}", config.crawl.max_pages);

    println!("\nOutput:");
    println!("  Catalog: {}", config.output.catalog_path);

    let plans = build_plans(config).context("failed to build storefront plans")?;

    println!("\nStorefronts ({}):", plans.len());
    for plan in &plans {
        let gate = plan
            .fetch_gate
            .map(|n| format!("{} concurrent fetches", n))
            .unwrap_or_else(|| "sequential".to_string());
        println!("  - {} ({})", plan.shop, gate);
        for section in &plan.sections {
            println!("    * {}: {}", section.label, section.pages.url_for(1));
        }
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {} sections",
        plans.iter().map(|p| p.sections.len()).sum::<usize>()
    );

    Ok(())
}

/// Handles the main crawl-merge-write cycle
async fn handle_run(config: &Config) -> anyhow::Result<()> {
    let report = run_catalog(config)
        .await
        .with_context(|| format!("failed to update catalog {}", config.output.catalog_path))?;

    print_statistics(&report.statistics);
    println!();

    match report.outcome {
        WriteOutcome::Unchanged => println!("No changes, skipping write."),
        WriteOutcome::Written { count } => {
            println!("Scraped {} products → {}", count, report.catalog_path.display())
        }
    }

    Ok(())
}
