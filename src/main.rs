//! Tabelog-Harvest main entry point
//!
//! Command-line front end for the link classifier and page extractors. It does
//! no fetching: pages are read from saved HTML files.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tabelog_harvest::config::{load_config_with_hash, Config};
use tabelog_harvest::output::{print_statistics, EntitySink, HarvestStats, JsonLinesSink};
use tabelog_harvest::{FetchedPage, Harvester, PageOutcome};
use tracing_subscriber::EnvFilter;

/// Tabelog-Harvest: entity extraction for a restaurant directory
///
/// Generates crawl seeds, classifies discovered links, and turns saved
/// business and review pages into JSON-lines records.
#[derive(Parser, Debug)]
#[command(name = "tabelog-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Entity extraction for a restaurant directory", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seed URLs, one per line
    Seeds,

    /// Print the crawl action for each URL
    Classify {
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Extract entities from a saved page
    Extract {
        /// URL the page was fetched from
        #[arg(long)]
        url: String,

        /// Saved HTML body
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate the configuration and print a summary
    CheckConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = load(cli.config.as_deref())?;

    match cli.command {
        Command::Seeds => handle_seeds(config),
        Command::Classify { urls } => handle_classify(config, &urls),
        Command::Extract { url, file } => handle_extract(config, url, &file),
        Command::CheckConfig => handle_check_config(&config, config_hash.as_deref()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries command output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tabelog_harvest=info,warn"),
            1 => EnvFilter::new("tabelog_harvest=debug,info"),
            2 => EnvFilter::new("tabelog_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given; the hash is `None` for defaults
fn load(path: Option<&Path>) -> anyhow::Result<(Config, Option<String>)> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using built-in defaults");
        return Ok((Config::default(), None));
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok((config, Some(hash)))
}

/// Handles `seeds`: prints every seed URL
fn handle_seeds(config: Config) -> anyhow::Result<()> {
    let harvester = Harvester::new(config)?;
    let seeds = harvester.seeds()?;

    let mut stdout = std::io::stdout().lock();
    for seed in &seeds {
        writeln!(stdout, "{}", seed.url)?;
    }

    tracing::info!("Generated {} seed URLs", seeds.len());
    Ok(())
}

/// Handles `classify`: prints the action and deciding rule per URL
fn handle_classify(config: Config, urls: &[String]) -> anyhow::Result<()> {
    let harvester = Harvester::new(config)?;

    for url in urls {
        let result = harvester.classifier().explain(url);
        println!(
            "{}\t{}\t{}",
            result.action,
            result.rule.unwrap_or("-"),
            url
        );
    }

    Ok(())
}

/// Handles `extract`: runs the dispatched handler on a saved page
fn handle_extract(config: Config, url: String, file: &Path) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let output_path = config.output.path.clone();
    let harvester = Harvester::new(config)?;
    let page = FetchedPage::new(url, body);

    let mut stats = HarvestStats::new();
    let outcome = match harvester.dispatch(&page) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            return Err(e.into());
        }
    };
    stats.record_outcome(&outcome);

    match &outcome {
        PageOutcome::RefetchRequired(request) => {
            println!(
                "refetch {} (bypass dedup: {})",
                request.url, request.bypass_dedup
            );
        }
        PageOutcome::Entities { entities, .. } => match &output_path {
            Some(path) => {
                let mut sink = JsonLinesSink::create(path)?;
                sink.record_all(&page.url, entities)?;
                sink.finish()?;
                println!("✓ Wrote {} entities to {}\n", sink.written(), path);
                print_statistics(&stats);
            }
            None => {
                let mut sink = JsonLinesSink::new(std::io::stdout().lock());
                sink.record_all(&page.url, entities)?;
                sink.finish()?;
            }
        },
    }

    Ok(())
}

/// Handles `check-config`: validates the config and shows what would be harvested
fn handle_check_config(config: &Config, hash: Option<&str>) -> anyhow::Result<()> {
    let harvester = Harvester::new(config.clone())?;
    let seed_count = harvester.seeds()?.len();

    println!("=== Tabelog-Harvest Configuration ===\n");

    println!("Site:");
    println!("  Host: {}", config.site.host);
    println!("  Mirror host (denied): {}", config.site.mirror_host);
    println!("  Seed scheme: {}", config.site.seed_scheme);

    println!("\nSeeds:");
    println!("  Regions: {}", config.seeds.regions.len());
    println!("  Categories: {}", config.seeds.categories.len());
    println!("  Seed URLs: {}", seed_count);

    println!("\nLink Rules ({}):", harvester.classifier().rules().len());
    for rule in harvester.classifier().rules() {
        println!("  - {} -> {}", rule.name(), rule.action());
    }

    println!("\nPoliteness:");
    println!("  Download delay: {}ms", config.politeness.download_delay_ms);
    println!("  Refetch ceiling: {}", config.refetch.max_attempts);

    println!("\nOutput:");
    println!("  Emit users: {}", config.extract.emit_users);
    println!(
        "  Entities: {}",
        config.output.path.as_deref().unwrap_or("stdout")
    );

    println!("\n✓ Configuration is valid");
    match hash {
        Some(hash) => println!("✓ Config hash: {}", hash),
        None => println!("✓ Using built-in defaults"),
    }

    Ok(())
}
