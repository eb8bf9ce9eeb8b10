use analytics::{AnalyticsEngine, SeriesGenerator};
use anyhow::Context;
use api_client::{GeminiClient, RssNewsClient};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{Config, DisplayConfig, Overrides};
use core_types::{FUND_CATALOG, NavSeries, Period, Region, find_fund, funds_in};
use indicatif::{ProgressBar, ProgressStyle};
use presentation::{FundSnapshot, Theme, terminal};
use std::time::Duration;

mod pipeline;

use pipeline::analyze_fund;

/// The main entry point for the FundLens command-line dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets such as the model API key usually live in .env; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = cli
        .overrides
        .load()
        .context("Failed to load configuration")?;
    let _log_guard =
        configuration::init_logging(&config.logging).context("Failed to initialise logging")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Funds(args) => handle_funds(args),
        Commands::Analyze(args) => handle_analyze(args, &config).await,
        Commands::Compare(args) => handle_compare(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// News-driven mutual fund analysis with synthetic NAV statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in fund catalogue.
    Funds(FundsArgs),
    /// Fetch news, ask the model for an insight and report on one fund.
    Analyze(AnalyzeArgs),
    /// Compare the synthetic NAV of two funds over the same horizon.
    Compare(CompareArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum RegionArg {
    India,
    Europe,
    Us,
}

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::India => Region::India,
            RegionArg::Europe => Region::Europe,
            RegionArg::Us => Region::Us,
        }
    }
}

#[derive(Parser)]
struct FundsArgs {
    /// Only list funds from this region.
    #[arg(long, value_enum)]
    region: Option<RegionArg>,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The fund to analyze (e.g., "SBI Bluechip Fund").
    #[arg(long)]
    fund: String,

    /// Chart horizon: 1mo, 3mo, 6mo or 1y.
    #[arg(long)]
    period: Option<String>,

    /// Skip writing the HTML report.
    #[arg(long)]
    no_export: bool,

    /// Seed for the synthetic NAV series, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser)]
struct CompareArgs {
    /// A fund to compare; pass exactly twice.
    #[arg(long = "fund", required = true, num_args = 1)]
    funds: Vec<String>,

    /// Chart horizon: 1mo, 3mo, 6mo or 1y.
    #[arg(long)]
    period: Option<String>,

    /// Skip writing the comparison report.
    #[arg(long)]
    no_export: bool,

    /// Seed for the synthetic NAV series, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_funds(args: FundsArgs) -> anyhow::Result<()> {
    let table = match args.region {
        Some(region) => terminal::catalog_table(funds_in(region.into())),
        None => terminal::catalog_table(FUND_CATALOG),
    };
    println!("{table}");
    Ok(())
}

async fn handle_analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let period = resolve_period(args.period.as_deref(), &config.display);
    warn_if_unlisted(&args.fund);

    let timeout = Duration::from_secs(config.news.request_timeout_secs);
    let news = RssNewsClient::new(&config.news).context("Failed to create the news client")?;
    let insights =
        GeminiClient::new(&config.llm, timeout).context("Failed to create the model client")?;

    let spinner = spinner("Fetching latest news and analyzing...");
    let max_articles = config.news.max_prompt_articles;
    let result = match args.seed {
        Some(seed) => {
            let mut generator = SeriesGenerator::seeded(seed);
            analyze_fund(&news, &insights, &mut generator, &args.fund, period, max_articles).await
        }
        None => {
            let mut generator = SeriesGenerator::new();
            analyze_fund(&news, &insights, &mut generator, &args.fund, period, max_articles).await
        }
    };
    spinner.finish_and_clear();
    let snapshot = result?;

    print_snapshot(&snapshot);

    if !args.no_export {
        let theme = Theme::from_dark_mode(config.display.dark_mode);
        let dir = &config.report.output_dir;
        let path = presentation::write_report(&snapshot, theme, dir)
            .context("Failed to write the HTML report")?;
        println!("📄 Report generated: {}", path.display());

        if config.report.export_json {
            let path = presentation::write_snapshot_json(&snapshot, dir)
                .context("Failed to write the JSON snapshot")?;
            println!("🗂  Snapshot exported: {}", path.display());
        }
    }
    Ok(())
}

fn handle_compare(args: CompareArgs, config: &Config) -> anyhow::Result<()> {
    let [first, second] = <[String; 2]>::try_from(args.funds)
        .map_err(|given| anyhow::anyhow!("compare needs exactly two --fund values, got {}", given.len()))?;
    let period = resolve_period(args.period.as_deref(), &config.display);
    warn_if_unlisted(&first);
    warn_if_unlisted(&second);

    let (nav_a, nav_b) = match args.seed {
        Some(seed) => generate_pair(&mut SeriesGenerator::seeded(seed), period)?,
        None => generate_pair(&mut SeriesGenerator::new(), period)?,
    };

    let engine = AnalyticsEngine::new();
    let metrics_a = engine.compute_metrics(&nav_a)?;
    let metrics_b = engine.compute_metrics(&nav_b)?;

    println!("\n📊 NAV Comparison: {first} vs {second} ({period})");
    println!(
        "{}",
        terminal::comparison_table((first.as_str(), &metrics_a), (second.as_str(), &metrics_b))
    );

    if !args.no_export {
        let path = presentation::write_comparison(
            (first.as_str(), nav_a.values(), &metrics_a),
            (second.as_str(), nav_b.values(), &metrics_b),
            period,
            Utc::now(),
            Theme::from_dark_mode(config.display.dark_mode),
            &config.report.output_dir,
        )
        .context("Failed to write the comparison report")?;
        println!("📄 Report generated: {}", path.display());
    }
    Ok(())
}

fn generate_pair<R: rand::Rng>(
    generator: &mut SeriesGenerator<R>,
    period: Period,
) -> anyhow::Result<(NavSeries, NavSeries)> {
    Ok((generator.generate_for(period)?, generator.generate_for(period)?))
}

// ==============================================================================
// Helpers
// ==============================================================================

fn resolve_period(arg: Option<&str>, display: &DisplayConfig) -> Period {
    match arg {
        Some(label) => {
            if !Period::is_known_label(label) {
                tracing::warn!(label, "Unknown period, defaulting to {}", Period::default());
            }
            Period::from_label(label)
        }
        None => display.period(),
    }
}

fn warn_if_unlisted(fund_name: &str) {
    if find_fund(fund_name).is_none() {
        tracing::warn!(fund = fund_name, "Fund is not in the catalogue; analyzing anyway");
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_snapshot(snapshot: &FundSnapshot) {
    println!("\n📌 Analysis for: {}", snapshot.fund_name);
    if snapshot.article_count == 0 {
        println!("No relevant articles found. Showing general market insight.");
    }

    println!("\n🔎 Insight\n\n{}\n", snapshot.analysis.trim());

    if !snapshot.badges.is_empty() {
        println!("🏅 Performance Badges: {}\n", terminal::badge_line(&snapshot.badges));
    }

    println!("{}", terminal::sentiment_table(snapshot.sentiment));

    if !snapshot.sector_impacts.is_empty() {
        println!("\n📌 Sector Impact");
        println!("{}", terminal::sector_table(&snapshot.sector_impacts));
    }

    println!("\n📉 Volatility Metrics ({})", snapshot.period);
    println!("{}", terminal::metrics_table(&snapshot.metrics));
}
