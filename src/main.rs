use analytics::{breakdown_shares, compare_periods, KpiCalculator};
use anyhow::{bail, Context};
use api_client::{MetricsFetcher, RpcClient};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use configuration::Settings;
use core_types::{DateRange, MetricSeries};
use pagination::{PaginationConfig, Paginator};
use serde_json::json;

mod render;

/// The main entry point for the Bizboard reporting tool.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, if present.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_settings().context("Failed to load settings")?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    let fetcher = MetricsFetcher::new(RpcClient::new(&settings.backend)?);

    // Execute the appropriate command
    match cli.command {
        Commands::Kpis(args) => handle_kpis(args, &fetcher).await,
        Commands::Compare(args) => handle_compare(args, &fetcher).await,
        Commands::Breakdown(args) => handle_breakdown(args, &fetcher, &settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial KPIs for a business dashboard, derived from the backend's aggregates.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the aggregate for a period and print the derived KPIs.
    Kpis(KpisArgs),
    /// Compare the KPIs of two periods.
    Compare(CompareArgs),
    /// Print one breakdown series, a page at a time.
    Breakdown(BreakdownArgs),
}

#[derive(Args)]
struct PeriodArgs {
    /// First day of the period (format: YYYY-MM-DD). Omit both bounds for all time.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the period (format: YYYY-MM-DD). Defaults to today when only --from is given.
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Args)]
struct KpisArgs {
    #[command(flatten)]
    period: PeriodArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// First day of the current period.
    #[arg(long)]
    from: NaiveDate,
    /// Last day of the current period.
    #[arg(long)]
    to: NaiveDate,
    /// First day of the period to compare against.
    #[arg(long)]
    prev_from: NaiveDate,
    /// Last day of the period to compare against.
    #[arg(long)]
    prev_to: NaiveDate,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BreakdownArgs {
    /// Which breakdown to print: clients, services or categories.
    #[arg(long)]
    series: MetricSeries,

    #[command(flatten)]
    period: PeriodArgs,

    /// Page to show; out-of-range values are clamped.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Rows per page. Defaults to `pagination.default_page_size`.
    #[arg(long)]
    page_size: Option<usize>,

    #[arg(long)]
    json: bool,
}

impl PeriodArgs {
    fn to_range(&self) -> anyhow::Result<Option<DateRange>> {
        match (self.from, self.to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => Ok(Some(DateRange::new(from, to)?)),
            (Some(from), None) => Ok(Some(DateRange::new(from, Utc::now().date_naive())?)),
            (None, Some(_)) => bail!("--to requires --from"),
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_kpis(args: KpisArgs, fetcher: &MetricsFetcher<RpcClient>) -> anyhow::Result<()> {
    let range = args.period.to_range()?;
    let metrics = fetcher.fetch(range).await?;
    let kpis = KpiCalculator::new().calculate(&metrics);

    if args.json {
        let output = json!({ "metrics": metrics, "kpis": kpis });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match range {
        Some(range) => println!("Period: {}", range),
        None => println!("Period: all time"),
    }
    println!("{}", render::kpi_table(&metrics, &kpis));
    Ok(())
}

async fn handle_compare(args: CompareArgs, fetcher: &MetricsFetcher<RpcClient>) -> anyhow::Result<()> {
    let current_range = DateRange::new(args.from, args.to)?;
    let previous_range = DateRange::new(args.prev_from, args.prev_to)?;

    let (current, previous) = tokio::try_join!(
        fetcher.fetch(Some(current_range)),
        fetcher.fetch(Some(previous_range)),
    )?;

    let calculator = KpiCalculator::new();
    let comparison = compare_periods(&calculator.calculate(&current), &calculator.calculate(&previous));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("Current: {}  Previous: {}", current_range, previous_range);
    println!("{}", render::comparison_table(&comparison));
    Ok(())
}

async fn handle_breakdown(
    args: BreakdownArgs,
    fetcher: &MetricsFetcher<RpcClient>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let range = args.period.to_range()?;
    let metrics = fetcher.fetch(range).await?;

    let rows = breakdown_shares(metrics.series(args.series));
    let page_size = args.page_size.unwrap_or(settings.pagination.default_page_size);
    let mut pager = Paginator::new(rows, PaginationConfig::with_page_size(page_size))?;
    pager.go_to_page(args.page);

    tracing::debug!(series = ?args.series, state = ?pager.state(), "Rendering breakdown page.");

    if args.json {
        let output = json!({ "items": pager.items(), "pagination": pager.state() });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render::breakdown_table(args.series, pager.items()));
    println!("{}", render::pagination_footer(&pager.state()));
    Ok(())
}
