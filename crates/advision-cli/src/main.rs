mod commands;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use advision_core::AdFilter;

#[derive(Debug, Parser)]
#[command(name = "advision-cli")]
#[command(about = "AdVision command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog ads matching a filter
    Ads(FilterArgs),
    /// Analyze the matching ads
    Analyze(FilterArgs),
    /// Analyze the matching ads and aggregate an insights report
    Insights(FilterArgs),
    /// Ask the marketing assistant a question
    Ask(AskArgs),
}

/// Catalog filter. List options take comma-separated values.
#[derive(Debug, Args, PartialEq, Eq)]
struct FilterArgs {
    /// Case-insensitive text search over body, business type, category and audience
    #[arg(short, long, default_value = "")]
    query: String,

    #[arg(long, value_delimiter = ',')]
    country: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    business_type: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    category: Vec<String>,

    #[arg(long, default_value_t = 0)]
    min_spend: u64,

    #[arg(long, default_value_t = 100_000)]
    max_spend: u64,

    #[arg(long, default_value_t = 0)]
    min_impressions: u64,

    #[arg(long, default_value_t = 1_000_000)]
    max_impressions: u64,

    #[arg(long, default_value_t = 12)]
    limit: usize,

    #[arg(long, default_value_t = 0)]
    offset: usize,
}

impl FilterArgs {
    fn to_filter(&self) -> AdFilter {
        AdFilter {
            search_query: self.query.clone(),
            countries: self.country.clone(),
            business_types: self.business_type.clone(),
            categories: self.category.clone(),
            min_spend: self.min_spend,
            max_spend: self.max_spend,
            min_impressions: self.min_impressions,
            max_impressions: self.max_impressions,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Args, PartialEq, Eq)]
struct AskArgs {
    question: String,

    #[arg(long)]
    business_type: Option<String>,

    #[arg(long)]
    industry: Option<String>,

    #[arg(long)]
    budget: Option<String>,

    #[arg(long)]
    timeline: Option<String>,

    /// Repeatable
    #[arg(long = "goal")]
    goals: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = advision_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Ads(args)) => commands::run_ads(&config, &args.to_filter())?,
        Some(Commands::Analyze(args)) => commands::run_analyze(&config, &args.to_filter()).await?,
        Some(Commands::Insights(args)) => {
            commands::run_insights(&config, &args.to_filter()).await?;
        }
        Some(Commands::Ask(args)) => commands::run_ask(&config, args).await?,
        None => println!("advision-cli: run with --help to list commands"),
    }

    Ok(())
}
