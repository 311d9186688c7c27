//! Command handlers. Each prints its result as pretty JSON on stdout.

use anyhow::Context;
use serde::Serialize;

use advision_core::{AdCatalog, AdFilter, AdRecord, AppConfig};
use advision_engine::{Engine, UserContext};

use crate::AskArgs;

fn load_catalog(config: &AppConfig) -> anyhow::Result<AdCatalog> {
    AdCatalog::from_path(&config.catalog_path)
        .with_context(|| format!("loading catalog from {}", config.catalog_path.display()))
}

fn load_engine(config: &AppConfig) -> anyhow::Result<Engine> {
    let engine = Engine::from_config(config)?;
    if !engine.generation_configured() {
        tracing::info!("GEMINI_APIKEY not set; using heuristic analysis");
    }
    Ok(engine)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Matching ads, or an error naming the empty filter result.
fn select_ads(config: &AppConfig, filter: &AdFilter) -> anyhow::Result<Vec<AdRecord>> {
    let catalog = load_catalog(config)?;
    let ads: Vec<AdRecord> = catalog.filter(filter).into_iter().cloned().collect();
    if ads.is_empty() {
        anyhow::bail!("no ads match the given filter");
    }
    Ok(ads)
}

pub(crate) fn run_ads(config: &AppConfig, filter: &AdFilter) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let ads = catalog.filter(filter);
    tracing::debug!(returned = ads.len(), total = catalog.count(filter), "filtered catalog");
    print_json(&ads)
}

pub(crate) async fn run_analyze(config: &AppConfig, filter: &AdFilter) -> anyhow::Result<()> {
    let ads = select_ads(config, filter)?;
    let analyses = load_engine(config)?.analyze_batch(&ads).await?;
    print_json(&analyses)
}

pub(crate) async fn run_insights(config: &AppConfig, filter: &AdFilter) -> anyhow::Result<()> {
    let ads = select_ads(config, filter)?;
    let engine = load_engine(config)?;
    let analyses = engine.analyze_batch(&ads).await?;
    let report = engine.aggregate_insights(&analyses).await?;
    print_json(&report)
}

pub(crate) async fn run_ask(config: &AppConfig, args: AskArgs) -> anyhow::Result<()> {
    let context = UserContext {
        business_type: args.business_type,
        industry: args.industry,
        budget: args.budget,
        timeline: args.timeline,
        goals: args.goals,
    };
    let answer = load_engine(config)?
        .answer_question(&args.question, Some(&context), &[])
        .await;
    print_json(&serde_json::json!({ "answer": answer }))
}
