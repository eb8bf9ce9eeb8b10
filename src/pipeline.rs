use analytics::{AnalyticsEngine, SeriesGenerator, evaluate_badges, returns};
use anyhow::Context;
use api_client::{InsightProvider, NewsSource, build_prompt};
use chrono::Utc;
use core_types::Period;
use heuristics::{classify_sentiment, extract_sector_impacts};
use presentation::FundSnapshot;
use rand::Rng;

/// Runs the full analysis for one fund: synthetic NAV and its statistics,
/// news lookup, model insight, then the text heuristics and badges.
///
/// News failures only shrink the article set. A model failure aborts the
/// analysis for this fund.
pub async fn analyze_fund<R: Rng>(
    news: &dyn NewsSource,
    insights: &dyn InsightProvider,
    generator: &mut SeriesGenerator<R>,
    fund_name: &str,
    period: Period,
    max_prompt_articles: usize,
) -> anyhow::Result<FundSnapshot> {
    let nav = generator
        .generate_for(period)
        .context("Failed to generate NAV series")?;
    let metrics = AnalyticsEngine::new()
        .compute_metrics(&nav)
        .context("Failed to compute volatility metrics")?;

    let articles = match news.fetch_articles(fund_name).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::warn!(fund = fund_name, error = %e, "News lookup failed, continuing without articles");
            Vec::new()
        }
    };
    if articles.is_empty() {
        tracing::warn!(fund = fund_name, "No relevant articles found, using general market prompt");
    }

    let prompt = build_prompt(fund_name, &articles, max_prompt_articles);
    let analysis = insights
        .generate(&prompt)
        .await
        .with_context(|| format!("Model request failed for '{fund_name}'"))?;

    let sentiment = classify_sentiment(&analysis);
    let sector_impacts = extract_sector_impacts(&analysis);
    let badges = evaluate_badges(&nav, &analysis, articles.len(), period);

    tracing::info!(
        fund = fund_name,
        %period,
        %sentiment,
        sectors = sector_impacts.len(),
        badges = badges.len(),
        "Analysis complete"
    );

    Ok(FundSnapshot {
        fund_name: fund_name.to_string(),
        period,
        returns: returns(&nav),
        nav,
        metrics,
        sentiment,
        sector_impacts,
        badges,
        analysis,
        article_count: articles.len(),
        generated_at: Utc::now(),
    })
}
