use analytics::VolatilityMetrics;
use chrono::{DateTime, Utc};
use core_types::{BadgeSet, NavSeries, Period, SectorImpact, SentimentLabel};
use serde::Serialize;

/// Everything produced for one fund in one run, as handed to rendering and
/// export.
#[derive(Debug, Clone, Serialize)]
pub struct FundSnapshot {
    pub fund_name: String,
    pub period: Period,
    pub nav: NavSeries,
    pub returns: Vec<f64>,
    pub metrics: VolatilityMetrics,
    pub sentiment: SentimentLabel,
    pub sector_impacts: Vec<SectorImpact>,
    pub badges: BadgeSet,
    /// The model's free-form analysis text.
    pub analysis: String,
    /// Number of news articles that mentioned the fund.
    pub article_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl FundSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
