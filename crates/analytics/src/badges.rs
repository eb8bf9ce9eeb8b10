use crate::engine::{population_std_dev, returns};
use core_types::{Badge, BadgeSet, Period};

/// Total gain (in percent) above which a fund is a top gainer.
pub const TOP_GAINER_THRESHOLD_PCT: f64 = 10.0;
/// Return standard deviation above which a fund is flagged as high risk.
pub const HIGH_RISK_STD_DEV: f64 = 1.5;
/// Number of matching articles at which a fund counts as trending.
pub const TRENDING_ARTICLE_COUNT: usize = 3;

const BUZZ_KEYWORDS: [&str; 2] = ["buzz", "trending"];

/// Derives the qualitative badges shown next to a fund.
///
/// Each rule is evaluated independently and the result is always ordered
/// gain, risk, buzz. A rule whose input would be non-finite (a zero first
/// NAV, or fewer than two points) is skipped instead of failing, so this
/// function never errors.
pub fn evaluate_badges(
    nav: &[f64],
    analysis: &str,
    article_count: usize,
    period: Period,
) -> BadgeSet {
    let mut badges = BadgeSet::new();

    if let Some(gain) = gain_pct(nav) {
        if gain > TOP_GAINER_THRESHOLD_PCT {
            badges.insert(Badge::TopGainer(period));
        }
    }

    if nav.len() >= 2 {
        let std_dev = population_std_dev(&returns(nav)).filter(|v| v.is_finite());
        if std_dev.is_some_and(|v| v > HIGH_RISK_STD_DEV) {
            badges.insert(Badge::HighRisk);
        }
    }

    if is_trending(analysis, article_count) {
        badges.insert(Badge::TrendingInNews);
    }

    tracing::debug!(badges = ?badges.labels(), "Evaluated badges");
    badges
}

/// Percentage change from the first to the last value, or `None` when the
/// series is empty or the result is not finite.
pub fn gain_pct(nav: &[f64]) -> Option<f64> {
    let first = *nav.first()?;
    let last = *nav.last()?;
    let gain = (last - first) / first * 100.0;
    gain.is_finite().then_some(gain)
}

fn is_trending(analysis: &str, article_count: usize) -> bool {
    if article_count >= TRENDING_ARTICLE_COUNT {
        return true;
    }
    let lowered = analysis.to_lowercase();
    BUZZ_KEYWORDS.iter().any(|k| lowered.contains(k))
}
