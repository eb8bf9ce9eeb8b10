use analytics::VolatilityMetrics;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use core_types::{Badge, BadgeSet, FundEntry, SectorImpact, SentimentLabel};

pub fn format_std_dev(metrics: &VolatilityMetrics) -> String {
    format!("{:.4}", metrics.std_dev)
}

pub fn format_sharpe(metrics: &VolatilityMetrics) -> String {
    format!("{:.4}", metrics.sharpe_ratio)
}

/// Drawdown as a percentage with two decimals, e.g. `18.18%`.
pub fn format_max_drawdown(metrics: &VolatilityMetrics) -> String {
    format!("{:.2}%", metrics.max_drawdown_pct())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            header
                .into_iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    table
}

pub fn metrics_table(metrics: &VolatilityMetrics) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Standard Deviation (NAV Return Volatility)"),
        Cell::new(format_std_dev(metrics)),
    ]);
    table.add_row(vec![
        Cell::new("Sharpe Ratio (Risk-adjusted Return)"),
        Cell::new(format_sharpe(metrics)).fg(if metrics.sharpe_ratio >= 0.0 {
            Color::Green
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![
        Cell::new("Maximum Drawdown"),
        Cell::new(format_max_drawdown(metrics)),
    ]);
    table
}

/// Side-by-side metrics for two funds.
pub fn comparison_table(
    first: (&str, &VolatilityMetrics),
    second: (&str, &VolatilityMetrics),
) -> Table {
    let mut table = new_table(vec!["Metric", first.0, second.0]);
    table.add_row(vec![
        "Standard Deviation".to_string(),
        format_std_dev(first.1),
        format_std_dev(second.1),
    ]);
    table.add_row(vec![
        "Sharpe Ratio".to_string(),
        format_sharpe(first.1),
        format_sharpe(second.1),
    ]);
    table.add_row(vec![
        "Maximum Drawdown".to_string(),
        format_max_drawdown(first.1),
        format_max_drawdown(second.1),
    ]);
    table
}

pub fn sector_table(impacts: &[SectorImpact]) -> Table {
    let mut table = new_table(vec!["Sector", "Impact (%)"]);
    for impact in impacts {
        table.add_row(vec![
            Cell::new(&impact.sector),
            Cell::new(impact.percentage.to_string()),
        ]);
    }
    table
}

pub fn catalog_table<'a>(entries: impl IntoIterator<Item = &'a FundEntry>) -> Table {
    let mut table = new_table(vec!["#", "Fund", "Region"]);
    for (i, entry) in entries.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(entry.name),
            Cell::new(entry.region.as_str()),
        ]);
    }
    table
}

fn badge_icon(badge: &Badge) -> &'static str {
    match badge {
        Badge::TopGainer(_) => "🏆",
        Badge::HighRisk => "🔻",
        Badge::TrendingInNews => "🔥",
    }
}

/// All badges on one line, each prefixed with its icon. Empty when there are
/// no badges.
pub fn badge_line(badges: &BadgeSet) -> String {
    badges
        .iter()
        .map(|b| format!("{} {b}", badge_icon(b)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn sentiment_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Bullish => Color::Blue,
        SentimentLabel::Bearish => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        SentimentLabel::Neutral => Color::Grey,
    }
}

/// A one-row table holding the coloured sentiment label.
pub fn sentiment_table(label: SentimentLabel) -> Table {
    let mut table = new_table(vec!["Sentiment"]);
    table.add_row(vec![Cell::new(label.as_str()).fg(sentiment_color(label))]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Period, Region};
    use rstest::rstest;

    fn metrics() -> VolatilityMetrics {
        VolatilityMetrics {
            std_dev: 1.0,
            mean_return: 0.0,
            sharpe_ratio: -0.0001,
            max_drawdown: 20.0 / 110.0,
        }
    }

    #[test]
    fn test_metric_formatting() {
        let m = metrics();
        assert_eq!(format_std_dev(&m), "1.0000");
        assert_eq!(format_sharpe(&m), "-0.0001");
        assert_eq!(format_max_drawdown(&m), "18.18%");
    }

    #[test]
    fn test_metrics_table_lists_all_rows() {
        let rendered = metrics_table(&metrics()).to_string();
        assert!(rendered.contains("Standard Deviation"));
        assert!(rendered.contains("Sharpe Ratio"));
        assert!(rendered.contains("18.18%"));
    }

    #[test]
    fn test_comparison_table_has_fund_columns() {
        let m = metrics();
        let rendered = comparison_table(("Alpha", &m), ("Beta", &m)).to_string();
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("Beta"));
    }

    #[test]
    fn test_badge_line() {
        let mut badges = BadgeSet::new();
        assert_eq!(badge_line(&badges), "");
        badges.insert(Badge::TopGainer(Period::OneMonth));
        badges.insert(Badge::TrendingInNews);
        assert_eq!(badge_line(&badges), "🏆 Top Gainer 1mo  🔥 Trending in News");
    }

    #[rstest]
    #[case(SentimentLabel::Positive, Color::Green)]
    #[case(SentimentLabel::Negative, Color::Red)]
    #[case(SentimentLabel::Bullish, Color::Blue)]
    #[case(SentimentLabel::Bearish, Color::Rgb { r: 255, g: 165, b: 0 })]
    #[case(SentimentLabel::Neutral, Color::Grey)]
    fn test_sentiment_colors(#[case] label: SentimentLabel, #[case] expected: Color) {
        assert_eq!(sentiment_color(label), expected);
    }

    #[test]
    fn test_catalog_table_numbers_rows() {
        let entries = [FundEntry {
            name: "Vanguard 500 Index Fund",
            region: Region::Us,
        }];
        let rendered = catalog_table(entries.iter()).to_string();
        assert!(rendered.contains("Vanguard 500 Index Fund"));
        assert!(rendered.contains("US"));
    }
}
