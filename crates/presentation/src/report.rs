use crate::charts;
use crate::error::PresentationError;
use crate::markup::escape_html;
use crate::snapshot::FundSnapshot;
use crate::terminal::{format_max_drawdown, format_sharpe, format_std_dev};
use crate::theme::Theme;
use analytics::VolatilityMetrics;
use chrono::{DateTime, Utc};
use core_types::Period;
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { background: {{background}}; color: {{foreground}}; font-family: Arial, sans-serif; max-width: 960px; margin: 0 auto; padding: 24px; }
section { background: {{panel}}; border-radius: 6px; padding: 12px 16px; margin-bottom: 16px; }
table { border-collapse: collapse; }
td, th { padding: 4px 12px; text-align: left; }
.fl-plot-title { font-weight: bold; margin-bottom: 4px; }
.fl-badges span { margin-right: 12px; font-weight: bold; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<p>{{subtitle}}</p>
{{body}}
</body>
</html>
"#;

/// `"<fund name with spaces as underscores>_analysis.html"`.
pub fn report_file_name(fund_name: &str) -> String {
    format!("{}_analysis.html", file_stem(fund_name))
}

pub fn comparison_file_name(first: &str, second: &str) -> String {
    format!("{}_vs_{}_comparison.html", file_stem(first), file_stem(second))
}

fn file_stem(fund_name: &str) -> String {
    fund_name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            _ => c,
        })
        .collect()
}

fn fill_template(title: &str, subtitle: &str, body: &str, theme: Theme) -> String {
    REPORT_TEMPLATE
        .replace("{{background}}", theme.background())
        .replace("{{foreground}}", theme.foreground())
        .replace("{{panel}}", theme.panel())
        .replace("{{title}}", &escape_html(title))
        .replace("{{subtitle}}", &escape_html(subtitle))
        .replace("{{body}}", body)
}

fn section(heading: &str, content: &str) -> String {
    format!("<section><h2>{}</h2>{content}</section>\n", escape_html(heading))
}

/// Analysis text as paragraphs, split on blank lines.
fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect()
}

fn metrics_rows(metrics: &VolatilityMetrics) -> String {
    [
        ("Standard Deviation (NAV Return Volatility)", format_std_dev(metrics)),
        ("Sharpe Ratio (Risk-adjusted Return)", format_sharpe(metrics)),
        ("Maximum Drawdown", format_max_drawdown(metrics)),
    ]
    .iter()
    .map(|(name, value)| format!("<tr><td>{name}</td><td><code>{value}</code></td></tr>"))
    .collect()
}

/// Renders the full single-fund report as a standalone HTML document.
pub fn render_report(snapshot: &FundSnapshot, theme: Theme) -> String {
    let today = snapshot.generated_at.date_naive();
    let mut body = String::new();

    body.push_str(&section("Insight", &paragraphs(&snapshot.analysis)));

    if !snapshot.badges.is_empty() {
        let badges: String = snapshot
            .badges
            .iter()
            .map(|b| format!("<span>{}</span>", escape_html(&b.to_string())))
            .collect();
        body.push_str(&section(
            "Performance Badges",
            &format!(r#"<div class="fl-badges">{badges}</div>"#),
        ));
    }

    body.push_str(&section(
        "Sentiment",
        &format!(
            r#"<h3 style="color:{}">{}</h3>"#,
            snapshot.sentiment.color(),
            snapshot.sentiment
        ),
    ));

    if !snapshot.sector_impacts.is_empty() {
        body.push_str(&section(
            "Sector Impact",
            &charts::sector_chart(&snapshot.sector_impacts, theme),
        ));
    }

    body.push_str(&section(
        "NAV Performance",
        &charts::nav_chart(&snapshot.nav, &snapshot.fund_name, snapshot.period, today, theme),
    ));
    body.push_str(&section(
        "Return Distribution",
        &charts::returns_histogram(&snapshot.returns, theme),
    ));
    body.push_str(&section(
        "Volatility Metrics",
        &format!("<table>{}</table>", metrics_rows(&snapshot.metrics)),
    ));

    let subtitle = format!(
        "Period {} · {} related articles · generated {}",
        snapshot.period,
        snapshot.article_count,
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    fill_template(
        &format!("Analysis for {}", snapshot.fund_name),
        &subtitle,
        &body,
        theme,
    )
}

/// Renders a two-fund NAV comparison with both metric tables.
pub fn render_comparison(
    first: (&str, &[f64], &VolatilityMetrics),
    second: (&str, &[f64], &VolatilityMetrics),
    period: Period,
    generated_at: DateTime<Utc>,
    theme: Theme,
) -> String {
    let today = generated_at.date_naive();
    let mut body = section(
        "NAV Comparison",
        &charts::comparison_chart((first.0, first.1), (second.0, second.1), period, today, theme),
    );
    for (name, _, metrics) in [first, second] {
        body.push_str(&section(
            name,
            &format!("<table>{}</table>", metrics_rows(metrics)),
        ));
    }

    fill_template(
        &format!("NAV Comparison: {} vs {}", first.0, second.0),
        &format!("Period {period}"),
        &body,
        theme,
    )
}

fn write_file(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, PresentationError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), "Report written");
    Ok(path)
}

/// Writes the HTML report into `dir`, creating it if needed, and returns the
/// file path.
pub fn write_report(
    snapshot: &FundSnapshot,
    theme: Theme,
    dir: &Path,
) -> Result<PathBuf, PresentationError> {
    let html = render_report(snapshot, theme);
    write_file(dir, &report_file_name(&snapshot.fund_name), &html)
}

/// Writes the snapshot as pretty JSON next to the HTML report.
pub fn write_snapshot_json(
    snapshot: &FundSnapshot,
    dir: &Path,
) -> Result<PathBuf, PresentationError> {
    let json = snapshot.to_json()?;
    let file_name = format!("{}_analysis.json", file_stem(&snapshot.fund_name));
    write_file(dir, &file_name, &json)
}

pub fn write_comparison(
    first: (&str, &[f64], &VolatilityMetrics),
    second: (&str, &[f64], &VolatilityMetrics),
    period: Period,
    generated_at: DateTime<Utc>,
    theme: Theme,
    dir: &Path,
) -> Result<PathBuf, PresentationError> {
    let html = render_comparison(first, second, period, generated_at, theme);
    write_file(dir, &comparison_file_name(first.0, second.0), &html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_replace_spaces() {
        assert_eq!(report_file_name("Fund Name"), "Fund_Name_analysis.html");
        assert_eq!(
            report_file_name("Franklin India Prima Fund"),
            "Franklin_India_Prima_Fund_analysis.html"
        );
        assert_eq!(comparison_file_name("A B", "C/D"), "A_B_vs_C_D_comparison.html");
    }

    #[test]
    fn test_paragraphs_escape_and_split() {
        assert_eq!(
            paragraphs("First <b>line</b>\nwraps\n\n\nSecond & last"),
            "<p>First &lt;b&gt;line&lt;/b&gt;<br>wraps</p><p>Second &amp; last</p>"
        );
    }

    #[test]
    fn test_template_applies_dark_theme() {
        let html = fill_template("T", "S", "", Theme::Dark);
        assert!(html.contains("background: #1e1e1e"));
        assert!(html.contains("background: #333333"));
        assert!(html.contains("color: #ffffff"));
    }
}
