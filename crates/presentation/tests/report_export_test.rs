use analytics::{AnalyticsEngine, evaluate_badges, returns};
use chrono::{TimeZone, Utc};
use core_types::{NavSeries, Period, SectorImpact, SentimentLabel};
use presentation::{FundSnapshot, Theme, write_comparison, write_report, write_snapshot_json};

fn snapshot() -> FundSnapshot {
    let nav = NavSeries::new(vec![100.0, 105.5, 115.0]).unwrap();
    let metrics = AnalyticsEngine::new().compute_metrics(&nav).unwrap();
    let analysis = "Outlook is positive.\n\nIT sector rose 6% <as expected> & Pharma gained 3%.";
    FundSnapshot {
        fund_name: "HDFC Top 100 Fund".to_string(),
        period: Period::ThreeMonths,
        returns: returns(&nav),
        badges: evaluate_badges(&nav, analysis, 1, Period::ThreeMonths),
        nav,
        metrics,
        sentiment: SentimentLabel::Positive,
        sector_impacts: vec![SectorImpact::new("IT", 6), SectorImpact::new("Pharma", 3)],
        analysis: analysis.to_string(),
        article_count: 1,
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_report_is_written_with_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports");

    let path = write_report(&snapshot(), Theme::Light, &out).unwrap();
    assert_eq!(path, out.join("HDFC_Top_100_Fund_analysis.html"));

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Analysis for HDFC Top 100 Fund"));
    assert!(html.contains("&lt;as expected&gt; &amp; Pharma"));
    assert!(html.contains("Top Gainer 3mo"));
    assert!(html.contains("High Risk"));
    assert!(html.contains(r#"<h3 style="color:green">Positive</h3>"#));
    assert!(html.contains("HDFC Top 100 Fund - NAV over 3mo"));
    assert!(html.contains("Distribution of Daily Returns"));
    assert!(html.contains("Sector Impact"));
    assert!(html.contains("<code>2.0000</code>"));
    assert!(html.contains("Period 3mo"));
}

#[test]
fn test_snapshot_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot_json(&snapshot(), dir.path()).unwrap();
    assert!(path.ends_with("HDFC_Top_100_Fund_analysis.json"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["fund_name"], "HDFC Top 100 Fund");
    assert_eq!(value["period"], "3mo");
    assert_eq!(value["nav"].as_array().unwrap().len(), 3);
    assert_eq!(value["returns"].as_array().unwrap().len(), 2);
    assert_eq!(value["sentiment"], "Positive");
    assert_eq!(value["badges"][0], "Top Gainer 3mo");
    assert_eq!(value["sector_impacts"][1]["sector"], "Pharma");
    assert_eq!(value["article_count"], 1);
}

#[test]
fn test_comparison_report() {
    let dir = tempfile::tempdir().unwrap();
    let engine = AnalyticsEngine::new();
    let a = [100.0, 101.0, 102.0];
    let b = [100.0, 99.0, 98.5];
    let (ma, mb) = (
        engine.compute_metrics(&a).unwrap(),
        engine.compute_metrics(&b).unwrap(),
    );

    let path = write_comparison(
        ("Fund A", &a[..], &ma),
        ("Fund B", &b[..], &mb),
        Period::OneMonth,
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        Theme::Dark,
        dir.path(),
    )
    .unwrap();

    assert!(path.ends_with("Fund_A_vs_Fund_B_comparison.html"));
    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains("NAV Comparison Over 1mo"));
    assert!(html.contains("#1e1e1e"));
    assert!(html.contains("magenta"));
}
