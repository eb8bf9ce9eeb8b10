use crate::markup::escape_html;
use crate::theme::Theme;
use chrono::{Duration, NaiveDate};
use core_types::{Period, SectorImpact};

// Roughly the proportions of a default Matplotlib figure.
const WIDTH: i32 = 576;
const HEIGHT: i32 = 288;
const PADDING: f64 = 40.0;
const DATE_TICKS: usize = 6;

pub const NAV_COLOR: &str = "teal";
pub const COMPARISON_COLORS: [&str; 2] = ["cyan", "magenta"];
pub const HISTOGRAM_COLOR: &str = "purple";
pub const SECTOR_COLOR: &str = "royalblue";
pub const HISTOGRAM_BINS: usize = 20;

/// Calendar dates for a series of `len` daily points ending yesterday:
/// point `i` is dated `today - (len - i)` days.
pub fn nav_dates(len: usize, today: NaiveDate) -> Vec<NaiveDate> {
    (0..len)
        .map(|i| today - Duration::days((len - i) as i64))
        .collect()
}

/// Line chart of a single NAV series against its dates.
///
/// Returns an empty string for an empty series.
pub fn nav_chart(
    nav: &[f64],
    fund_name: &str,
    period: Period,
    today: NaiveDate,
    theme: Theme,
) -> String {
    let Some((min_v, max_v)) = extent(nav.iter().copied()) else {
        return String::new();
    };

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let dates = nav_dates(nav.len(), today);
    let xs = x_positions(nav.len(), width);

    let mut svg = svg_header(theme);
    add_value_axis(&mut svg, min_v, max_v, width, height, theme);
    add_date_axis(&mut svg, &dates, &xs, height, theme);

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(nav)
        .map(|(x, v)| (*x, scale_value(*v, min_v, max_v, height)))
        .collect();
    svg.push_str(&polyline(&points, NAV_COLOR));
    svg.push_str(svg_footer());

    wrap_plot(&format!("{fund_name} - NAV over {period}"), svg)
}

/// Two NAV series on shared axes, with a legend.
///
/// The date axis follows the longer series; a shorter one is drawn from the
/// left edge.
pub fn comparison_chart(
    first: (&str, &[f64]),
    second: (&str, &[f64]),
    period: Period,
    today: NaiveDate,
    theme: Theme,
) -> String {
    let series = [first, second];
    let len = first.1.len().max(second.1.len());
    let Some((min_v, max_v)) = extent(series.iter().flat_map(|(_, v)| v.iter().copied())) else {
        return String::new();
    };

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let dates = nav_dates(len, today);
    let xs = x_positions(len, width);

    let mut svg = svg_header(theme);
    add_value_axis(&mut svg, min_v, max_v, width, height, theme);
    add_date_axis(&mut svg, &dates, &xs, height, theme);

    for ((_, values), color) in series.iter().zip(COMPARISON_COLORS) {
        let points: Vec<(f64, f64)> = xs
            .iter()
            .zip(values.iter())
            .map(|(x, v)| (*x, scale_value(*v, min_v, max_v, height)))
            .collect();
        svg.push_str(&polyline(&points, color));
    }

    let legend: Vec<(&str, &str)> = series
        .iter()
        .zip(COMPARISON_COLORS)
        .map(|((name, _), color)| (*name, color))
        .collect();
    draw_legend(&mut svg, &legend);
    svg.push_str(svg_footer());

    wrap_plot(&format!("NAV Comparison Over {period}"), svg)
}

/// Frequency histogram of daily returns in [`HISTOGRAM_BINS`] equal bins.
pub fn returns_histogram(returns: &[f64], theme: Theme) -> String {
    let finite: Vec<f64> = returns.iter().copied().filter(|v| v.is_finite()).collect();
    let Some((min_v, max_v)) = extent(finite.iter().copied()) else {
        return String::new();
    };
    let counts = histogram_counts(&finite, HISTOGRAM_BINS);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let inner_width = width - 2.0 * PADDING;
    let bar_width = inner_width / counts.len() as f64;

    let mut svg = svg_header(theme);
    add_value_axis(&mut svg, 0.0, max_count, width, height, theme);

    for (i, count) in counts.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let top = scale_value(*count as f64, 0.0, max_count, height);
        svg.push_str(&format!(
            r##"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}" stroke="#000000" stroke-width="0.5" />"##,
            x = PADDING + i as f64 * bar_width,
            y = top,
            w = bar_width,
            h = height - PADDING - top,
            fill = HISTOGRAM_COLOR,
        ));
    }

    // The lowest and highest return bound the x axis.
    let axis_y = height - PADDING + 14.0;
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="start">{label:.2}</text>"#,
        x = PADDING,
        y = axis_y,
        label = min_v
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end">{label:.2}</text>"#,
        x = width - PADDING,
        y = axis_y,
        label = max_v
    ));
    svg.push_str(svg_footer());

    wrap_plot("Distribution of Daily Returns", svg)
}

/// Bar chart of sector impacts in order of mention.
pub fn sector_chart(impacts: &[SectorImpact], theme: Theme) -> String {
    if impacts.is_empty() {
        return String::new();
    }

    let max_v = impacts
        .iter()
        .map(|i| i.percentage)
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let min_v = impacts.iter().map(|i| i.percentage).min().unwrap_or(0).min(0) as f64;

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let xs = x_positions(impacts.len(), width);
    let slot = (width - 2.0 * PADDING) / impacts.len() as f64;
    let bar_width = slot * 0.6;
    let zero = scale_value(0.0, min_v, max_v, height);

    let mut svg = svg_header(theme);
    add_value_axis(&mut svg, min_v, max_v, width, height, theme);

    for (impact, x) in impacts.iter().zip(&xs) {
        let y = scale_value(impact.percentage as f64, min_v, max_v, height);
        let (top, bottom) = if y < zero { (y, zero) } else { (zero, y) };
        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}" />"#,
            x = x - bar_width / 2.0,
            y = top,
            w = bar_width,
            h = bottom - top,
            fill = SECTOR_COLOR,
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end" transform="rotate(-45 {x:.2} {y:.2})">{label}</text>"#,
            x = x,
            y = height - PADDING + 12.0,
            label = escape_html(&impact.sector),
        ));
    }
    svg.push_str(&format!(
        r#"<text x="12" y="{y:.2}" text-anchor="middle" transform="rotate(-90 12 {y:.2})">Impact (%)</text>"#,
        y = height / 2.0
    ));
    svg.push_str(svg_footer());

    wrap_plot("Sector Impact", svg)
}

/// Counts `values` into `bins` equal-width bins spanning their range. The
/// maximum falls in the last bin. When every value is equal they all land in
/// the middle bin.
pub fn histogram_counts(values: &[f64], bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins.max(1)];
    let Some((min_v, max_v)) = raw_extent(values.iter().copied()) else {
        return counts;
    };

    let bins = counts.len();
    if min_v == max_v {
        counts[bins / 2] = values.iter().filter(|v| v.is_finite()).count();
        return counts;
    }

    let bin_width = (max_v - min_v) / bins as f64;
    for v in values.iter().filter(|v| v.is_finite()) {
        let idx = ((v - min_v) / bin_width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
}

fn raw_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Range of the finite values, widened when flat so scaling never divides
/// by zero.
fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min_v, max_v) = raw_extent(values)?;
    if min_v == max_v {
        let adjust = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 };
        return Some((min_v - adjust, max_v + adjust));
    }
    Some((min_v, max_v))
}

fn scale_value(value: f64, min_v: f64, max_v: f64, height: f64) -> f64 {
    if (max_v - min_v).abs() < f64::EPSILON {
        return height / 2.0;
    }
    let inner_height = height - 2.0 * PADDING;
    let norm = (value - min_v) / (max_v - min_v);
    PADDING + (1.0 - norm) * inner_height
}

fn x_positions(len: usize, width: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![width / 2.0],
        _ => {
            let inner_width = width - 2.0 * PADDING;
            (0..len)
                .map(|i| PADDING + inner_width * (i as f64 / (len - 1) as f64))
                .collect()
        }
    }
}

fn svg_header(theme: Theme) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:{fg}}}</style><rect width="100%" height="100%" fill="{bg}" />"#,
        w = WIDTH,
        h = HEIGHT,
        fg = theme.foreground(),
        bg = theme.background(),
    )
}

fn svg_footer() -> &'static str {
    "</svg>"
}

fn wrap_plot(title: &str, svg_body: String) -> String {
    format!(
        r#"<div class="fl-plot"><div class="fl-plot-title">{title}</div>{svg}</div>"#,
        title = escape_html(title),
        svg = svg_body
    )
}

fn polyline(points: &[(f64, f64)], stroke: &str) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords = points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#"<polyline fill="none" stroke="{stroke}" stroke-width="1.5" points="{coords}" />"#)
}

fn draw_legend(svg: &mut String, entries: &[(&str, &str)]) {
    let x = PADDING + 10.0;
    let mut y = PADDING + 14.0;
    for (label, color) in entries {
        svg.push_str(&format!(
            r#"<line x1="{x1:.2}" y1="{ly:.2}" x2="{x2:.2}" y2="{ly:.2}" stroke="{color}" stroke-width="2" />"#,
            x1 = x,
            x2 = x + 20.0,
            ly = y - 4.0,
        ));
        svg.push_str(&format!(
            r#"<text x="{tx:.2}" y="{y:.2}" text-anchor="start">{label}</text>"#,
            tx = x + 26.0,
            label = escape_html(label),
        ));
        y += 16.0;
    }
}

fn add_value_axis(svg: &mut String, min_v: f64, max_v: f64, width: f64, height: f64, theme: Theme) {
    for value in [min_v, (min_v + max_v) / 2.0, max_v] {
        let y = scale_value(value, min_v, max_v, height);
        svg.push_str(&format!(
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="0.5" />"#,
            x1 = PADDING,
            x2 = width - PADDING,
            color = theme.muted(),
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{ty:.2}" text-anchor="end">{value:.2}</text>"#,
            x = PADDING - 4.0,
            ty = y + 3.0,
        ));
    }
}

fn add_date_axis(svg: &mut String, dates: &[NaiveDate], xs: &[f64], height: f64, theme: Theme) {
    if dates.is_empty() || xs.is_empty() {
        return;
    }
    let axis_y = height - PADDING;
    let step = (dates.len() / DATE_TICKS).max(1);

    for (idx, (date, x)) in dates.iter().zip(xs).enumerate() {
        if idx % step != 0 && idx != dates.len() - 1 {
            continue;
        }
        svg.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="{color}" stroke-width="1" />"#,
            y1 = axis_y,
            y2 = axis_y + 4.0,
            color = theme.muted(),
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{label}</text>"#,
            y = axis_y + 16.0,
            label = date.format("%b %d"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn test_nav_dates_end_the_day_before_today() {
        let dates = nav_dates(30, today());
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dates[29], NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
    }

    #[test]
    fn test_histogram_counts_cover_every_value() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 10.0 - 5.0).collect();
        let counts = histogram_counts(&values, HISTOGRAM_BINS);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts.iter().sum::<usize>(), 100);
        assert_eq!(counts[0], 5);
        assert_eq!(counts[19], 5);
    }

    #[test]
    fn test_histogram_of_flat_returns_uses_middle_bin() {
        let counts = histogram_counts(&[0.0, 0.0, 0.0], HISTOGRAM_BINS);
        assert_eq!(counts[10], 3);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_skips_non_finite_values() {
        let counts = histogram_counts(&[1.0, f64::NAN, 2.0, f64::INFINITY], 4);
        assert_eq!(counts, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_nav_chart_uses_theme_and_escapes_title() {
        let svg = nav_chart(&[100.0, 101.0, 99.5], "A&B <Fund>", Period::OneMonth, today(), Theme::Dark);
        assert!(svg.contains("A&amp;B &lt;Fund&gt; - NAV over 1mo"));
        assert!(svg.contains(r#"stroke="teal""#));
        assert!(svg.contains("#1e1e1e"));
        assert!(svg.contains("Mar 30"));
    }

    #[test]
    fn test_comparison_chart_has_both_series_and_legend() {
        let svg = comparison_chart(
            ("Fund One", &[100.0, 101.0][..]),
            ("Fund Two", &[99.0, 98.0][..]),
            Period::ThreeMonths,
            today(),
            Theme::Light,
        );
        assert!(svg.contains(r#"stroke="cyan""#));
        assert!(svg.contains(r#"stroke="magenta""#));
        assert!(svg.contains("Fund One"));
        assert!(svg.contains("Fund Two"));
        assert!(svg.contains("NAV Comparison Over 3mo"));
    }

    #[test]
    fn test_sector_chart_draws_one_bar_per_impact() {
        let impacts = vec![SectorImpact::new("IT", 6), SectorImpact::new("Pharma", 3)];
        let svg = sector_chart(&impacts, Theme::Light);
        assert_eq!(svg.matches(r#"fill="royalblue""#).count(), 2);
        assert!(svg.contains(">Pharma<"));
    }

    #[test]
    fn test_empty_inputs_render_nothing() {
        assert!(nav_chart(&[], "x", Period::OneMonth, today(), Theme::Light).is_empty());
        assert!(returns_histogram(&[], Theme::Light).is_empty());
        assert!(sector_chart(&[], Theme::Light).is_empty());
    }
}
