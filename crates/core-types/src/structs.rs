use crate::enums::Period;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The minimum number of NAV points needed to derive a single return.
pub const MIN_NAV_POINTS: usize = 2;

/// A daily sequence of (synthetic) net asset values for one fund.
///
/// Construction guarantees at least two points and that every value is
/// finite and strictly positive, so downstream statistics never divide by
/// zero or produce NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct NavSeries(Vec<f64>);

impl NavSeries {
    pub fn new(values: Vec<f64>) -> Result<Self, CoreError> {
        if values.len() < MIN_NAV_POINTS {
            return Err(CoreError::InsufficientData {
                required: MIN_NAV_POINTS,
                actual: values.len(),
            });
        }
        if let Some((idx, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(CoreError::InvalidInput(
                "nav".to_string(),
                format!("value {v} at index {idx} is not a positive finite number"),
            ));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn first_value(&self) -> f64 {
        self.0[0]
    }

    pub fn last_value(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for NavSeries {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for NavSeries {
    type Error = CoreError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<NavSeries> for Vec<f64> {
    fn from(series: NavSeries) -> Self {
        series.0
    }
}

/// A sector and the percentage figure quoted next to it in analysis text.
///
/// The percentage is the literal number found in the text. The verb
/// ("rose", "fell", ...) does not change its sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorImpact {
    pub sector: String,
    pub percentage: i64,
}

impl SectorImpact {
    pub fn new(sector: impl Into<String>, percentage: i64) -> Self {
        Self {
            sector: sector.into(),
            percentage,
        }
    }
}

/// A qualitative label summarising a derived condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Badge {
    TopGainer(Period),
    HighRisk,
    TrendingInNews,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::TopGainer(period) => write!(f, "Top Gainer {period}"),
            Badge::HighRisk => f.write_str("High Risk"),
            Badge::TrendingInNews => f.write_str("Trending in News"),
        }
    }
}

impl From<Badge> for String {
    fn from(badge: Badge) -> Self {
        badge.to_string()
    }
}

/// An ordered, duplicate-free collection of badges.
///
/// Order is insertion order, which the evaluator keeps as gain, risk, buzz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BadgeSet(Vec<Badge>);

impl BadgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `badge` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, badge: Badge) -> bool {
        if self.0.contains(&badge) {
            return false;
        }
        self.0.push(badge);
        true
    }

    pub fn contains(&self, badge: &Badge) -> bool {
        self.0.contains(badge)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Badge> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a BadgeSet {
    type Item = &'a Badge;
    type IntoIter = std::slice::Iter<'a, Badge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single news item read from one of the configured feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    /// The feed URL this article was read from.
    pub source: String,
}

impl Article {
    /// Title and summary joined the way they are quoted in prompts.
    pub fn headline(&self) -> String {
        if self.summary.is_empty() {
            format!("{}.", self.title)
        } else {
            format!("{}. {}", self.title, self.summary)
        }
    }

    /// Returns true if any whitespace-separated word of `fund_name`
    /// (lower-cased) occurs in the title or summary.
    pub fn mentions(&self, fund_name: &str) -> bool {
        let title = self.title.to_lowercase();
        let summary = self.summary.to_lowercase();
        fund_name
            .to_lowercase()
            .split_whitespace()
            .any(|word| title.contains(word) || summary.contains(word))
    }
}
