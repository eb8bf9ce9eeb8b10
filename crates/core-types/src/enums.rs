use serde::{Deserialize, Serialize};
use std::fmt;

/// The chart horizon selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
    ];

    /// Resolves a horizon label such as `"3mo"`.
    ///
    /// Unrecognized labels fall back to one month rather than failing, so a
    /// typo still produces a chart.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "3mo" => Period::ThreeMonths,
            "6mo" => Period::SixMonths,
            "1y" => Period::OneYear,
            _ => Period::OneMonth,
        }
    }

    /// Returns true if `label` names one of the four horizons exactly.
    pub fn is_known_label(label: &str) -> bool {
        Self::ALL.iter().any(|p| p.label() == label.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
        }
    }

    /// Number of synthetic daily NAV points generated for this horizon.
    pub fn days(&self) -> usize {
        match self {
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse tone of a piece of analysis text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// The display color used wherever the label is rendered.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "green",
            SentimentLabel::Negative => "red",
            SentimentLabel::Bullish => "blue",
            SentimentLabel::Bearish => "orange",
            SentimentLabel::Neutral => "gray",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a catalogued fund is domiciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    India,
    Europe,
    Us,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::India => "India",
            Region::Europe => "Europe",
            Region::Us => "US",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1mo", 30)]
    #[case("3mo", 90)]
    #[case("6mo", 180)]
    #[case("1y", 365)]
    #[case("2y", 30)]
    #[case("", 30)]
    fn period_label_maps_to_days(#[case] label: &str, #[case] days: usize) {
        assert_eq!(Period::from_label(label).days(), days);
    }

    #[test]
    fn period_labels_round_trip() {
        for period in Period::ALL {
            assert_eq!(Period::from_label(period.label()), period);
            assert!(Period::is_known_label(period.label()));
        }
        assert!(!Period::is_known_label("5y"));
    }

    #[test]
    fn defaults_are_one_month_and_neutral() {
        assert_eq!(Period::default(), Period::OneMonth);
        assert_eq!(Period::default(), Period::from_label("unknown"));
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[rstest]
    #[case(SentimentLabel::Positive, "green")]
    #[case(SentimentLabel::Negative, "red")]
    #[case(SentimentLabel::Bullish, "blue")]
    #[case(SentimentLabel::Bearish, "orange")]
    #[case(SentimentLabel::Neutral, "gray")]
    fn sentiment_colors(#[case] label: SentimentLabel, #[case] color: &str) {
        assert_eq!(label.color(), color);
    }

    #[test]
    fn period_serializes_as_label() {
        let json = serde_json::to_string(&Period::SixMonths).unwrap();
        assert_eq!(json, "\"6mo\"");
    }
}
