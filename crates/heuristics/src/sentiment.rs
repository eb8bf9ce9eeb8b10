use core_types::SentimentLabel;

/// Keywords in the order they are checked. The first one found wins, so a
/// text mentioning both "positive" and "bearish" is `Positive`.
const SENTIMENT_KEYWORDS: [(&str, SentimentLabel); 4] = [
    ("positive", SentimentLabel::Positive),
    ("negative", SentimentLabel::Negative),
    ("bullish", SentimentLabel::Bullish),
    ("bearish", SentimentLabel::Bearish),
];

/// Labels `text` by case-insensitive substring search for the keywords above,
/// falling back to `Neutral`.
pub fn classify_sentiment(text: &str) -> SentimentLabel {
    let lowered = text.to_lowercase();
    SENTIMENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(SentimentLabel::Neutral, |(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("markets remain positive but sentiment turned bearish", SentimentLabel::Positive)]
    #[case("A NEGATIVE quarter, though analysts stay bullish", SentimentLabel::Negative)]
    #[case("Traders are Bullish on banks", SentimentLabel::Bullish)]
    #[case("a bearish tilt in energy", SentimentLabel::Bearish)]
    #[case("Nothing notable happened today.", SentimentLabel::Neutral)]
    #[case("", SentimentLabel::Neutral)]
    fn test_classification(#[case] text: &str, #[case] expected: SentimentLabel) {
        assert_eq!(classify_sentiment(text), expected);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "positively" contains "positive"; the heuristic is substring based.
        assert_eq!(classify_sentiment("positively surprised"), SentimentLabel::Positive);
    }
}
