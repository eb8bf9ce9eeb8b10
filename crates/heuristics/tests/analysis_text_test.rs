//! Runs both heuristics over text shaped like a typical model response.

use core_types::{SectorImpact, SentimentLabel};
use heuristics::{classify_sentiment, extract_sector_impacts};

const ANALYSIS: &str = "Overall sentiment is cautiously positive. The IT sector gained 6% on \
strong deal wins, while Pharma declined 3% amid pricing pressure. Some analysts remain \
bearish on metals.";

#[test]
fn model_style_paragraph() {
    assert_eq!(classify_sentiment(ANALYSIS), SentimentLabel::Positive);
    assert_eq!(
        extract_sector_impacts(ANALYSIS),
        vec![SectorImpact::new("IT", 6), SectorImpact::new("Pharma", 3)]
    );
}

#[test]
fn text_without_signals() {
    let text = "The fund manager held a routine investor call.";
    assert_eq!(classify_sentiment(text), SentimentLabel::Neutral);
    assert!(extract_sector_impacts(text).is_empty());
}

#[test]
fn multiline_paragraphs_are_scanned_independently() {
    let text = "Auto grew 4% last month.\nRealty dropped 2%.";
    let impacts = extract_sector_impacts(text);
    let names: Vec<&str> = impacts.iter().map(|i| i.sector.as_str()).collect();
    assert_eq!(names, vec!["Auto", "Realty"]);
}
